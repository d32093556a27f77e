//! fetch → clean → align → plot → save

use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::analysis::{CorrelationSummary, align, correlation};
use crate::chart::{ChartLabels, DualAxisFigure, RenderOptions, render_png};
use crate::config::RunConfig;
use crate::data::{FetchedSeries, SeriesSources, fetch_series};
use crate::models::{AlignedSeries, AlignmentReport};

/// Everything needed to draw, before anything touches the disk
#[derive(Debug, Clone)]
pub struct PreparedChart {
    pub fetched: FetchedSeries,
    pub aligned: AlignedSeries,
    pub report: AlignmentReport,
    pub correlation: CorrelationSummary,
    pub figure: DualAxisFigure,
}

#[derive(Debug, Clone)]
pub struct RunSummary {
    pub price_signature: &'static str,
    pub interest_signature: &'static str,
    pub report: AlignmentReport,
    pub correlation: CorrelationSummary,
    pub output: PathBuf,
}

pub async fn prepare_chart(config: &RunConfig, sources: &SeriesSources) -> Result<PreparedChart> {
    let fetched = fetch_series(config, sources).await?;

    let interest = if config.skip_leading > 0 {
        log::info!(
            "Dropping the first {} interest rows (legacy trim)",
            config.skip_leading
        );
        fetched.interest.skip_leading(config.skip_leading)
    } else {
        fetched.interest.clone()
    };

    let (aligned, report) = align(config.alignment, &fetched.prices, &interest)
        .with_context(|| format!("Alignment failed ({} mode)", config.alignment))?;
    log::info!("Aligned by {}: {}", config.alignment, report);
    if !report.is_exact() {
        log::warn!(
            "⚠️  Series calendars differ: {} price dates filled with 0, {} mention dates dropped",
            report.unmatched_price_dates.len(),
            report.dropped_interest_dates.len()
        );
    }

    let correlation = correlation(&fetched.prices, &aligned);
    log::info!("Price/mention correlation: {}", correlation);

    let labels = ChartLabels::for_run(config.symbol.base(), config.symbol.quote(), &config.keyword);
    let figure = DualAxisFigure::new(&fetched.prices, &aligned, &labels)?;

    Ok(PreparedChart {
        fetched,
        aligned,
        report,
        correlation,
        figure,
    })
}

/// The whole run: fetch both series, align them, and write the chart.
pub async fn run_pipeline(config: &RunConfig, sources: &SeriesSources) -> Result<RunSummary> {
    let prepared = prepare_chart(config, sources).await?;

    let options = RenderOptions {
        font: config.font.clone(),
        ..RenderOptions::default()
    };
    render_png(&prepared.figure, &config.output, &options)?;
    log::info!("✅ Chart written to {}", config.output.display());

    Ok(RunSummary {
        price_signature: prepared.fetched.price_signature,
        interest_signature: prepared.fetched.interest_signature,
        report: prepared.report,
        correlation: prepared.correlation,
        output: config.output.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Cli;
    use crate::analysis::AlignmentMode;
    use crate::chart::AxisSide;
    use crate::data::market::CreatePriceSeries;
    use crate::data::trends::CreateInterestSeries;
    use crate::domain::{DateWindow, MarketSymbol, Timeframe};
    use crate::models::{DatedValue, InterestPoint, InterestSeries, PriceSeries};
    use anyhow::bail;
    use async_trait::async_trait;
    use chrono::NaiveDate;
    use clap::Parser;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    struct FixedPrices(Vec<(u32, f64)>);

    #[async_trait]
    impl CreatePriceSeries for FixedPrices {
        fn signature(&self) -> &'static str {
            "Fixed Prices"
        }

        async fn create_price_series(
            &self,
            symbol: &MarketSymbol,
            _window: &DateWindow,
        ) -> Result<PriceSeries> {
            Ok(PriceSeries::new(
                symbol.to_string(),
                self.0.iter().map(|(d, v)| DatedValue::new(date(*d), *v)).collect(),
            ))
        }
    }

    struct FixedInterest(Vec<(u32, Option<f64>)>);

    #[async_trait]
    impl CreateInterestSeries for FixedInterest {
        fn signature(&self) -> &'static str {
            "Fixed Interest"
        }

        async fn create_interest_series(
            &self,
            keyword: &str,
            _timeframe: &Timeframe,
        ) -> Result<InterestSeries> {
            Ok(InterestSeries::new(
                keyword,
                self.0.iter().map(|(d, v)| InterestPoint::new(date(*d), *v)).collect(),
            ))
        }
    }

    struct Unreachable;

    #[async_trait]
    impl CreateInterestSeries for Unreachable {
        fn signature(&self) -> &'static str {
            "Unreachable"
        }

        async fn create_interest_series(&self, _: &str, _: &Timeframe) -> Result<InterestSeries> {
            bail!("connection refused")
        }
    }

    fn config(args: &[&str]) -> RunConfig {
        let cli = Cli::try_parse_from(std::iter::once("price-mentions").chain(args.iter().copied()))
            .unwrap();
        RunConfig::from_cli(&cli, date(4)).unwrap()
    }

    fn sources(interest: Vec<(u32, Option<f64>)>) -> SeriesSources {
        SeriesSources {
            price: Box::new(FixedPrices(vec![(1, 0.10), (2, 0.12), (3, 0.11)])),
            interest: Box::new(FixedInterest(interest)),
        }
    }

    #[tokio::test]
    async fn test_three_day_scenario_end_to_end() {
        let sources = sources(vec![(1, Some(50.0)), (2, Some(f64::NAN)), (3, Some(80.0))]);
        let prepared = prepare_chart(&config(&[]), &sources).await.unwrap();

        assert_eq!(prepared.aligned.values(), vec![50.0, 0.0, 80.0]);
        assert_eq!(prepared.aligned.dates(), vec![date(1), date(2), date(3)]);
        assert!(prepared.report.is_exact());
        assert_eq!(prepared.fetched.price_signature, "Fixed Prices");
        assert_eq!(prepared.figure.legend.entries, vec!["DOGE Price", "Mentions"]);
        assert_eq!(prepared.figure.y_axis(AxisSide::Right).label, "Number of Mentions");
        assert_eq!(prepared.correlation.samples, 3);
    }

    #[tokio::test]
    async fn test_legacy_trim_then_positional() {
        // Two warm-up rows ahead of the price dates, as legacy mode assumes
        let sources = sources(vec![
            (30, Some(1.0)),
            (31, Some(2.0)),
            (1, Some(50.0)),
            (2, None),
            (3, Some(80.0)),
        ]);
        let prepared = prepare_chart(&config(&["--legacy"]), &sources).await.unwrap();
        assert_eq!(prepared.aligned.values(), vec![50.0, 0.0, 80.0]);
    }

    #[tokio::test]
    async fn test_positional_mismatch_fails_instead_of_truncating() {
        let sources = sources(vec![(1, Some(50.0)), (2, Some(60.0))]);
        let cfg = config(&["--alignment", "positional"]);
        assert_eq!(cfg.alignment, AlignmentMode::Positional);

        let err = prepare_chart(&cfg, &sources).await.unwrap_err();
        assert!(format!("{:#}", err).contains("3 price points vs 2 mention points"));
    }

    #[tokio::test]
    async fn test_date_mode_tolerates_mismatched_calendars() {
        let sources = sources(vec![(2, Some(60.0)), (3, Some(70.0)), (4, Some(90.0))]);
        let prepared = prepare_chart(&config(&[]), &sources).await.unwrap();
        assert_eq!(prepared.aligned.values(), vec![0.0, 60.0, 70.0]);
        assert_eq!(prepared.report.unmatched_price_dates, vec![date(1)]);
        assert_eq!(prepared.report.dropped_interest_dates, vec![date(4)]);
    }

    #[tokio::test]
    async fn test_provider_error_propagates_with_context() {
        let sources = SeriesSources {
            price: Box::new(FixedPrices(vec![(1, 0.10)])),
            interest: Box::new(Unreachable),
        };
        let err = prepare_chart(&config(&[]), &sources).await.unwrap_err();
        let message = format!("{:#}", err);
        assert!(message.contains("Interest fetch failed (Unreachable)"));
        assert!(message.contains("connection refused"));
    }
}
