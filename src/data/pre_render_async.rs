// Async fetching that has to finish before anything can be aligned or drawn

use anyhow::{Context, Result};

use crate::config::{DEBUG_FLAGS, RunConfig};
use crate::data::http::build_client;
use crate::data::market::{CreatePriceSeries, PriceReplayVersion, YahooChartVersion};
use crate::data::trends::{CreateInterestSeries, GoogleTrendsVersion, InterestReplayVersion};
use crate::models::{InterestSeries, PriceSeries};

/// One price source and one interest source for a run
pub struct SeriesSources {
    pub price: Box<dyn CreatePriceSeries>,
    pub interest: Box<dyn CreateInterestSeries>,
}

impl SeriesSources {
    /// Replay files when given, the live APIs otherwise.
    pub fn from_config(config: &RunConfig) -> Result<Self> {
        let price: Box<dyn CreatePriceSeries> = match &config.price_replay {
            Some(path) => Box::new(PriceReplayVersion { path: path.clone() }),
            None => Box::new(YahooChartVersion::new(build_client()?)),
        };
        // Own client so the trends session cookies stay separate
        let interest: Box<dyn CreateInterestSeries> = match &config.interest_replay {
            Some(path) => Box::new(InterestReplayVersion { path: path.clone() }),
            None => Box::new(GoogleTrendsVersion::new(
                build_client()?,
                config.hl.clone(),
                config.tz,
            )),
        };

        Ok(Self { price, interest })
    }
}

#[derive(Debug, Clone)]
pub struct FetchedSeries {
    pub prices: PriceSeries,
    pub interest: InterestSeries,
    pub price_signature: &'static str,
    pub interest_signature: &'static str,
}

/// Fetches prices, then interest. Provider errors propagate; nothing is retried.
pub async fn fetch_series(config: &RunConfig, sources: &SeriesSources) -> Result<FetchedSeries> {
    log::info!(
        "Fetching {} closes over {} from {}",
        config.symbol,
        config.window,
        sources.price.signature()
    );
    let prices = sources
        .price
        .create_price_series(&config.symbol, &config.window)
        .await
        .with_context(|| format!("Price fetch failed ({})", sources.price.signature()))?;
    log::info!("{} price points for {}", prices.len(), prices.symbol);

    log::info!(
        "Fetching interest in '{}' over '{}' from {}",
        config.keyword,
        config.timeframe,
        sources.interest.signature()
    );
    let interest = sources
        .interest
        .create_interest_series(&config.keyword, &config.timeframe)
        .await
        .with_context(|| format!("Interest fetch failed ({})", sources.interest.signature()))?;
    log::info!(
        "{} interest points for '{}' ({} missing)",
        interest.len(),
        interest.keyword,
        interest.missing_count()
    );
    if interest.last_point_partial {
        log::warn!("⚠️  Last interest point covers an incomplete day");
    }

    if DEBUG_FLAGS.print_series_values {
        log::debug!("Prices: {:?}", prices.values());
        log::debug!(
            "Interest: {:?}",
            interest.points().iter().map(|p| p.value).collect::<Vec<_>>()
        );
    }

    Ok(FetchedSeries {
        prices,
        interest,
        price_signature: sources.price.signature(),
        interest_signature: sources.interest.signature(),
    })
}
