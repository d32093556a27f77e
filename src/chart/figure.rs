use anyhow::{Result, bail};
use chrono::{Duration, NaiveDate};
use itertools::{Itertools, MinMaxResult};
use plotters::style::RGBColor;

use crate::config::{MARKET, PLOT_CONFIG, PlotLabels, TRENDS};
use crate::models::{AlignedSeries, DatedValue, PriceSeries};
use crate::utils::time_utils::days_since;

/// Wording for one chart run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartLabels {
    pub title: String,
    pub x_axis: String,
    pub price_axis: String,
    pub mention_axis: String,
    pub price_legend: String,
    pub mention_legend: String,
}

impl From<&PlotLabels> for ChartLabels {
    fn from(labels: &PlotLabels) -> Self {
        Self {
            title: labels.title.to_string(),
            x_axis: labels.x_axis.to_string(),
            price_axis: labels.price_axis.to_string(),
            mention_axis: labels.mention_axis.to_string(),
            price_legend: labels.price_legend.to_string(),
            mention_legend: labels.mention_legend.to_string(),
        }
    }
}

impl ChartLabels {
    /// Configured wording for the default asset/keyword, generated wording otherwise.
    pub fn for_run(asset: &str, quote: Option<&str>, keyword: &str) -> Self {
        let configured = ChartLabels::from(&PLOT_CONFIG.labels);
        if asset == MARKET.default_asset_label && keyword == TRENDS.default_keyword {
            return configured;
        }
        let price_axis = match quote {
            Some(quote) => format!("{} Price ({})", asset, quote),
            None => format!("{} Price", asset),
        };
        Self {
            title: format!("{} Price vs Internet Mentions of '{}'", asset, keyword),
            price_axis,
            price_legend: format!("{} Price", asset),
            ..configured
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisSide {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegendPosition {
    UpperLeft,
}

/// Shared x axis: whole days from `start` to `end` inclusive
#[derive(Debug, Clone, PartialEq)]
pub struct DateAxis {
    pub label: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateAxis {
    /// Day offset of the last tick; at least 1 so a single day still has width
    pub fn span_days(&self) -> i32 {
        days_since(self.start, self.end).max(1)
    }

    pub fn offset_of(&self, date: NaiveDate) -> i32 {
        days_since(self.start, date)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ValueAxis {
    pub side: AxisSide,
    pub label: String,
    pub color: RGBColor,
    pub min: f64,
    pub max: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Trace {
    pub label: String,
    pub side: AxisSide,
    pub color: RGBColor,
    pub points: Vec<DatedValue>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Legend {
    pub position: LegendPosition,
    pub entries: Vec<String>,
}

/// Backend-independent description of the price/mention chart.
#[derive(Debug, Clone, PartialEq)]
pub struct DualAxisFigure {
    pub title: String,
    pub x_axis: DateAxis,
    pub y_axes: [ValueAxis; 2],
    pub traces: Vec<Trace>,
    pub legend: Legend,
}

impl DualAxisFigure {
    pub fn new(prices: &PriceSeries, mentions: &AlignedSeries, labels: &ChartLabels) -> Result<Self> {
        let (Some(start), Some(end)) = (prices.first_date(), prices.last_date()) else {
            bail!("Cannot chart an empty price series for {}", prices.symbol);
        };
        if mentions.dates().iter().any(|d| *d < start || *d > end) {
            bail!("Mention dates fall outside the price dates, align them first");
        }

        let (price_min, price_max) = padded_range(&prices.values());
        let price_axis = ValueAxis {
            side: AxisSide::Left,
            label: labels.price_axis.clone(),
            color: PLOT_CONFIG.price_color,
            min: price_min,
            max: price_max,
        };
        let (mention_min, mention_max) = padded_range(&mentions.values());
        let mention_axis = ValueAxis {
            side: AxisSide::Right,
            label: labels.mention_axis.clone(),
            color: PLOT_CONFIG.mention_color,
            min: mention_min,
            max: mention_max,
        };

        let traces = vec![
            Trace {
                label: labels.price_legend.clone(),
                side: AxisSide::Left,
                color: PLOT_CONFIG.price_color,
                points: prices.points().to_vec(),
            },
            Trace {
                label: labels.mention_legend.clone(),
                side: AxisSide::Right,
                color: PLOT_CONFIG.mention_color,
                points: mentions.points.clone(),
            },
        ];

        Ok(Self {
            title: labels.title.clone(),
            x_axis: DateAxis {
                label: labels.x_axis.clone(),
                start,
                end: end.max(start + Duration::days(1)),
            },
            y_axes: [price_axis, mention_axis],
            legend: Legend {
                position: LegendPosition::UpperLeft,
                entries: traces.iter().map(|t| t.label.clone()).collect(),
            },
            traces,
        })
    }

    pub fn y_axis(&self, side: AxisSide) -> &ValueAxis {
        match side {
            AxisSide::Left => &self.y_axes[0],
            AxisSide::Right => &self.y_axes[1],
        }
    }

    pub fn traces_on(&self, side: AxisSide) -> impl Iterator<Item = &Trace> {
        self.traces.iter().filter(move |t| t.side == side)
    }

    /// Every trace is drawn against the one date axis
    pub fn shares_x_axis(&self) -> bool {
        self.traces
            .iter()
            .flat_map(|t| t.points.iter())
            .all(|p| self.x_axis.contains(p.date))
    }
}

/// Finite min/max of `values` widened by the configured headroom. Never zero-width.
fn padded_range(values: &[f64]) -> (f64, f64) {
    let (min, max) = match values.iter().copied().filter(|v| v.is_finite()).minmax() {
        MinMaxResult::NoElements => (0.0, 1.0),
        MinMaxResult::OneElement(v) => (v, v),
        MinMaxResult::MinMax(min, max) => (min, max),
    };
    let span = max - min;
    let pad = if span > 0.0 {
        span * PLOT_CONFIG.y_axis_padding_pct
    } else if max.abs() > 0.0 {
        max.abs() * PLOT_CONFIG.y_axis_padding_pct
    } else {
        1.0
    };
    (min - pad, max + pad)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::align_by_date;
    use crate::models::{InterestPoint, InterestSeries};

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    fn sample() -> (PriceSeries, AlignedSeries) {
        let prices = PriceSeries::new(
            "DOGE-USD",
            vec![
                DatedValue::new(date(1), 0.10),
                DatedValue::new(date(2), 0.12),
                DatedValue::new(date(3), 0.11),
            ],
        );
        let interest = InterestSeries::new(
            "Dogecoin",
            vec![
                InterestPoint::new(date(1), Some(50.0)),
                InterestPoint::new(date(2), None),
                InterestPoint::new(date(3), Some(80.0)),
            ],
        );
        let (aligned, _) = align_by_date(&prices, &interest).unwrap();
        (prices, aligned)
    }

    #[test]
    fn test_two_y_axes_share_one_x_axis() {
        let (prices, aligned) = sample();
        let labels = ChartLabels::from(&PLOT_CONFIG.labels);
        let figure = DualAxisFigure::new(&prices, &aligned, &labels).unwrap();

        assert_eq!(figure.y_axes.len(), 2);
        assert_ne!(figure.y_axes[0].side, figure.y_axes[1].side);
        assert_eq!(figure.y_axis(AxisSide::Left).label, "DOGE Price (USD)");
        assert_eq!(figure.y_axis(AxisSide::Right).label, "Number of Mentions");
        assert_eq!(figure.traces_on(AxisSide::Left).count(), 1);
        assert_eq!(figure.traces_on(AxisSide::Right).count(), 1);
        assert!(figure.shares_x_axis());
        assert_eq!(figure.x_axis.start, date(1));
        assert_eq!(figure.x_axis.end, date(3));
        assert_eq!(figure.x_axis.span_days(), 2);
    }

    #[test]
    fn test_legend_lists_both_series() {
        let (prices, aligned) = sample();
        let labels = ChartLabels::from(&PLOT_CONFIG.labels);
        let figure = DualAxisFigure::new(&prices, &aligned, &labels).unwrap();

        assert_eq!(figure.legend.position, LegendPosition::UpperLeft);
        assert_eq!(figure.legend.entries, vec!["DOGE Price", "Mentions"]);
        assert_eq!(figure.title, "Dogecoin Price vs Internet Mentions");
    }

    #[test]
    fn test_axis_ranges_are_independent_and_padded() {
        let (prices, aligned) = sample();
        let figure =
            DualAxisFigure::new(&prices, &aligned, &ChartLabels::from(&PLOT_CONFIG.labels)).unwrap();

        let left = figure.y_axis(AxisSide::Left);
        assert!(left.min < 0.10 && left.max > 0.12 && left.max < 1.0);
        let right = figure.y_axis(AxisSide::Right);
        assert!(right.min < 0.0 && right.max > 80.0);
    }

    #[test]
    fn test_single_day_and_flat_series() {
        let prices = PriceSeries::new("DOGE-USD", vec![DatedValue::new(date(5), 0.2)]);
        let aligned = AlignedSeries {
            label: "Dogecoin".to_string(),
            points: vec![DatedValue::new(date(5), 0.0)],
        };
        let figure =
            DualAxisFigure::new(&prices, &aligned, &ChartLabels::from(&PLOT_CONFIG.labels)).unwrap();
        assert_eq!(figure.x_axis.span_days(), 1);
        let right = figure.y_axis(AxisSide::Right);
        assert_eq!((right.min, right.max), (-1.0, 1.0));

        let empty = PriceSeries::new("DOGE-USD", Vec::new());
        assert!(DualAxisFigure::new(&empty, &aligned, &ChartLabels::from(&PLOT_CONFIG.labels)).is_err());
    }

    #[test]
    fn test_labels_follow_asset_and_keyword() {
        assert_eq!(
            ChartLabels::for_run("DOGE", Some("USD"), "Dogecoin"),
            ChartLabels::from(&PLOT_CONFIG.labels)
        );
        let labels = ChartLabels::for_run("BTC", Some("EUR"), "Bitcoin");
        assert_eq!(labels.price_axis, "BTC Price (EUR)");
        assert_eq!(labels.price_legend, "BTC Price");
        assert_eq!(labels.mention_legend, "Mentions");
        assert!(labels.title.contains("Bitcoin"));
    }
}
