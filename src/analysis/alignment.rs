use std::collections::{BTreeMap, BTreeSet};
use std::error::Error;
use std::fmt;

use chrono::NaiveDate;
use clap::ValueEnum;
use strum_macros::{Display, EnumString};

use crate::config::DEBUG_FLAGS;
use crate::models::{AlignedSeries, AlignmentReport, DatedValue, InterestSeries, PriceSeries};

/// How mention values are matched to price dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum AlignmentMode {
    /// Join on calendar date; price dates without a mention get 0
    #[default]
    Date,
    /// Legacy: take mention values in order and stamp them with the price dates.
    /// Both series must have the same length.
    Positional,
}

#[derive(Debug, PartialEq, Eq)]
pub enum AlignmentError {
    EmptyPriceSeries,
    LengthMismatch { prices: usize, interest: usize },
}

impl fmt::Display for AlignmentError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AlignmentError::EmptyPriceSeries => {
                write!(f, "Price series is empty, nothing to align mentions onto")
            }
            AlignmentError::LengthMismatch { prices, interest } => write!(
                f,
                "Positional alignment needs equal lengths: {} price points vs {} mention points",
                prices, interest
            ),
        }
    }
}

impl Error for AlignmentError {}

/// Every missing (None or NaN) interest value becomes exactly 0. Order and dates are kept.
pub fn zero_fill(series: &InterestSeries) -> Vec<DatedValue> {
    series
        .points()
        .iter()
        .map(|p| match p.value {
            Some(value) if !value.is_nan() => DatedValue::new(p.date, value),
            _ => DatedValue::new(p.date, 0.0),
        })
        .collect()
}

pub fn align(
    mode: AlignmentMode,
    prices: &PriceSeries,
    interest: &InterestSeries,
) -> Result<(AlignedSeries, AlignmentReport), AlignmentError> {
    match mode {
        AlignmentMode::Date => align_by_date(prices, interest),
        AlignmentMode::Positional => align_positional(prices, interest),
    }
}

/// Re-indexes the mentions onto the price dates by matching calendar days.
pub fn align_by_date(
    prices: &PriceSeries,
    interest: &InterestSeries,
) -> Result<(AlignedSeries, AlignmentReport), AlignmentError> {
    if prices.is_empty() {
        return Err(AlignmentError::EmptyPriceSeries);
    }
    if interest.is_empty() {
        log::warn!(
            "⚠️  No mention data for '{}', every price date gets 0",
            interest.keyword
        );
    }

    // Last row wins if the provider repeats a date
    let by_date: BTreeMap<NaiveDate, Option<f64>> =
        interest.points().iter().map(|p| (p.date, p.value)).collect();

    let mut report = AlignmentReport {
        price_points: prices.len(),
        interest_points: interest.len(),
        ..Default::default()
    };

    // Only values that land on a price date count as zero-filled
    let points: Vec<DatedValue> = prices
        .dates()
        .map(|date| match by_date.get(&date) {
            Some(Some(value)) if !value.is_nan() => {
                report.matched += 1;
                DatedValue::new(date, *value)
            }
            Some(_) => {
                report.matched += 1;
                report.zero_filled += 1;
                DatedValue::new(date, 0.0)
            }
            None => {
                report.unmatched_price_dates.push(date);
                DatedValue::new(date, 0.0)
            }
        })
        .collect();

    let price_dates: BTreeSet<NaiveDate> = prices.dates().collect();
    report.dropped_interest_dates = by_date
        .keys()
        .filter(|date| !price_dates.contains(date))
        .copied()
        .collect();

    if DEBUG_FLAGS.print_alignment_gaps {
        for date in &report.unmatched_price_dates {
            log::debug!("No mention row for price date {}, filled with 0", date);
        }
        for date in &report.dropped_interest_dates {
            log::debug!("Mention row {} has no price date, dropped", date);
        }
    }

    Ok((
        AlignedSeries {
            label: interest.keyword.clone(),
            points,
        },
        report,
    ))
}

/// Legacy positional zip: price dates, mention values in their original order.
/// The dates of the mention series are ignored entirely.
pub fn align_positional(
    prices: &PriceSeries,
    interest: &InterestSeries,
) -> Result<(AlignedSeries, AlignmentReport), AlignmentError> {
    if prices.is_empty() {
        return Err(AlignmentError::EmptyPriceSeries);
    }
    if prices.len() != interest.len() {
        return Err(AlignmentError::LengthMismatch {
            prices: prices.len(),
            interest: interest.len(),
        });
    }

    let points: Vec<DatedValue> = prices
        .dates()
        .zip(zero_fill(interest))
        .map(|(date, mention)| DatedValue::new(date, mention.value))
        .collect();

    let mismatched_dates = prices
        .dates()
        .zip(interest.points())
        .filter(|(price_date, mention)| *price_date != mention.date)
        .count();
    if mismatched_dates > 0 {
        log::warn!(
            "⚠️  Positional alignment stamped {} mention values onto a different date",
            mismatched_dates
        );
    }

    let report = AlignmentReport {
        price_points: prices.len(),
        interest_points: interest.len(),
        matched: points.len(),
        zero_filled: interest.missing_count(),
        ..Default::default()
    };

    Ok((
        AlignedSeries {
            label: interest.keyword.clone(),
            points,
        },
        report,
    ))
}
