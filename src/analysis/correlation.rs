use statrs::statistics::Statistics;

use crate::models::{AlignedSeries, PriceSeries};

/// Pearson correlation between the price and the aligned mentions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CorrelationSummary {
    pub samples: usize,
    /// None with fewer than two samples or when either series is flat
    pub pearson: Option<f64>,
}

impl std::fmt::Display for CorrelationSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.pearson {
            Some(r) => write!(f, "r = {:.3} over {} days", r, self.samples),
            None => write!(f, "undefined over {} days", self.samples),
        }
    }
}

pub fn correlation(prices: &PriceSeries, mentions: &AlignedSeries) -> CorrelationSummary {
    let x = prices.values();
    let y = mentions.values();
    let samples = x.len().min(y.len());
    let (x, y) = (&x[..samples], &y[..samples]);

    if samples < 2 {
        return CorrelationSummary {
            samples,
            pearson: None,
        };
    }

    let covariance = x.iter().covariance(y.iter());
    let denominator = x.iter().std_dev() * y.iter().std_dev();
    let pearson = (denominator > 0.0 && denominator.is_finite())
        .then(|| (covariance / denominator).clamp(-1.0, 1.0));

    CorrelationSummary { samples, pearson }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DatedValue;
    use chrono::NaiveDate;

    fn series(values: &[f64]) -> (PriceSeries, AlignedSeries) {
        let points: Vec<DatedValue> = values
            .iter()
            .enumerate()
            .map(|(i, v)| DatedValue::new(NaiveDate::from_ymd_opt(2024, 1, i as u32 + 1).unwrap(), *v))
            .collect();
        (
            PriceSeries::new("DOGE-USD", points.clone()),
            AlignedSeries {
                label: "Dogecoin".to_string(),
                points,
            },
        )
    }

    #[test]
    fn test_identical_series_fully_correlated() {
        let (prices, mentions) = series(&[1.0, 2.0, 4.0, 3.0]);
        let summary = correlation(&prices, &mentions);
        assert_eq!(summary.samples, 4);
        assert!((summary.pearson.unwrap() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_flat_series_undefined() {
        let (prices, _) = series(&[1.0, 2.0, 3.0]);
        let (_, flat) = series(&[5.0, 5.0, 5.0]);
        assert_eq!(correlation(&prices, &flat).pearson, None);

        let (single, single_mentions) = series(&[1.0]);
        assert_eq!(correlation(&single, &single_mentions).pearson, None);
    }
}
