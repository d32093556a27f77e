use anyhow::{Result, bail};
use chrono::{Days, Duration, NaiveDate};

use crate::utils::TimeUtils;

/// Half-open range of calendar days `[start, end)` requested from both providers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateWindow {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        if start >= end {
            bail!("Date window is empty: start {} is not before end {}", start, end);
        }
        Ok(Self { start, end })
    }

    /// The `lookback_days` days ending at (and excluding) `end`.
    pub fn ending_at(end: NaiveDate, lookback_days: u32) -> Result<Self> {
        if lookback_days == 0 {
            bail!("Lookback must be at least one day");
        }
        let Some(start) = end.checked_sub_days(Days::new(u64::from(lookback_days))) else {
            bail!(
                "Lookback of {} days before {} is outside the supported calendar",
                lookback_days,
                end
            );
        };
        Self::new(start, end)
    }

    pub fn days(&self) -> i64 {
        (self.end - self.start).num_days()
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date < self.end
    }

    /// Start of the window as unix seconds (00:00 UTC)
    pub fn start_epoch_sec(&self) -> i64 {
        TimeUtils::date_to_epoch_sec(self.start)
    }

    /// End of the window as unix seconds (00:00 UTC, exclusive)
    pub fn end_epoch_sec(&self) -> i64 {
        TimeUtils::date_to_epoch_sec(self.end)
    }

    /// Last day inside the window
    pub fn last_day(&self) -> NaiveDate {
        self.end - Duration::days(1)
    }
}

impl std::fmt::Display for DateWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{} .. {} ({} days)",
            self.start.format(TimeUtils::STANDARD_TIME_FORMAT),
            self.end.format(TimeUtils::STANDARD_TIME_FORMAT),
            self.days()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_ending_at_covers_lookback() {
        let window = DateWindow::ending_at(date(2024, 3, 31), 30).unwrap();
        assert_eq!(window.start, date(2024, 3, 1));
        assert_eq!(window.days(), 30);
        assert!(window.contains(date(2024, 3, 1)));
        assert!(window.contains(date(2024, 3, 30)));
        assert!(!window.contains(date(2024, 3, 31)));
        assert_eq!(window.last_day(), date(2024, 3, 30));
    }

    #[test]
    fn test_epoch_bounds() {
        let window = DateWindow::new(date(2024, 1, 1), date(2024, 1, 2)).unwrap();
        assert_eq!(window.start_epoch_sec(), 1_704_067_200);
        assert_eq!(window.end_epoch_sec(), 1_704_067_200 + 86_400);
    }

    #[test]
    fn test_rejects_empty_window() {
        assert!(DateWindow::ending_at(date(2024, 1, 1), 0).is_err());
        assert!(DateWindow::new(date(2024, 1, 2), date(2024, 1, 2)).is_err());
        assert!(DateWindow::ending_at(date(2024, 1, 1), u32::MAX).is_err());
    }
}
