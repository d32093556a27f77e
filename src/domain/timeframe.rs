use crate::domain::DateWindow;
use crate::utils::TimeUtils;

/// The `time` value of a trends request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Timeframe {
    /// Provider shorthand passed through verbatim, e.g. "today 1-m" or "now 7-d"
    Named(String),
    /// Explicit calendar range; both ends are inclusive on the provider side
    Range(DateWindow),
}

impl Timeframe {
    /// Covers the same days as a price request over `window`.
    pub fn matching(window: &DateWindow) -> Self {
        Timeframe::Range(*window)
    }

    pub fn to_request_value(&self) -> String {
        match self {
            Timeframe::Named(name) => name.clone(),
            Timeframe::Range(window) => format!(
                "{} {}",
                window.start.format(TimeUtils::STANDARD_TIME_FORMAT),
                window.last_day().format(TimeUtils::STANDARD_TIME_FORMAT)
            ),
        }
    }
}

impl std::fmt::Display for Timeframe {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.to_request_value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_range_uses_last_day_inclusive() {
        let window = DateWindow::new(
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 3, 31).unwrap(),
        )
        .unwrap();
        assert_eq!(
            Timeframe::matching(&window).to_request_value(),
            "2024-03-01 2024-03-30"
        );
    }

    #[test]
    fn test_named_passes_through() {
        let timeframe = Timeframe::Named("today 1-m".to_string());
        assert_eq!(timeframe.to_string(), "today 1-m");
    }
}
