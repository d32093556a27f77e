use chrono::{DateTime, Duration, NaiveDate, Utc};

pub struct TimeUtils;

impl TimeUtils {
    pub const STANDARD_TIME_FORMAT: &str = "%Y-%m-%d";

    /// Midnight UTC of `date` as unix seconds.
    pub fn date_to_epoch_sec(date: NaiveDate) -> i64 {
        date.and_hms_opt(0, 0, 0)
            .map(|dt| dt.and_utc().timestamp())
            .unwrap_or_default()
    }

    /// Calendar date of `epoch_sec` after shifting by `utc_offset_sec`.
    /// Returns None for timestamps chrono cannot represent.
    pub fn epoch_sec_to_date(epoch_sec: i64, utc_offset_sec: i64) -> Option<NaiveDate> {
        DateTime::from_timestamp(epoch_sec + utc_offset_sec, 0).map(|dt| dt.date_naive())
    }

    pub fn format_date(date: NaiveDate) -> String {
        date.format(Self::STANDARD_TIME_FORMAT).to_string()
    }
}

pub fn today_utc() -> NaiveDate {
    Utc::now().date_naive()
}

/// Whole days from `origin` to `date` (negative when `date` is earlier)
pub fn days_since(origin: NaiveDate, date: NaiveDate) -> i32 {
    (date - origin).num_days() as i32
}

pub fn date_from_offset(origin: NaiveDate, days: i32) -> NaiveDate {
    origin + Duration::days(i64::from(days))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_epoch_round_trip_with_offset() {
        // 2024-05-28 23:30 UTC is already the 29th at UTC+1
        let epoch = 1_716_939_000;
        assert_eq!(
            TimeUtils::epoch_sec_to_date(epoch, 0),
            NaiveDate::from_ymd_opt(2024, 5, 28)
        );
        assert_eq!(
            TimeUtils::epoch_sec_to_date(epoch, 3_600),
            NaiveDate::from_ymd_opt(2024, 5, 29)
        );
    }

    #[test]
    fn test_day_offsets() {
        let origin = NaiveDate::from_ymd_opt(2024, 2, 27).unwrap();
        let later = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        assert_eq!(days_since(origin, later), 3);
        assert_eq!(date_from_offset(origin, 3), later);
        assert_eq!(TimeUtils::format_date(later), "2024-03-01");
    }
}
