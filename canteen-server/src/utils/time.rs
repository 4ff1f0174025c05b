//! Time helpers for business timezone conversion
//!
//! All date→timestamp conversion happens in one place; repositories and the
//! queue core only ever see `i64` Unix millis.

use chrono::NaiveDate;
use chrono_tz::Tz;

use super::{AppError, AppResult};

/// Parse a date string (YYYY-MM-DD)
pub fn parse_date(date: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|_| AppError::validation(format!("Invalid date format: {}", date)))
}

/// Date + hour/min/sec → Unix millis (business timezone)
///
/// DST gap fallback: if the local time does not exist, fall back to UTC.
pub fn date_hms_to_millis(date: NaiveDate, hour: u32, min: u32, sec: u32, tz: Tz) -> i64 {
    let naive = date.and_hms_opt(hour, min, sec).unwrap();
    naive
        .and_local_timezone(tz)
        .latest()
        .map(|dt| dt.timestamp_millis())
        .unwrap_or_else(|| naive.and_utc().timestamp_millis())
}

/// Start of a calendar day (00:00:00) → Unix millis (business timezone)
pub fn day_start_millis(date: NaiveDate, tz: Tz) -> i64 {
    date_hms_to_millis(date, 0, 0, 0, tz)
}

/// End of a calendar day → next day 00:00:00 Unix millis (business timezone)
///
/// Callers use `< end` (exclusive) semantics.
pub fn day_end_millis(date: NaiveDate, tz: Tz) -> i64 {
    let next_day = date.succ_opt().unwrap_or(date);
    date_hms_to_millis(next_day, 0, 0, 0, tz)
}

/// Today's calendar date in the business timezone
pub fn today(tz: Tz) -> NaiveDate {
    chrono::Utc::now().with_timezone(&tz).date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date() {
        assert!(parse_date("2026-02-01").is_ok());
        assert!(parse_date("01/02/2026").is_err());
        assert!(parse_date("not-a-date").is_err());
    }

    #[test]
    fn test_day_bounds_are_exclusive() {
        let tz = chrono_tz::Europe::Madrid;
        let date = NaiveDate::from_ymd_opt(2026, 3, 10).unwrap();
        let start = day_start_millis(date, tz);
        let end = day_end_millis(date, tz);
        assert!(end > start);
        // A regular day spans exactly 24h
        assert_eq!(end - start, 24 * 60 * 60 * 1000);
    }

    #[test]
    fn test_day_start_ordering_across_days() {
        let tz = chrono_tz::Europe::Madrid;
        let d1 = NaiveDate::from_ymd_opt(2026, 3, 10).unwrap();
        let d2 = NaiveDate::from_ymd_opt(2026, 3, 11).unwrap();
        assert_eq!(day_end_millis(d1, tz), day_start_millis(d2, tz));
    }
}
