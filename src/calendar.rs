//! Calendar mapping from simulated days to dates.
//!
//! Day zero of the simulation is the 2024 vernal equinox at midnight UTC.
//! Dates advance by whole simulated days; the time of day is not tracked.

use chrono::{DateTime, Days, NaiveDate, NaiveTime, Utc};

/// Vernal-equinox epoch corresponding to `elapsed_days = 0`.
pub const START_DATE: NaiveDate = match NaiveDate::from_ymd_opt(2024, 3, 20) {
    Some(date) => date,
    None => panic!("invalid epoch date"),
};

/// The epoch as a UTC instant (2024-03-20T00:00:00Z).
pub fn epoch() -> DateTime<Utc> {
    START_DATE.and_time(NaiveTime::MIN).and_utc()
}

/// Whole days elapsed since the epoch.
///
/// Negative and non-finite inputs map to day zero.
pub fn day_offset(elapsed_days: f64) -> i64 {
    if elapsed_days.is_finite() && elapsed_days > 0.0 {
        elapsed_days.floor() as i64
    } else {
        0
    }
}

/// Calendar date `elapsed_days` after the epoch.
///
/// Saturates at [`NaiveDate::MAX`] far beyond any reachable session length.
pub fn date_at(elapsed_days: f64) -> NaiveDate {
    let offset = day_offset(elapsed_days).unsigned_abs();
    START_DATE
        .checked_add_days(Days::new(offset))
        .unwrap_or(NaiveDate::MAX)
}

/// Long-form date, e.g. "Wednesday, March 20, 2024".
pub fn format_long(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}

/// Compact date for narrow layouts, e.g. "Mar 20, 2024".
pub fn format_short(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_epoch_is_vernal_equinox_midnight() {
        assert_eq!(epoch().to_rfc3339(), "2024-03-20T00:00:00+00:00");
        assert_eq!(date_at(0.0), START_DATE);
    }

    #[test]
    fn test_day_offset_floors() {
        assert_eq!(day_offset(0.0), 0);
        assert_eq!(day_offset(0.999), 0);
        assert_eq!(day_offset(1.0), 1);
        assert_eq!(day_offset(181.7), 181);
        assert_eq!(day_offset(-3.0), 0);
        assert_eq!(day_offset(f64::NAN), 0);
    }

    #[test]
    fn test_date_at_known_days() {
        assert_eq!(date_at(182.0), ymd(2024, 9, 18));
        assert_eq!(date_at(182.9), ymd(2024, 9, 18));
        assert_eq!(date_at(365.25), ymd(2025, 3, 20));
        assert_eq!(date_at(11.0), ymd(2024, 3, 31));
        assert_eq!(date_at(12.0), ymd(2024, 4, 1));
    }

    #[test]
    fn test_format_long() {
        assert_eq!(format_long(START_DATE), "Wednesday, March 20, 2024");
        assert_eq!(format_long(ymd(2024, 9, 18)), "Wednesday, September 18, 2024");
    }

    #[test]
    fn test_format_short() {
        assert_eq!(format_short(ymd(2024, 4, 1)), "Apr 1, 2024");
    }
}
