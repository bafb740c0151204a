//! Calendar utilities

use chrono::{Datelike, NaiveDate};

/// Number of days in the given month, leap years included
///
/// Computed as the day before the first of the following month, so February
/// comes out as 28 or 29 without any explicit leap-year rule here.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };

    // Both dates are always valid for month in 1..=12.
    let first_of_next = NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .expect("first of month is always a valid date");
    first_of_next.pred_opt().expect("date has a predecessor").day()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regular_months() {
        assert_eq!(days_in_month(2025, 1), 31);
        assert_eq!(days_in_month(2025, 4), 30);
        assert_eq!(days_in_month(2025, 6), 30);
        assert_eq!(days_in_month(2025, 12), 31);
    }

    #[test]
    fn test_february_leap_years() {
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2025, 2), 28);
        assert_eq!(days_in_month(2000, 2), 29);
        assert_eq!(days_in_month(1900, 2), 28);
    }

    #[test]
    fn test_december_rollover() {
        assert_eq!(days_in_month(2024, 12), 31);
    }
}
