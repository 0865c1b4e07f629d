use chrono::{Datelike, NaiveDate};
use fractic_server_error::ServerError;

use crate::errors::InvalidAmount;

/// Amounts stored in the ledger must be finite and non-negative.
pub(crate) fn validate_amount(title: &str, amount: f64) -> Result<(), ServerError> {
    if !amount.is_finite() || amount < 0.0 {
        return Err(InvalidAmount::new(title, amount));
    }
    Ok(())
}

/// Signed number of days from `from` to `to`.
pub(crate) fn days_between(from: NaiveDate, to: NaiveDate) -> i64 {
    (to - from).num_days()
}

/// Number of complete calendar months from `from` to `to` (0 if `to` is not
/// after `from`).
///
/// A month is complete once the day of month has been reached again, so
/// Jan 15 → Mar 14 is one month and Jan 15 → Mar 15 is two.
pub(crate) fn whole_months_between(from: NaiveDate, to: NaiveDate) -> i64 {
    if to <= from {
        return 0;
    }
    let mut months =
        (to.year() - from.year()) as i64 * 12 + (to.month() as i64 - from.month() as i64);
    if to.day() < from.day() {
        months -= 1;
    }
    months.max(0)
}

pub(crate) fn contains_ignore_case(haystack: &str, needle_lowercase: &str) -> bool {
    haystack.to_lowercase().contains(needle_lowercase)
}

/// `part / whole` clamped to [0, 1]; 0 when `whole` is not positive.
pub(crate) fn clamped_ratio(part: f64, whole: f64) -> f64 {
    if whole <= 0.0 {
        return 0.0;
    }
    (part / whole).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn whole_months_counts_only_complete_months() {
        assert_eq!(whole_months_between(d(2024, 1, 15), d(2024, 3, 14)), 1);
        assert_eq!(whole_months_between(d(2024, 1, 15), d(2024, 3, 15)), 2);
        assert_eq!(whole_months_between(d(2024, 11, 30), d(2025, 2, 1)), 2);
        assert_eq!(whole_months_between(d(2024, 3, 1), d(2024, 2, 1)), 0);
    }

    #[test]
    fn negative_and_non_finite_amounts_are_rejected() {
        assert!(validate_amount("Coffee", 5.5).is_ok());
        assert!(validate_amount("Coffee", 0.0).is_ok());
        assert!(validate_amount("Coffee", -0.01).is_err());
        assert!(validate_amount("Coffee", f64::NAN).is_err());
        assert!(validate_amount("Coffee", f64::INFINITY).is_err());
    }

    #[test]
    fn clamped_ratio_handles_zero_limit() {
        assert_eq!(clamped_ratio(50.0, 0.0), 0.0);
        assert_eq!(clamped_ratio(50.0, 100.0), 0.5);
        assert_eq!(clamped_ratio(150.0, 100.0), 1.0);
    }
}
