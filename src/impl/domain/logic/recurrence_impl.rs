use chrono::{Days, Months, NaiveDate};
use fractic_server_error::{CriticalError, ServerError};

use crate::entities::RecurrenceUnit;

impl RecurrenceUnit {
    pub const ALL: [RecurrenceUnit; 4] = [
        RecurrenceUnit::Weekly,
        RecurrenceUnit::Biweekly,
        RecurrenceUnit::Monthly,
        RecurrenceUnit::Yearly,
    ];

    /// Next occurrence after `date`. Month and year steps are calendar
    /// steps: a day missing from the target month clamps to its last day.
    pub fn advance(&self, date: NaiveDate) -> Result<NaiveDate, ServerError> {
        let next = match self {
            RecurrenceUnit::Weekly => date.checked_add_days(Days::new(7)),
            RecurrenceUnit::Biweekly => date.checked_add_days(Days::new(14)),
            RecurrenceUnit::Monthly => date.checked_add_months(Months::new(1)),
            RecurrenceUnit::Yearly => date.checked_add_months(Months::new(12)),
        };
        next.ok_or_else(|| {
            CriticalError::with_debug(
                "advancing a recurrence left the supported calendar range",
                &format!("date: {}, unit: {:?}", date, self),
            )
        })
    }

    /// Factor that normalizes one payment to an average monthly cost.
    pub fn monthly_multiplier(&self) -> f64 {
        match self {
            RecurrenceUnit::Weekly => 4.33,
            RecurrenceUnit::Biweekly => 2.17,
            RecurrenceUnit::Monthly => 1.0,
            RecurrenceUnit::Yearly => 1.0 / 12.0,
        }
    }
}

pub fn advance(date: NaiveDate, unit: RecurrenceUnit) -> Result<NaiveDate, ServerError> {
    unit.advance(date)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn weekly_and_biweekly_cross_month_boundaries() {
        assert_eq!(advance(d(2024, 1, 29), RecurrenceUnit::Weekly).unwrap(), d(2024, 2, 5));
        assert_eq!(advance(d(2024, 12, 25), RecurrenceUnit::Biweekly).unwrap(), d(2025, 1, 8));
    }

    #[test]
    fn monthly_clamps_to_end_of_shorter_month() {
        assert_eq!(advance(d(2024, 1, 31), RecurrenceUnit::Monthly).unwrap(), d(2024, 2, 29));
        assert_eq!(advance(d(2023, 1, 31), RecurrenceUnit::Monthly).unwrap(), d(2023, 2, 28));
        assert_eq!(advance(d(2024, 12, 15), RecurrenceUnit::Monthly).unwrap(), d(2025, 1, 15));
    }

    #[test]
    fn yearly_from_leap_day_lands_on_feb_28() {
        assert_eq!(advance(d(2024, 2, 29), RecurrenceUnit::Yearly).unwrap(), d(2025, 2, 28));
        assert_eq!(advance(d(2023, 6, 1), RecurrenceUnit::Yearly).unwrap(), d(2024, 6, 1));
    }

    #[test]
    fn advancing_past_the_calendar_range_is_an_error() {
        assert!(advance(NaiveDate::MAX, RecurrenceUnit::Weekly).is_err());
    }

    #[test]
    fn yearly_multiplier_is_a_twelfth() {
        assert!((RecurrenceUnit::Yearly.monthly_multiplier() * 12.0 - 1.0).abs() < 1e-12);
    }
}
