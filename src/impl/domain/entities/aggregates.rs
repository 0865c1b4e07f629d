use chrono::NaiveDate;

use super::{category::ExpenseCategory, period::PeriodKey};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DailyAmount {
    pub date: NaiveDate,
    pub amount: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonthlyAmount {
    pub period: PeriodKey,
    pub amount: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CategoryShare {
    pub category: ExpenseCategory,
    pub amount: f64,
    /// Percentage (0-100) of the total over the same range.
    pub percentage: f64,
}
