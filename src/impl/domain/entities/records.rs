use chrono::NaiveDate;

use super::category::ExpenseCategory;

// Seams used by the aggregation logic, so that the same functions can run
// over expenses, incomes and contributions alike.
// ---

pub trait DatedAmount {
    fn amount(&self) -> f64;
    fn date(&self) -> NaiveDate;
}

pub trait Categorized: DatedAmount {
    fn category(&self) -> ExpenseCategory;
}

impl<T: DatedAmount + ?Sized> DatedAmount for &T {
    fn amount(&self) -> f64 {
        (**self).amount()
    }
    fn date(&self) -> NaiveDate {
        (**self).date()
    }
}

impl<T: Categorized + ?Sized> Categorized for &T {
    fn category(&self) -> ExpenseCategory {
        (**self).category()
    }
}
