use chrono::NaiveDate;
use serde_derive::{Deserialize, Serialize};
use uuid::Uuid;

use super::{
    category::ExpenseCategory,
    records::{Categorized, DatedAmount},
    recurrence::RecurrenceUnit,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: Uuid,
    pub title: String,
    pub amount: f64,
    pub category: ExpenseCategory,
    pub date: NaiveDate,
    #[serde(default)]
    pub notes: Option<String>,
    /// Set for recurring expenses (bills); `None` for one-time expenses.
    #[serde(default)]
    pub recurrence: Option<RecurrenceUnit>,
    #[serde(default)]
    pub next_due_date: Option<NaiveDate>,
    /// Opaque reference to a stored receipt image.
    #[serde(default)]
    pub receipt_ref: Option<String>,
}

impl Expense {
    pub fn new(
        title: impl Into<String>,
        amount: f64,
        category: ExpenseCategory,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            amount,
            category,
            date,
            notes: None,
            recurrence: None,
            next_due_date: None,
            receipt_ref: None,
        }
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    pub fn recurring(mut self, unit: RecurrenceUnit, next_due_date: NaiveDate) -> Self {
        self.recurrence = Some(unit);
        self.next_due_date = Some(next_due_date);
        self
    }

    pub fn with_receipt(mut self, receipt_ref: impl Into<String>) -> Self {
        self.receipt_ref = Some(receipt_ref.into());
        self
    }

    pub fn is_recurring(&self) -> bool {
        self.recurrence.is_some()
    }
}

impl DatedAmount for Expense {
    fn amount(&self) -> f64 {
        self.amount
    }
    fn date(&self) -> NaiveDate {
        self.date
    }
}

impl Categorized for Expense {
    fn category(&self) -> ExpenseCategory {
        self.category
    }
}
