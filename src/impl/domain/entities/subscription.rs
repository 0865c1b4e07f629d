use chrono::NaiveDate;
use serde_derive::{Deserialize, Serialize};
use uuid::Uuid;

use super::{category::ExpenseCategory, recurrence::RecurrenceUnit};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subscription {
    pub id: Uuid,
    pub name: String,
    pub amount: f64,
    #[serde(default)]
    pub recurrence: RecurrenceUnit,
    #[serde(default = "default_category")]
    pub category: ExpenseCategory,
    pub next_billing_date: NaiveDate,
    pub start_date: NaiveDate,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default = "default_true")]
    pub reminder_enabled: bool,
}

fn default_category() -> ExpenseCategory {
    ExpenseCategory::Utilities
}

fn default_true() -> bool {
    true
}

impl Subscription {
    /// Monthly subscription on the utilities category, first billed on
    /// `start_date`.
    pub fn new(name: impl Into<String>, amount: f64, start_date: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            amount,
            recurrence: RecurrenceUnit::default(),
            category: default_category(),
            next_billing_date: start_date,
            start_date,
            is_active: true,
            notes: None,
            reminder_enabled: true,
        }
    }

    pub fn billed(mut self, recurrence: RecurrenceUnit) -> Self {
        self.recurrence = recurrence;
        self
    }

    pub fn in_category(mut self, category: ExpenseCategory) -> Self {
        self.category = category;
        self
    }

    pub fn next_billing_on(mut self, date: NaiveDate) -> Self {
        self.next_billing_date = date;
        self
    }
}
