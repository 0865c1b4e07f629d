use chrono::NaiveDate;
use serde_derive::{Deserialize, Serialize};
use uuid::Uuid;

use super::{records::DatedAmount, recurrence::RecurrenceUnit};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Income {
    pub id: Uuid,
    pub title: String,
    pub amount: f64,
    pub date: NaiveDate,
    #[serde(default)]
    pub recurrence: Option<RecurrenceUnit>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl Income {
    pub fn new(title: impl Into<String>, amount: f64, date: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            amount,
            date,
            recurrence: None,
            notes: None,
        }
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    pub fn recurring(mut self, unit: RecurrenceUnit) -> Self {
        self.recurrence = Some(unit);
        self
    }

    pub fn is_recurring(&self) -> bool {
        self.recurrence.is_some()
    }
}

impl DatedAmount for Income {
    fn amount(&self) -> f64 {
        self.amount
    }
    fn date(&self) -> NaiveDate {
        self.date
    }
}
