use chrono::NaiveDate;
use serde_derive::{Deserialize, Serialize};
use uuid::Uuid;

use super::records::DatedAmount;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavingsGoal {
    pub id: Uuid,
    pub title: String,
    pub target_amount: f64,
    /// Always the sum of `contributions`. Only changed through
    /// `add_contribution` / `remove_contribution`.
    #[serde(default)]
    pub(crate) current_amount: f64,
    #[serde(default)]
    pub target_date: Option<NaiveDate>,
    #[serde(default = "default_icon")]
    pub icon: String,
    #[serde(default = "default_color")]
    pub color: String,
    #[serde(default)]
    pub(crate) contributions: Vec<Contribution>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contribution {
    pub id: Uuid,
    pub amount: f64,
    pub date: NaiveDate,
    #[serde(default)]
    pub notes: Option<String>,
}

fn default_icon() -> String {
    "star.fill".to_string()
}

fn default_color() -> String {
    "blue".to_string()
}

impl SavingsGoal {
    pub fn new(title: impl Into<String>, target_amount: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            target_amount,
            current_amount: 0.0,
            target_date: None,
            icon: default_icon(),
            color: default_color(),
            contributions: Vec::new(),
        }
    }

    pub fn with_target_date(mut self, target_date: NaiveDate) -> Self {
        self.target_date = Some(target_date);
        self
    }

    pub fn with_style(mut self, icon: impl Into<String>, color: impl Into<String>) -> Self {
        self.icon = icon.into();
        self.color = color.into();
        self
    }

    pub fn current_amount(&self) -> f64 {
        self.current_amount
    }

    pub fn contributions(&self) -> &[Contribution] {
        &self.contributions
    }
}

impl Contribution {
    pub fn new(amount: f64, date: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4(),
            amount,
            date,
            notes: None,
        }
    }

    pub fn with_notes(mut self, notes: Option<String>) -> Self {
        self.notes = notes;
        self
    }
}

impl DatedAmount for Contribution {
    fn amount(&self) -> f64 {
        self.amount
    }
    fn date(&self) -> NaiveDate {
        self.date
    }
}
