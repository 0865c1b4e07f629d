use serde_derive::{Deserialize, Serialize};

use super::period::PeriodKey;

/// Highest alert threshold already raised, and the period it was raised in.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BudgetAlertState {
    #[serde(default)]
    pub last_threshold: u32,
    #[serde(default)]
    pub period: Option<PeriodKey>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BudgetAlert {
    pub threshold: u32,
    pub percentage_used: u32,
    pub remaining: f64,
}

impl BudgetAlert {
    pub fn is_exceeded(&self) -> bool {
        self.threshold >= 100
    }
}
