use std::collections::BTreeMap;

use serde_derive::{Deserialize, Serialize};

use super::{category::ExpenseCategory, currency::CurrencyCode, period::PeriodKey};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Budget {
    pub monthly_limit: f64,
    #[serde(default)]
    pub currency: CurrencyCode,
    #[serde(default)]
    pub category_limits: BTreeMap<ExpenseCategory, f64>,
    #[serde(default)]
    pub rollover_enabled: bool,
    /// Carried from the previous period; negative when it was overspent.
    #[serde(default)]
    pub rollover_amount: f64,
    #[serde(default)]
    pub last_rollover_period: Option<PeriodKey>,
}

impl Default for Budget {
    fn default() -> Self {
        Self {
            monthly_limit: 1000.0,
            currency: CurrencyCode::default(),
            category_limits: BTreeMap::new(),
            rollover_enabled: false,
            rollover_amount: 0.0,
            last_rollover_period: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RolloverStatus {
    Positive,
    Negative,
    None,
}
