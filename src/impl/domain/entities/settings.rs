use std::path::PathBuf;

use serde_derive::{Deserialize, Serialize};

use super::currency::CurrencyCode;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Where the ledger document is kept.
    pub data_file: PathBuf,
    pub premium: bool,
    /// Currency for a ledger created from scratch.
    pub currency: CurrencyCode,
    pub daily_series_days: u32,
    pub monthly_series_months: u32,
    /// Percentages of the effective limit, ascending.
    pub budget_alert_thresholds: Vec<u32>,
    pub upcoming_window_days: i64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from("budget_pulse.json"),
            premium: false,
            currency: CurrencyCode::default(),
            daily_series_days: 30,
            monthly_series_months: 6,
            budget_alert_thresholds: vec![75, 90, 100],
            upcoming_window_days: 7,
        }
    }
}
