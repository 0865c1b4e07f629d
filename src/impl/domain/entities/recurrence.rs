use serde_derive::{Deserialize, Serialize};

/// Cadence of a recurring expense, income or subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecurrenceUnit {
    Weekly,
    Biweekly,
    Monthly,
    Yearly,
}

impl Default for RecurrenceUnit {
    fn default() -> Self {
        RecurrenceUnit::Monthly
    }
}
