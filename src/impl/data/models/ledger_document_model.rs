use serde_derive::{Deserialize, Serialize};

use crate::entities::LedgerState;

pub(crate) const CURRENT_SCHEMA_VERSION: u32 = 3;

/// On-disk layout of the ledger. Documents written by older versions lack
/// newer fields; those load with their defaults.
#[derive(Debug, Serialize, Deserialize)]
pub struct LedgerDocumentModel {
    #[serde(default = "first_schema_version")]
    pub(crate) schema_version: u32,
    #[serde(default)]
    pub(crate) state: LedgerState,
}

fn first_schema_version() -> u32 {
    1
}

impl LedgerDocumentModel {
    pub(crate) fn current(state: LedgerState) -> Self {
        Self {
            schema_version: CURRENT_SCHEMA_VERSION,
            state,
        }
    }

    pub(crate) fn needs_migration(&self) -> bool {
        self.schema_version < CURRENT_SCHEMA_VERSION
    }
}
