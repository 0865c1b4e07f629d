use chrono::NaiveDate;
use fractic_server_error::{define_client_error, define_internal_error};
use uuid::Uuid;

// IO-related.
define_client_error!(ReadError, "Error reading file.");
define_client_error!(
    PersistenceUnavailable,
    "Ledger data could not be {operation}; changes are kept in memory only.",
    { operation: &str }
);

// Parsing-related.
define_client_error!(InvalidRon, "Invalid {ron_type} (invalid RON format).", { ron_type: &str });
define_client_error!(InvalidIsoDate, "Invalid ISO date: {date}.", { date: &str });
define_client_error!(InvalidPeriodKey, "Invalid period key: '{key}' (expected YYYY-MM).", { key: &str });
define_client_error!(InvalidMoneyAmount, "Invalid money amount: '{value}'.", { value: &str });
define_client_error!(InvalidLedgerJson, "Stored ledger document is not valid JSON.");
define_client_error!(
    UnsupportedSchemaVersion,
    "Stored ledger uses schema version {found}, newer than the supported version {supported}.",
    { found: u32, supported: u32 }
);

// Ledger-related.
define_client_error!(
    InvalidAmount,
    "Invalid amount for '{title}': {amount} (amounts must be finite and non-negative).",
    { title: &str, amount: f64 }
);
define_client_error!(
    RecordNotFound,
    "No {kind} with id {id} exists in the ledger.",
    { kind: &str, id: &Uuid }
);
define_client_error!(
    DuplicateRecord,
    "A {kind} with id {id} already exists in the ledger.",
    { kind: &str, id: &Uuid }
);
define_client_error!(
    NotRecurring,
    "Expense '{title}' is not recurring, so it has no next due date to advance.",
    { title: &str }
);
define_client_error!(
    InvalidDateRange,
    "Invalid date range: start ({start}) is after end ({end}).",
    { start: &NaiveDate, end: &NaiveDate }
);

// Feature gating.
define_client_error!(
    FeatureLocked,
    "'{feature}' requires a premium subscription.",
    { feature: &str }
);

// Presentation.
define_internal_error!(CsvExportFailed, "Failed to write CSV export.");
define_internal_error!(SnapshotEncodingFailed, "Failed to encode widget snapshot.");
