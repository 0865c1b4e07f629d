use fractic_server_error::ServerError;

use crate::entities::LedgerState;

/// Storage for the ledger state. Implementations surface any failure as
/// `PersistenceUnavailable`; callers do not retry.
pub trait LedgerRepository {
    /// `None` when nothing has been stored yet.
    fn load(&self) -> Result<Option<LedgerState>, ServerError>;

    fn save(&self, state: &LedgerState) -> Result<(), ServerError>;
}
