use chrono::NaiveDate;
use fractic_server_error::ServerError;
use tracing::info;

use crate::{
    data::repositories::ledger_repository_impl::LedgerRepositoryImpl,
    domain::{logic::migration::migrate_state, repositories::ledger_repository::LedgerRepository},
    entities::LedgerState,
};

pub trait PersistUsecase {
    /// Loads the stored state and repairs anything older versions left
    /// inconsistent. Returns the state (`None` if nothing was stored yet) and
    /// whether it should be re-saved.
    fn open(&self, today: NaiveDate) -> Result<(Option<LedgerState>, bool), ServerError>;

    fn commit(&self, state: &LedgerState) -> Result<(), ServerError>;
}

pub(crate) struct PersistUsecaseImpl<
    R = LedgerRepositoryImpl, // Default.
> where
    R: LedgerRepository,
{
    repository: R,
}

impl<R: LedgerRepository> PersistUsecase for PersistUsecaseImpl<R> {
    fn open(&self, today: NaiveDate) -> Result<(Option<LedgerState>, bool), ServerError> {
        let Some(mut state) = self.repository.load()? else {
            return Ok((None, false));
        };
        let repaired = migrate_state(&mut state, today);
        if repaired > 0 {
            info!(repaired, "migrated ledger records");
        }
        Ok((Some(state), repaired > 0))
    }

    fn commit(&self, state: &LedgerState) -> Result<(), ServerError> {
        self.repository.save(state)
    }
}

impl<R: LedgerRepository> PersistUsecaseImpl<R> {
    pub(crate) fn new(repository: R) -> Self {
        PersistUsecaseImpl { repository }
    }

    pub(crate) fn repository(&self) -> &R {
        &self.repository
    }
}
