use std::cell::{Cell, RefCell};

use fractic_server_error::ServerError;

use crate::{
    domain::repositories::ledger_repository::LedgerRepository, entities::LedgerState,
    errors::PersistenceUnavailable,
};

/// Keeps the last saved state in memory. Can be switched to "unavailable"
/// to exercise persistence failures.
#[derive(Debug, Default)]
pub struct InMemoryLedgerRepository {
    saved: RefCell<Option<LedgerState>>,
    save_count: Cell<usize>,
    unavailable: Cell<bool>,
}

impl InMemoryLedgerRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_state(state: LedgerState) -> Self {
        Self {
            saved: RefCell::new(Some(state)),
            ..Self::default()
        }
    }

    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.set(unavailable);
    }

    /// Last saved state, or the default state if nothing was saved.
    pub fn saved_state(&self) -> LedgerState {
        self.saved.borrow().clone().unwrap_or_default()
    }

    pub fn save_count(&self) -> usize {
        self.save_count.get()
    }
}

impl LedgerRepository for InMemoryLedgerRepository {
    fn load(&self) -> Result<Option<LedgerState>, ServerError> {
        if self.unavailable.get() {
            return Err(PersistenceUnavailable::new("loaded"));
        }
        Ok(self.saved.borrow().clone())
    }

    fn save(&self, state: &LedgerState) -> Result<(), ServerError> {
        if self.unavailable.get() {
            return Err(PersistenceUnavailable::new("saved"));
        }
        *self.saved.borrow_mut() = Some(state.clone());
        self.save_count.set(self.save_count.get() + 1);
        Ok(())
    }
}
