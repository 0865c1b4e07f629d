use std::path::PathBuf;

use fractic_server_error::ServerError;
use tracing::{info, warn};

use crate::{
    data::{
        datasources::ledger_json_datasource::{LedgerJsonDatasource, LedgerJsonDatasourceImpl},
        models::ledger_document_model::LedgerDocumentModel,
    },
    domain::repositories::ledger_repository::LedgerRepository,
    entities::LedgerState,
    errors::PersistenceUnavailable,
};

/// Keeps the ledger as a JSON document on disk.
pub struct LedgerRepositoryImpl<DS = LedgerJsonDatasourceImpl>
where
    DS: LedgerJsonDatasource,
{
    path: PathBuf,
    datasource: DS,
}

impl LedgerRepositoryImpl<LedgerJsonDatasourceImpl> {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            datasource: LedgerJsonDatasourceImpl::new(),
        }
    }
}

impl<DS: LedgerJsonDatasource> LedgerRepositoryImpl<DS> {
    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl<DS: LedgerJsonDatasource> LedgerRepository for LedgerRepositoryImpl<DS> {
    fn load(&self) -> Result<Option<LedgerState>, ServerError> {
        let document = self.datasource.from_file(&self.path).map_err(|e| {
            warn!(path = %self.path.display(), error = ?e, "failed to load ledger");
            PersistenceUnavailable::with_debug("loaded", &e)
        })?;
        match document {
            Some(document) => {
                if document.needs_migration() {
                    warn!(
                        path = %self.path.display(),
                        schema_version = document.schema_version,
                        "loaded ledger written by an older schema; it will be upgraded on next save"
                    );
                }
                info!(path = %self.path.display(), "loaded ledger");
                Ok(Some(document.state))
            }
            None => {
                info!(path = %self.path.display(), "no ledger on disk yet");
                Ok(None)
            }
        }
    }

    fn save(&self, state: &LedgerState) -> Result<(), ServerError> {
        // The document owns its state, so clone once per save. Ledgers are
        // small.
        let document = LedgerDocumentModel::current(state.clone());
        self.datasource
            .to_file(&self.path, &document)
            .map_err(|e| {
                warn!(path = %self.path.display(), error = ?e, "failed to save ledger");
                PersistenceUnavailable::with_debug("saved", &e)
            })?;
        info!(path = %self.path.display(), "saved ledger");
        Ok(())
    }
}
