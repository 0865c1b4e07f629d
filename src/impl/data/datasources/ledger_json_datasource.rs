use std::{fs, io::ErrorKind, path::Path};

use fractic_server_error::ServerError;

use crate::{
    data::models::ledger_document_model::{LedgerDocumentModel, CURRENT_SCHEMA_VERSION},
    errors::{InvalidLedgerJson, ReadError, UnsupportedSchemaVersion},
};

pub trait LedgerJsonDatasource {
    fn from_string(&self, s: &str) -> Result<LedgerDocumentModel, ServerError>;

    fn to_string(&self, document: &LedgerDocumentModel) -> Result<String, ServerError>;

    /// `None` when no document has been written yet.
    fn from_file<P>(&self, path: P) -> Result<Option<LedgerDocumentModel>, ServerError>
    where
        P: AsRef<Path>;

    fn to_file<P>(&self, path: P, document: &LedgerDocumentModel) -> Result<(), ServerError>
    where
        P: AsRef<Path>;
}

pub struct LedgerJsonDatasourceImpl;

impl LedgerJsonDatasourceImpl {
    pub(crate) fn new() -> Self {
        Self
    }
}

impl LedgerJsonDatasource for LedgerJsonDatasourceImpl {
    fn from_string(&self, s: &str) -> Result<LedgerDocumentModel, ServerError> {
        let document: LedgerDocumentModel =
            serde_json::from_str(s).map_err(|e| InvalidLedgerJson::with_debug(&e))?;
        if document.schema_version > CURRENT_SCHEMA_VERSION {
            return Err(UnsupportedSchemaVersion::new(
                document.schema_version,
                CURRENT_SCHEMA_VERSION,
            ));
        }
        Ok(document)
    }

    fn to_string(&self, document: &LedgerDocumentModel) -> Result<String, ServerError> {
        serde_json::to_string_pretty(document).map_err(|e| InvalidLedgerJson::with_debug(&e))
    }

    fn from_file<P>(&self, path: P) -> Result<Option<LedgerDocumentModel>, ServerError>
    where
        P: AsRef<Path>,
    {
        match fs::read_to_string(path) {
            Ok(s) => self.from_string(&s).map(Some),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(ReadError::with_debug(&e)),
        }
    }

    /// Writes next to the target first and renames over it, so a failed
    /// write never leaves a truncated document behind.
    fn to_file<P>(&self, path: P, document: &LedgerDocumentModel) -> Result<(), ServerError>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        let contents = self.to_string(document)?;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| ReadError::with_debug(&e))?;
        }
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, contents).map_err(|e| ReadError::with_debug(&e))?;
        fs::rename(&tmp, path).map_err(|e| ReadError::with_debug(&e))
    }
}
