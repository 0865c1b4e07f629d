use std::{fs, path::Path};

use fractic_server_error::ServerError;
use ron::from_str;

use crate::{
    entities::Settings,
    errors::{InvalidRon, ReadError},
};

pub(crate) trait SettingsRonDatasource {
    fn from_string(&self, s: &str) -> Result<Settings, ServerError>;

    fn from_file<P>(&self, path: P) -> Result<Settings, ServerError>
    where
        P: AsRef<Path>;
}

pub(crate) struct SettingsRonDatasourceImpl;

impl SettingsRonDatasourceImpl {
    pub(crate) fn new() -> Self {
        Self
    }
}

impl SettingsRonDatasource for SettingsRonDatasourceImpl {
    fn from_string(&self, s: &str) -> Result<Settings, ServerError> {
        from_str(s).map_err(|e| InvalidRon::with_debug("Settings", &e))
    }

    fn from_file<P>(&self, path: P) -> Result<Settings, ServerError>
    where
        P: AsRef<Path>,
    {
        self.from_string(&fs::read_to_string(path).map_err(|e| ReadError::with_debug(&e))?)
    }
}
