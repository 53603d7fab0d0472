//! Environment configuration, read once at start-up.

use std::path::PathBuf;

use storefront_catalog::Catalog;
use storefront_observability::LogFormat;

use crate::error::SessionError;

pub const CATALOG_VAR: &str = "STOREFRONT_CATALOG";
pub const LOG_FORMAT_VAR: &str = "STOREFRONT_LOG_FORMAT";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppConfig {
    /// JSON catalog to load instead of the built-in seed.
    pub catalog_path: Option<PathBuf>,
    pub log_format: LogFormat,
    /// Raw value of an unrecognised log format, reported once logging is up.
    pub rejected_log_format: Option<String>,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let catalog_path = lookup(CATALOG_VAR)
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);

        let (log_format, rejected_log_format) = match lookup(LOG_FORMAT_VAR) {
            None => (LogFormat::default(), None),
            Some(raw) => match raw.parse::<LogFormat>() {
                Ok(format) => (format, None),
                Err(_) => (LogFormat::default(), Some(raw)),
            },
        };

        Self {
            catalog_path,
            log_format,
            rejected_log_format,
        }
    }

    /// The configured catalog, or the seed when none is configured.
    pub fn load_catalog(&self) -> Result<Catalog, SessionError> {
        let Some(path) = &self.catalog_path else {
            return Ok(Catalog::seed());
        };

        let document = std::fs::read_to_string(path).map_err(|source| SessionError::CatalogIo {
            path: path.clone(),
            source,
        })?;
        Ok(Catalog::from_json(&document)?)
    }
}
