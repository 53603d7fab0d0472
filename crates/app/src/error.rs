use std::path::PathBuf;

use storefront_core::DomainError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SessionError {
    /// Publication failed after the new state was committed.
    #[error("failed to publish event: {0}")]
    Publish(String),

    #[error("failed to read catalog {path}: {source}")]
    CatalogIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Domain(#[from] DomainError),
}
