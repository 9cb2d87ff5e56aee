//! Store error types.

use cryo_commerce::CommerceError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when using the store.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Failed to read or write the backing file.
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to serialize value.
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The backing file exists but is not a JSON object.
    #[error("Store file {0} is not a JSON object")]
    NotAnObject(PathBuf),

    /// The domain rejected the change; nothing was written.
    #[error(transparent)]
    Commerce(#[from] CommerceError),
}

impl StoreError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        StoreError::Io {
            path: path.into(),
            source,
        }
    }
}
