//! Error types for the note store and lifecycle operations.

use std::path::PathBuf;

use thiserror::Error;

/// Failure while persisting the note collection.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Serializing the collection failed.
    #[error("Failed to serialize notes: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Writing or replacing the store file failed.
    #[error("Failed to write notes to {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Failure of a note lifecycle operation.
#[derive(Debug, Error)]
pub enum NoteError {
    /// Caller-supplied data failed a field check.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// No note carries the requested id.
    #[error("Note not found: {0}")]
    NotFound(String),

    /// Validation passed but the collection could not be saved.
    #[error(transparent)]
    Storage(#[from] StoreError),
}

pub type Result<T> = std::result::Result<T, NoteError>;
