//! Error types for Bookdeck Core

use thiserror::Error;

/// Result type alias using BookdeckError
pub type Result<T> = std::result::Result<T, BookdeckError>;

/// Top-level error type for all Bookdeck operations
#[derive(Debug, Error)]
pub enum BookdeckError {
    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors that occur while loading the catalog from the remote listing
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Malformed listing payload: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Errors that occur while persisting the favorites set
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}
