//! Error types

use thiserror::Error;

/// Result type alias for ingestion operations
pub type Result<T, E = IngestError> = std::result::Result<T, E>;

/// Reasons a record could not be ingested.
#[derive(Error, Debug)]
pub enum IngestError {
    /// One or more required fields were absent or null. Raised before the
    /// store is contacted.
    #[error("missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    /// The store rejected or failed the write.
    #[error(transparent)]
    Storage(#[from] StoreError),
}

/// Failure reported by a [`RecordStore`](crate::store::RecordStore) backend.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StoreError {
    /// The backend returned an error; the description is kept, its type is not.
    #[error("{0}")]
    Backend(String),
}

/// Invalid process configuration.
#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("unknown store backend `{0}`, expected `dynamodb` or `memory`")]
    UnknownBackend(String),

    #[error("{0} must not be empty")]
    Empty(&'static str),
}
