//! Shared error types for the services crate.

use thiserror::Error;

use storage::repository::StorageError;
use storage::sqlite::SqliteInitError;

/// Errors emitted by `PersistenceFacade` and the controllers writing through it.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum PersistenceError {
    #[error("stored sessions are not a valid session list")]
    MalformedSessions(#[source] serde_json::Error),
    #[error("stored progress is not a number: {raw:?}")]
    MalformedProgress { raw: String },
    #[error("failed to encode sessions")]
    Encode(#[source] serde_json::Error),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted while importing a session list.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ImportError {
    #[error("import is not valid JSON")]
    Json(#[from] serde_json::Error),
    #[error("import must be a JSON array of sessions")]
    NotAnArray,
    #[error("session at index {index} has an empty title")]
    BlankTitle { index: usize },
    #[error("session id {id} appears more than once")]
    DuplicateId { id: u64 },
    #[error(transparent)]
    Persistence(#[from] PersistenceError),
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Sqlite(#[from] SqliteInitError),
    #[error(transparent)]
    Persistence(#[from] PersistenceError),
}
