use std::sync::Arc;

use mentor_core::model::{Progress, SessionList, parse_number};
use storage::repository::{KeyValueStore, StoreKey};

use crate::error::PersistenceError;

/// Reads and writes the three persisted records and owns their string encoding.
///
/// - notes: raw text
/// - sessions: a JSON array of `{id, title, date}`
/// - progress: a stringified integer
///
/// Every call goes straight to the store; there is no caching or batching.
#[derive(Clone)]
pub struct PersistenceFacade {
    store: Arc<dyn KeyValueStore>,
}

impl PersistenceFacade {
    #[must_use]
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Stored notes, or `None` if never saved (or cleared).
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::Storage` if the store cannot be read.
    pub async fn load_notes(&self) -> Result<Option<String>, PersistenceError> {
        Ok(self.store.get(StoreKey::Notes.as_str()).await?)
    }

    /// # Errors
    ///
    /// Returns `PersistenceError::Storage` if the write fails.
    pub async fn save_notes(&self, text: &str) -> Result<(), PersistenceError> {
        self.store.set(StoreKey::Notes.as_str(), text).await?;
        tracing::debug!(bytes = text.len(), "notes saved");
        Ok(())
    }

    /// # Errors
    ///
    /// Returns `PersistenceError::Storage` if the removal fails.
    pub async fn clear_notes(&self) -> Result<(), PersistenceError> {
        self.store.remove(StoreKey::Notes.as_str()).await?;
        tracing::debug!("notes cleared");
        Ok(())
    }

    /// Stored sessions. A missing or empty value is an empty list.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::MalformedSessions` if the stored value is not a
    /// session array, or `PersistenceError::Storage` if the store cannot be read.
    pub async fn load_sessions(&self) -> Result<SessionList, PersistenceError> {
        let Some(raw) = self.store.get(StoreKey::Sessions.as_str()).await? else {
            return Ok(SessionList::new());
        };
        if raw.trim().is_empty() {
            return Ok(SessionList::new());
        }
        serde_json::from_str(&raw).map_err(PersistenceError::MalformedSessions)
    }

    /// # Errors
    ///
    /// Returns `PersistenceError::Storage` if the write fails.
    pub async fn save_sessions(&self, sessions: &SessionList) -> Result<(), PersistenceError> {
        let raw = serde_json::to_string(sessions).map_err(PersistenceError::Encode)?;
        self.store.set(StoreKey::Sessions.as_str(), &raw).await?;
        tracing::debug!(count = sessions.len(), "sessions saved");
        Ok(())
    }

    /// # Errors
    ///
    /// Returns `PersistenceError::Storage` if the removal fails.
    pub async fn clear_sessions(&self) -> Result<(), PersistenceError> {
        self.store.remove(StoreKey::Sessions.as_str()).await?;
        tracing::debug!("sessions cleared");
        Ok(())
    }

    /// Stored progress, clamped into range. Missing or blank reads as 40.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::MalformedProgress` if the stored value is not
    /// numeric, or `PersistenceError::Storage` if the store cannot be read.
    pub async fn load_progress(&self) -> Result<Progress, PersistenceError> {
        let Some(raw) = self.store.get(StoreKey::Progress.as_str()).await? else {
            return Ok(Progress::DEFAULT);
        };
        if raw.trim().is_empty() {
            return Ok(Progress::DEFAULT);
        }
        let value = parse_number(&raw).ok_or(PersistenceError::MalformedProgress { raw })?;
        Ok(Progress::from_f64(value))
    }

    /// # Errors
    ///
    /// Returns `PersistenceError::Storage` if the write fails.
    pub async fn save_progress(&self, progress: Progress) -> Result<(), PersistenceError> {
        self.store
            .set(StoreKey::Progress.as_str(), &progress.value().to_string())
            .await?;
        tracing::debug!(progress = progress.value(), "progress saved");
        Ok(())
    }
}
