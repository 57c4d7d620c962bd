use mentor_core::Clock;
use mentor_core::model::{SessionDraft, SessionId, SessionIdGenerator, SessionList};
use tokio::sync::Mutex;

use crate::error::PersistenceError;
use crate::persistence::PersistenceFacade;

use super::view::{SessionListView, render_sessions};

struct SessionListState {
    sessions: SessionList,
    ids: SessionIdGenerator,
}

/// Owns the in-memory session list and writes every change through to storage.
///
/// Each operation holds the state lock across its write, so operations complete
/// one at a time in call order. A failed write leaves the in-memory list as it was.
pub struct SessionListController {
    persistence: PersistenceFacade,
    state: Mutex<SessionListState>,
}

impl SessionListController {
    /// Build a controller over an already-loaded list.
    #[must_use]
    pub fn new(persistence: PersistenceFacade, clock: Clock, sessions: SessionList) -> Self {
        let ids = SessionIdGenerator::seeded(clock, sessions.max_id());
        Self {
            persistence,
            state: Mutex::new(SessionListState { sessions, ids }),
        }
    }

    /// Prepend a new session and persist the list.
    ///
    /// Returns `Ok(None)` without touching storage when the title is blank.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError` if the list cannot be written.
    pub async fn add_session(
        &self,
        title: &str,
        date: Option<&str>,
    ) -> Result<Option<SessionId>, PersistenceError> {
        let draft = match SessionDraft::new(title, date.map(str::to_owned)).validate() {
            Ok(draft) => draft,
            Err(err) => {
                tracing::debug!(%err, "session not added");
                return Ok(None);
            }
        };

        let mut state = self.state.lock().await;
        let mut ids = state.ids.clone();
        let id = ids.next_id();
        let mut next = state.sessions.clone();
        next.prepend(draft.into_session(id));
        self.persistence.save_sessions(&next).await?;
        state.sessions = next;
        state.ids = ids;

        tracing::debug!(%id, "session added");
        Ok(Some(id))
    }

    /// Mark a session done by removing it.
    ///
    /// Returns `Ok(false)` if no session has `id`; nothing is written in that case.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError` if the list cannot be written.
    pub async fn remove_session(&self, id: SessionId) -> Result<bool, PersistenceError> {
        let mut state = self.state.lock().await;
        let mut next = state.sessions.clone();
        if next.remove(id).is_none() {
            return Ok(false);
        }
        self.persistence.save_sessions(&next).await?;
        state.sessions = next;

        tracing::debug!(%id, "session completed");
        Ok(true)
    }

    /// Change the title and date of the session with `id` in place.
    ///
    /// Its id and position are kept. Returns `Ok(false)` without touching
    /// storage when no session has `id` or the new title is blank.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError` if the list cannot be written.
    pub async fn edit_session(
        &self,
        id: SessionId,
        title: &str,
        date: Option<&str>,
    ) -> Result<bool, PersistenceError> {
        let draft = match SessionDraft::new(title, date.map(str::to_owned)).validate() {
            Ok(draft) => draft,
            Err(err) => {
                tracing::debug!(%err, %id, "session not edited");
                return Ok(false);
            }
        };

        let mut state = self.state.lock().await;
        let mut next = state.sessions.clone();
        let Some(session) = next.get_mut(id) else {
            return Ok(false);
        };
        session.apply(draft);
        self.persistence.save_sessions(&next).await?;
        state.sessions = next;

        tracing::debug!(%id, "session edited");
        Ok(true)
    }

    /// Drop every session and remove the persisted key.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError` if the key cannot be removed.
    pub async fn reset_sessions(&self) -> Result<(), PersistenceError> {
        let mut state = self.state.lock().await;
        self.persistence.clear_sessions().await?;
        state.sessions.clear();
        Ok(())
    }

    /// Swap in a whole list (used by import) and persist it.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError` if the list cannot be written.
    pub async fn replace_all(&self, sessions: SessionList) -> Result<(), PersistenceError> {
        let mut state = self.state.lock().await;
        self.persistence.save_sessions(&sessions).await?;
        if let Some(max) = sessions.max_id() {
            state.ids.observe(max);
        }
        state.sessions = sessions;
        Ok(())
    }

    pub async fn view(&self) -> SessionListView {
        let state = self.state.lock().await;
        render_sessions(&state.sessions)
    }

    pub async fn sessions(&self) -> SessionList {
        self.state.lock().await.sessions.clone()
    }
}
