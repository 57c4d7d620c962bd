use serde::{Deserialize, Serialize};

use crate::model::{Session, SessionId};

/// Ordered sessions, newest-first.
///
/// Order is established by insertion: new sessions are prepended and the list
/// is never sorted. Serialises as a plain JSON array.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionList {
    items: Vec<Session>,
}

impl SessionList {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn from_vec(items: Vec<Session>) -> Self {
        Self { items }
    }

    pub fn prepend(&mut self, session: Session) {
        self.items.insert(0, session);
    }

    /// Remove the first session with `id`, returning it if one matched.
    pub fn remove(&mut self, id: SessionId) -> Option<Session> {
        let pos = self.items.iter().position(|s| s.id() == id)?;
        Some(self.items.remove(pos))
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// The most recently added session.
    #[must_use]
    pub fn first(&self) -> Option<&Session> {
        self.items.first()
    }

    #[must_use]
    pub fn get(&self, id: SessionId) -> Option<&Session> {
        self.items.iter().find(|s| s.id() == id)
    }

    pub fn get_mut(&mut self, id: SessionId) -> Option<&mut Session> {
        self.items.iter_mut().find(|s| s.id() == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn max_id(&self) -> Option<SessionId> {
        self.items.iter().map(Session::id).max()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Session> {
        self.items.iter()
    }
}

impl<'a> IntoIterator for &'a SessionList {
    type Item = &'a Session;
    type IntoIter = std::slice::Iter<'a, Session>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
