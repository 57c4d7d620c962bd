use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::SessionId;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error("session title cannot be empty")]
    EmptyTitle,
}

/// Raw form input for a new session.
#[derive(Clone, Debug, Default)]
pub struct SessionDraft {
    pub title: String,
    pub date: Option<String>,
}

impl SessionDraft {
    #[must_use]
    pub fn new(title: impl Into<String>, date: Option<String>) -> Self {
        Self {
            title: title.into(),
            date,
        }
    }

    /// Trim and check the draft.
    ///
    /// A blank date means the session is unscheduled.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::EmptyTitle` if the title is blank after trimming.
    pub fn validate(self) -> Result<ValidSessionDraft, SessionError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(SessionError::EmptyTitle);
        }
        let date = self
            .date
            .map(|d| d.trim().to_string())
            .filter(|d| !d.is_empty());

        Ok(ValidSessionDraft {
            title: title.to_string(),
            date,
        })
    }
}

/// A trimmed draft with a non-blank title, not yet assigned an id.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidSessionDraft {
    title: String,
    date: Option<String>,
}

impl ValidSessionDraft {
    #[must_use]
    pub fn into_session(self, id: SessionId) -> Session {
        Session {
            id,
            title: self.title,
            date: self.date,
        }
    }
}

/// A scheduled mentoring meeting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    id: SessionId,
    title: String,
    date: Option<String>,
}

impl Session {
    /// Rehydrate a session from persisted storage. The title is taken as stored.
    #[must_use]
    pub fn from_persisted(id: SessionId, title: String, date: Option<String>) -> Self {
        Self { id, title, date }
    }

    #[must_use]
    pub fn id(&self) -> SessionId {
        self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn date(&self) -> Option<&str> {
        self.date.as_deref()
    }

    #[must_use]
    pub fn is_scheduled(&self) -> bool {
        self.date.is_some()
    }

    /// Replace title and date, keeping the id.
    pub fn apply(&mut self, draft: ValidSessionDraft) {
        self.title = draft.title;
        self.date = draft.date;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draft_trims_title_and_date() {
        let session = SessionDraft::new("  Intro call ", Some(" 2024-05-01 ".into()))
            .validate()
            .unwrap()
            .into_session(SessionId::new(7));
        assert_eq!(session.title(), "Intro call");
        assert_eq!(session.date(), Some("2024-05-01"));
        assert_eq!(session.id(), SessionId::new(7));
    }

    #[test]
    fn blank_title_is_rejected() {
        let err = SessionDraft::new("   ", None).validate().unwrap_err();
        assert_eq!(err, SessionError::EmptyTitle);
    }

    #[test]
    fn blank_date_means_unscheduled() {
        let session = SessionDraft::new("Retro", Some(String::new()))
            .validate()
            .unwrap()
            .into_session(SessionId::new(1));
        assert!(!session.is_scheduled());
    }

    #[test]
    fn apply_keeps_the_id() {
        let mut session =
            Session::from_persisted(SessionId::new(4), "Old".into(), Some("2024-01-01".into()));
        let draft = SessionDraft::new(" New ", Some("  ".into())).validate().unwrap();
        session.apply(draft);
        assert_eq!(session.id(), SessionId::new(4));
        assert_eq!(session.title(), "New");
        assert_eq!(session.date(), None);
    }

    #[test]
    fn serialises_with_null_date() {
        let session = Session::from_persisted(SessionId::new(1_700_000_000_000), "A".into(), None);
        let json = serde_json::to_string(&session).unwrap();
        assert_eq!(json, r#"{"id":1700000000000,"title":"A","date":null}"#);
    }

    #[test]
    fn missing_date_field_reads_as_absent() {
        let session: Session = serde_json::from_str(r#"{"id":3,"title":"B"}"#).unwrap();
        assert_eq!(session.date(), None);
    }
}
