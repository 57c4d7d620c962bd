use std::time::Duration;

use tokio::sync::Mutex;

use crate::error::PersistenceError;
use crate::persistence::PersistenceFacade;

pub const SAVE_NOTES_LABEL: &str = "Save notes";
/// Replaces the save button label briefly after a save.
pub const NOTES_SAVED_LABEL: &str = "Saved";
pub const NOTES_SAVED_FOR: Duration = Duration::from_millis(900);

/// Free-text notes. Absent and empty both display as an empty field.
pub struct NotesController {
    persistence: PersistenceFacade,
    stored: Mutex<Option<String>>,
}

impl NotesController {
    #[must_use]
    pub fn new(persistence: PersistenceFacade, stored: Option<String>) -> Self {
        Self {
            persistence,
            stored: Mutex::new(stored),
        }
    }

    /// Text for the notes field.
    pub async fn text(&self) -> String {
        self.stored.lock().await.clone().unwrap_or_default()
    }

    /// The persisted record, `None` after a clear or before the first save.
    pub async fn stored(&self) -> Option<String> {
        self.stored.lock().await.clone()
    }

    /// # Errors
    ///
    /// Returns `PersistenceError` if the notes cannot be written.
    pub async fn save(&self, text: &str) -> Result<(), PersistenceError> {
        let mut stored = self.stored.lock().await;
        self.persistence.save_notes(text).await?;
        *stored = Some(text.to_string());
        Ok(())
    }

    /// # Errors
    ///
    /// Returns `PersistenceError` if the notes cannot be removed.
    pub async fn clear(&self) -> Result<(), PersistenceError> {
        let mut stored = self.stored.lock().await;
        self.persistence.clear_notes().await?;
        *stored = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use storage::repository::InMemoryStore;

    fn controller() -> (NotesController, PersistenceFacade) {
        let facade = PersistenceFacade::new(Arc::new(InMemoryStore::new()));
        (NotesController::new(facade.clone(), None), facade)
    }

    #[tokio::test]
    async fn save_overwrites_unconditionally() {
        let (ctl, facade) = controller();
        ctl.save("first").await.unwrap();
        ctl.save("second").await.unwrap();
        assert_eq!(ctl.text().await, "second");
        assert_eq!(facade.load_notes().await.unwrap().as_deref(), Some("second"));
    }

    #[tokio::test]
    async fn clear_makes_notes_absent() {
        let (ctl, facade) = controller();
        ctl.save("something").await.unwrap();
        ctl.clear().await.unwrap();
        assert_eq!(ctl.stored().await, None);
        assert_eq!(ctl.text().await, "");
        assert_eq!(facade.load_notes().await.unwrap(), None);
    }

    #[tokio::test]
    async fn saving_empty_keeps_an_empty_record() {
        let (ctl, facade) = controller();
        ctl.save("").await.unwrap();
        assert_eq!(ctl.stored().await, Some(String::new()));
        assert_eq!(facade.load_notes().await.unwrap(), Some(String::new()));
    }
}
