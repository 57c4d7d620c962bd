use std::sync::Arc;

use storage::repository::Storage;

use crate::Clock;
use crate::error::{AppServicesError, ImportError};
use crate::notes::NotesController;
use crate::persistence::PersistenceFacade;
use crate::progress::{ProgressController, ProgressView};
use crate::sessions::{
    ExportContext, ExportFormat, SessionListController, SessionListView, export_csv, export_ics,
    export_json, export_markdown, import_json,
};

const EXPORT_TITLE: &str = "Mentoring sessions";

/// Everything the dashboard renders, taken in one pass.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DashboardSnapshot {
    pub notes: String,
    pub sessions: SessionListView,
    pub progress: ProgressView,
}

/// Assembles the controllers over one store, hydrated from a single read.
#[derive(Clone)]
pub struct MentorServices {
    clock: Clock,
    notes: Arc<NotesController>,
    sessions: Arc<SessionListController>,
    progress: Arc<ProgressController>,
}

impl MentorServices {
    /// Build services backed by `SQLite` storage.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if storage initialization or hydration fails.
    pub async fn new_sqlite(db_url: &str, clock: Clock) -> Result<Self, AppServicesError> {
        let storage = Storage::sqlite(db_url).await?;
        Self::hydrate(&storage, clock).await
    }

    /// Read notes, sessions, and progress once and build the controllers.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError::Persistence` if the store cannot be read or a
    /// stored record is malformed.
    pub async fn hydrate(storage: &Storage, clock: Clock) -> Result<Self, AppServicesError> {
        let persistence = PersistenceFacade::new(Arc::clone(&storage.store));

        let notes = persistence.load_notes().await?;
        let sessions = persistence.load_sessions().await?;
        let progress = persistence.load_progress().await?;

        tracing::info!(
            sessions = sessions.len(),
            progress = progress.value(),
            has_notes = notes.is_some(),
            "hydrated from storage"
        );

        Ok(Self {
            clock,
            notes: Arc::new(NotesController::new(persistence.clone(), notes)),
            sessions: Arc::new(SessionListController::new(
                persistence.clone(),
                clock,
                sessions,
            )),
            progress: Arc::new(ProgressController::new(persistence, progress)),
        })
    }

    #[must_use]
    pub fn notes(&self) -> Arc<NotesController> {
        Arc::clone(&self.notes)
    }

    #[must_use]
    pub fn sessions(&self) -> Arc<SessionListController> {
        Arc::clone(&self.sessions)
    }

    #[must_use]
    pub fn progress(&self) -> Arc<ProgressController> {
        Arc::clone(&self.progress)
    }

    pub async fn snapshot(&self) -> DashboardSnapshot {
        DashboardSnapshot {
            notes: self.notes.text().await,
            sessions: self.sessions.view().await,
            progress: self.progress.view().await,
        }
    }

    /// Render the current state in `format`.
    ///
    /// # Errors
    ///
    /// Returns `serde_json::Error` if JSON encoding fails.
    pub async fn export(&self, format: ExportFormat) -> Result<String, serde_json::Error> {
        let sessions = self.sessions.sessions().await;
        match format {
            ExportFormat::Json => export_json(&sessions),
            ExportFormat::Markdown => {
                let notes = self.notes.stored().await;
                let progress = self.progress.current().await;
                Ok(export_markdown(&ExportContext {
                    title: EXPORT_TITLE,
                    notes: notes.as_deref(),
                    progress,
                    sessions: &sessions,
                }))
            }
            ExportFormat::Ics => Ok(export_ics(&sessions, EXPORT_TITLE, self.clock.now())),
            ExportFormat::Csv => Ok(export_csv(&sessions)),
        }
    }

    /// Replace the session list with the contents of a JSON export.
    ///
    /// Returns the number of sessions imported.
    ///
    /// # Errors
    ///
    /// Returns `ImportError` if the text is not a valid session array or the
    /// list cannot be written.
    pub async fn import_sessions(&self, text: &str) -> Result<usize, ImportError> {
        let list = import_json(text)?;
        let count = list.len();
        self.sessions.replace_all(list).await?;
        tracing::info!(count, "sessions imported");
        Ok(count)
    }
}
