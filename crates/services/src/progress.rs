use mentor_core::model::{Progress, parse_number};
use tokio::sync::Mutex;

use crate::error::PersistenceError;
use crate::persistence::PersistenceFacade;

/// What the progress bar shows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProgressView {
    pub percent: u8,
    /// CSS width of the fill, e.g. `"72%"`.
    pub fill_width: String,
    pub label: String,
}

impl From<Progress> for ProgressView {
    fn from(progress: Progress) -> Self {
        Self {
            percent: progress.value(),
            fill_width: progress.fill_width(),
            label: progress.to_string(),
        }
    }
}

/// Clamps, persists, and reflects the overall progress value.
///
/// Input is never rejected: anything numeric is rounded and clamped, anything
/// else counts as 0.
pub struct ProgressController {
    persistence: PersistenceFacade,
    current: Mutex<Progress>,
}

impl ProgressController {
    #[must_use]
    pub fn new(persistence: PersistenceFacade, initial: Progress) -> Self {
        Self {
            persistence,
            current: Mutex::new(initial),
        }
    }

    /// # Errors
    ///
    /// Returns `PersistenceError` if the value cannot be written.
    pub async fn set_progress(&self, value: f64) -> Result<ProgressView, PersistenceError> {
        self.apply(Progress::from_f64(value)).await
    }

    /// Parse raw field text and apply it. Blank or non-numeric text sets 0.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError` if the value cannot be written.
    pub async fn update_from_input(&self, raw: &str) -> Result<ProgressView, PersistenceError> {
        if !raw.trim().is_empty() && parse_number(raw).is_none() {
            tracing::warn!(input = raw, "progress input is not a number, using 0");
        }
        self.apply(Progress::parse_input(raw)).await
    }

    pub async fn current(&self) -> Progress {
        *self.current.lock().await
    }

    pub async fn view(&self) -> ProgressView {
        ProgressView::from(self.current().await)
    }

    async fn apply(&self, progress: Progress) -> Result<ProgressView, PersistenceError> {
        let mut current = self.current.lock().await;
        self.persistence.save_progress(progress).await?;
        *current = progress;
        Ok(ProgressView::from(progress))
    }
}
