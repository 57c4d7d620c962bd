use std::sync::Arc;

use services::{MentorServices, NotesController, ProgressController, SessionListController};

pub trait UiApp: Send + Sync {
    /// Services hydrated by the composition root before launch.
    fn services(&self) -> MentorServices;
}

#[derive(Clone)]
pub struct AppContext {
    services: MentorServices,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            services: app.services(),
        }
    }

    #[must_use]
    pub fn services(&self) -> MentorServices {
        self.services.clone()
    }

    #[must_use]
    pub fn notes(&self) -> Arc<NotesController> {
        self.services.notes()
    }

    #[must_use]
    pub fn sessions(&self) -> Arc<SessionListController> {
        self.services.sessions()
    }

    #[must_use]
    pub fn progress(&self) -> Arc<ProgressController> {
        self.services.progress()
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
