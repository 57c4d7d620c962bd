#![forbid(unsafe_code)]

pub mod app_services;
pub mod error;
pub mod notes;
pub mod persistence;
pub mod progress;
pub mod sessions;

pub use mentor_core::Clock;

pub use app_services::{DashboardSnapshot, MentorServices};
pub use error::{AppServicesError, ImportError, PersistenceError};
pub use notes::NotesController;
pub use persistence::PersistenceFacade;
pub use progress::{ProgressController, ProgressView};
pub use sessions::{
    ExportContext, ExportFormat, SessionListController, SessionListView, SessionRowView,
    export_csv, export_ics, export_json, export_markdown, import_json, render_sessions,
};
