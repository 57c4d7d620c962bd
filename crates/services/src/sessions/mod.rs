mod controller;
mod export;
mod view;

pub use controller::SessionListController;
pub use export::{
    ExportContext, ExportFormat, export_csv, export_ics, export_json, export_markdown, import_json,
};
pub use view::{
    DONE_LABEL, EMPTY_SUMMARY, NO_DATE_LABEL, SessionListView, SessionRowView, UNSCHEDULED_LABEL,
    render_sessions,
};
