use mentor_core::model::{SessionId, SessionList};

pub const EMPTY_SUMMARY: &str = "No sessions yet. Save some notes and add a session.";
/// Shown in the summary when the next session has no date.
pub const UNSCHEDULED_LABEL: &str = "unscheduled";
/// Shown on a row whose session has no date.
pub const NO_DATE_LABEL: &str = "No date";
pub const DONE_LABEL: &str = "Done";

/// Render-ready projection of the session list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionListView {
    pub summary: String,
    pub count: usize,
    pub rows: Vec<SessionRowView>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionRowView {
    pub id: SessionId,
    pub title: String,
    pub date: Option<String>,
    pub date_label: String,
}

impl SessionListView {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Project `list` into the summary line and one row per session.
///
/// "Next" is the first entry, i.e. the most recently added session, not the
/// earliest by date.
#[must_use]
pub fn render_sessions(list: &SessionList) -> SessionListView {
    let Some(next) = list.first() else {
        return SessionListView {
            summary: EMPTY_SUMMARY.to_string(),
            count: 0,
            rows: Vec::new(),
        };
    };

    let count = list.len();
    let next_date = next.date().unwrap_or(UNSCHEDULED_LABEL);
    let summary = format!("You have {count} session(s) scheduled. Next: {next_date}.");

    let rows = list
        .iter()
        .map(|session| SessionRowView {
            id: session.id(),
            title: session.title().to_string(),
            date: session.date().map(str::to_owned),
            date_label: session.date().unwrap_or(NO_DATE_LABEL).to_string(),
        })
        .collect();

    SessionListView {
        summary,
        count,
        rows,
    }
}
