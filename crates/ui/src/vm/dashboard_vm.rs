use mentor_core::model::SessionId;
use services::{DashboardSnapshot, ProgressView, SessionListView, SessionRowView};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionRowVm {
    pub id: SessionId,
    pub title: String,
    /// Raw date for the edit form; empty when unscheduled.
    pub date: String,
    pub date_label: String,
}

impl From<&SessionRowView> for SessionRowVm {
    fn from(row: &SessionRowView) -> Self {
        Self {
            id: row.id,
            title: row.title.clone(),
            date: row.date.clone().unwrap_or_default(),
            date_label: row.date_label.clone(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionsVm {
    pub summary: String,
    pub rows: Vec<SessionRowVm>,
}

impl From<&SessionListView> for SessionsVm {
    fn from(view: &SessionListView) -> Self {
        Self {
            summary: view.summary.clone(),
            rows: view.rows.iter().map(SessionRowVm::from).collect(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProgressVm {
    pub percent: u8,
    pub fill_style: String,
    pub label: String,
}

impl From<&ProgressView> for ProgressVm {
    fn from(view: &ProgressView) -> Self {
        Self {
            percent: view.percent,
            fill_style: format!("width: {};", view.fill_width),
            label: view.label.clone(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DashboardVm {
    pub notes: String,
    pub sessions: SessionsVm,
    pub progress: ProgressVm,
}

#[must_use]
pub fn map_dashboard(snapshot: &DashboardSnapshot) -> DashboardVm {
    DashboardVm {
        notes: snapshot.notes.clone(),
        sessions: SessionsVm::from(&snapshot.sessions),
        progress: ProgressVm::from(&snapshot.progress),
    }
}
