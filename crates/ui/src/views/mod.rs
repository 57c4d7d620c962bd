mod dashboard;
mod export;
mod state;

#[cfg(test)]
mod session_actions_smoke;
#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use dashboard::DashboardView;
pub use export::ExportView;
pub use state::{ViewError, ViewState, view_state_from_resource};
