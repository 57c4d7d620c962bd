mod dashboard_vm;

pub use dashboard_vm::{DashboardVm, ProgressVm, SessionRowVm, SessionsVm, map_dashboard};
