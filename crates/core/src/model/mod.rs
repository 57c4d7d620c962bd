mod ids;
mod progress;
mod session;
mod session_list;

pub use ids::{SessionId, SessionIdGenerator};
pub use progress::{Progress, parse_number};
pub use session::{Session, SessionDraft, SessionError, ValidSessionDraft};
pub use session_list::SessionList;
