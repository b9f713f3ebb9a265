//! State Management
//!
//! Panel switching and the session context shared by all panels.

pub mod panel;
pub mod session;

pub use panel::Panel;
pub use session::{provide_session, Session};
