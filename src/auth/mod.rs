//! Admin session gate, path classification and session cookies.

pub mod middleware;
pub mod path;
pub mod session;

pub use middleware::{session_gate, AppState};
pub use path::{classify, classify_request_path, normalize, PathClass};
pub use session::{clear_session_cookie, is_authenticated, session_cookie, SESSION_COOKIE};
