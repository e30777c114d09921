//! HTTP middleware: session layer and auth extractors.

pub mod auth;
pub mod session;

pub use auth::{OptionalAuth, RequireAuth, set_current_user};
pub use session::{SESSION_COOKIE_NAME, create_session_layer};
