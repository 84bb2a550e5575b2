//! Data models for the application.

pub(crate) mod session;

pub use session::{AuthSession, UserInfo};
