//! Authentication against Firebase and Google.

mod config;
mod error;
mod firebase;
mod google;
#[cfg(target_arch = "wasm32")]
mod popup;

pub use config::{ConfigError, FirebaseConfig};
pub use error::{codes, AuthError};
pub use firebase::FirebaseAuth;
pub use google::{GoogleAuthRequest, GoogleCredential};

/// Same-origin page the Google popup is redirected back to.
pub const POPUP_CALLBACK_PATH: &str = "/auth/popup";
