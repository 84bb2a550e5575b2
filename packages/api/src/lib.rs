//! # API crate: identity provider client for QuantumYou
//!
//! Everything the onboarding screen needs to talk to the identity platform
//! (Firebase Authentication) lives here. The UI only ever sees the
//! [`IdentityProvider`] trait and the [`AuthSession`] / [`AuthError`] types;
//! the concrete transport is [`FirebaseAuth`].
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`auth`] | Firebase REST client, Google OAuth popup, error taxonomy, provider configuration |
//! | [`models`] | Session and user types returned by a successful sign-in |
//!
//! ## Platforms
//!
//! The crate compiles natively and for `wasm32`. The Google popup flow needs a
//! browser window and is only wired up on `wasm32`; natively it reports
//! `auth/operation-not-supported-in-this-environment`.

use std::future::Future;

pub mod auth;
pub mod models;

pub use auth::{AuthError, ConfigError, FirebaseAuth, FirebaseConfig, POPUP_CALLBACK_PATH};
pub use models::{AuthSession, UserInfo};

/// Async interface to an external identity platform.
pub trait IdentityProvider {
    /// Popup-based Google OAuth sign-in.
    fn sign_in_with_popup(&self) -> impl Future<Output = Result<AuthSession, AuthError>>;

    /// Email/password sign-in.
    fn sign_in_with_email_and_password(
        &self,
        email: &str,
        password: &str,
    ) -> impl Future<Output = Result<AuthSession, AuthError>>;
}
