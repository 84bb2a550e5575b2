//! Platform-neutral state behind the QuantumYou screens.
//!
//! Nothing in this crate touches Dioxus; the `ui` crate binds these types to
//! signals and components.

pub mod config;
pub mod connectivity;
pub mod login;
pub mod redirect;
pub mod timer;

pub use config::{AppConfig, ConfigError, SplashConfig};
pub use connectivity::{
    ConnectivitySource, ConnectivityWatch, HostConnectivity, ManualConnectivity, Subscription,
};
pub use login::{submit_email, submit_google, Attempt, FormCell, LoginForm, SignInMethod};
pub use redirect::{Navigate, RedirectGate};
pub use timer::{HostTimer, Timer};
