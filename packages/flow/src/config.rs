//! # Application configuration: `quantumyou.toml`
//!
//! The web binary embeds this file and parses it once at startup.
//!
//! ```toml
//! [splash]
//! redirect_delay_ms = 3000          # how long the splash stays up while online
//! onboarding_path = "/onboarding"   # where the splash redirects to
//! progress_width_percent = 70       # width the loading bar grows to
//!
//! [firebase]
//! api_key = "..."
//! auth_domain = "..."
//! project_id = "..."
//! google_client_id = "..."
//! ```
//!
//! Every field has a default, so an empty file is a valid (if unauthenticated)
//! configuration.

use std::time::Duration;

use api::FirebaseConfig;
use serde::{Deserialize, Serialize};

/// Errors raised while loading `quantumyou.toml`.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid quantumyou.toml: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("splash.onboarding_path must be an absolute path, got {0:?}")]
    RelativePath(String),
}

/// Top-level configuration stored in `quantumyou.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub splash: SplashConfig,
    #[serde(default)]
    pub firebase: FirebaseConfig,
}

/// Splash screen behaviour.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SplashConfig {
    #[serde(default = "default_redirect_delay")]
    pub redirect_delay_ms: u64,
    #[serde(default = "default_onboarding_path")]
    pub onboarding_path: String,
    #[serde(default = "default_progress_width")]
    pub progress_width_percent: u8,
}

fn default_redirect_delay() -> u64 {
    3000
}

fn default_onboarding_path() -> String {
    "/onboarding".to_string()
}

fn default_progress_width() -> u8 {
    70
}

impl Default for SplashConfig {
    fn default() -> Self {
        Self {
            redirect_delay_ms: default_redirect_delay(),
            onboarding_path: default_onboarding_path(),
            progress_width_percent: default_progress_width(),
        }
    }
}

impl SplashConfig {
    pub fn redirect_delay(&self) -> Duration {
        Duration::from_millis(self.redirect_delay_ms)
    }
}

impl AppConfig {
    /// Parse and validate from a TOML string.
    pub fn from_toml(s: &str) -> Result<Self, ConfigError> {
        let mut config: Self = toml::from_str(s)?;
        if !config.splash.onboarding_path.starts_with('/') {
            return Err(ConfigError::RelativePath(config.splash.onboarding_path));
        }
        config.splash.progress_width_percent = config.splash.progress_width_percent.min(100);
        Ok(config)
    }

    /// Apply environment overrides to the provider section.
    pub fn with_env_overrides(mut self) -> Self {
        self.firebase = self.firebase.with_env_overrides();
        self
    }
}
