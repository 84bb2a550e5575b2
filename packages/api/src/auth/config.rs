//! Firebase project configuration.
//!
//! Loaded from the `[firebase]` table of `quantumyou.toml`; individual values can be
//! overridden from the environment (see [`FirebaseConfig::with_env_overrides`]).

use serde::{Deserialize, Serialize};

const IDENTITY_TOOLKIT: &str = "https://identitytoolkit.googleapis.com/v1";

/// Errors raised while validating provider configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} is not configured")]
    Missing(&'static str),
}

/// Web app configuration for a Firebase project.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FirebaseConfig {
    #[serde(default)]
    pub api_key: String,
    #[serde(default)]
    pub auth_domain: String,
    #[serde(default)]
    pub project_id: String,
    /// OAuth client id of the Google provider enabled in the Firebase console.
    #[serde(default)]
    pub google_client_id: String,
    /// Base URL of a local auth emulator, e.g. `http://localhost:9099`.
    #[serde(default)]
    pub emulator_host: Option<String>,
}

/// Replace `$field` with the variable named `$var` when it is set and non-empty.
macro_rules! env_override {
    ($field:expr, $var:literal) => {
        #[cfg(not(target_arch = "wasm32"))]
        {
            if let Ok(value) = std::env::var($var) {
                if !value.is_empty() {
                    $field = value;
                }
            }
        }
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(value) = option_env!($var) {
                if !value.is_empty() {
                    $field = value.to_string();
                }
            }
        }
    };
}

impl FirebaseConfig {
    /// Apply `FIREBASE_*` / `GOOGLE_CLIENT_ID` overrides.
    ///
    /// Native builds read the process environment (and `.env` via `dotenvy`);
    /// wasm builds read the variables at compile time.
    pub fn with_env_overrides(mut self) -> Self {
        #[cfg(not(target_arch = "wasm32"))]
        dotenvy::dotenv().ok();

        env_override!(self.api_key, "FIREBASE_API_KEY");
        env_override!(self.auth_domain, "FIREBASE_AUTH_DOMAIN");
        env_override!(self.project_id, "FIREBASE_PROJECT_ID");
        env_override!(self.google_client_id, "GOOGLE_CLIENT_ID");

        let mut emulator = self.emulator_host.clone().unwrap_or_default();
        env_override!(emulator, "FIREBASE_AUTH_EMULATOR_HOST");
        if !emulator.is_empty() {
            self.emulator_host = Some(emulator);
        }
        self
    }

    /// Check the fields needed for any sign-in call.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api_key.trim().is_empty() {
            return Err(ConfigError::Missing("firebase.api_key"));
        }
        Ok(())
    }

    /// Base URL of the Identity Toolkit REST API, honouring the emulator.
    pub fn identity_toolkit_url(&self) -> String {
        match self.emulator_host.as_deref() {
            Some(host) if !host.is_empty() => {
                format!("{}/identitytoolkit.googleapis.com/v1", host.trim_end_matches('/'))
            }
            _ => IDENTITY_TOOLKIT.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_is_default() {
        let config: FirebaseConfig = toml::from_str("").unwrap();
        assert_eq!(config, FirebaseConfig::default());
        assert!(config.validate().is_err());
    }

    #[test]
    fn parses_fields() {
        let config: FirebaseConfig = toml::from_str(
            r#"
            api_key = "key"
            auth_domain = "demo.firebaseapp.com"
            project_id = "demo"
            google_client_id = "123.apps.googleusercontent.com"
            "#,
        )
        .unwrap();
        assert_eq!(config.api_key, "key");
        assert_eq!(config.project_id, "demo");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn blank_api_key_is_rejected() {
        let config = FirebaseConfig {
            api_key: "   ".to_string(),
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert_eq!(err.to_string(), "firebase.api_key is not configured");
    }

    #[test]
    fn emulator_changes_base_url() {
        let mut config = FirebaseConfig::default();
        assert_eq!(
            config.identity_toolkit_url(),
            "https://identitytoolkit.googleapis.com/v1"
        );

        config.emulator_host = Some("http://localhost:9099/".to_string());
        assert_eq!(
            config.identity_toolkit_url(),
            "http://localhost:9099/identitytoolkit.googleapis.com/v1"
        );
    }
}
