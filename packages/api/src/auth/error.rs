//! # Authentication errors
//!
//! [`AuthError`] is the single failure type returned by every sign-in path. It keeps
//! two things:
//!
//! - `code`: a Firebase SDK style identifier such as `auth/wrong-password`, useful
//!   for logging and tests.
//! - `message`: the human-readable string shown to the user as-is.
//!
//! REST failures from the Identity Toolkit carry upper-case codes
//! (`INVALID_PASSWORD`, `TOO_MANY_ATTEMPTS_TRY_LATER : detail`);
//! [`AuthError::from_rest_message`] translates them into the SDK's vocabulary so the
//! user sees the same text the JavaScript SDK would produce.

/// Firebase SDK error codes produced by this crate.
pub mod codes {
    pub const INVALID_API_KEY: &str = "auth/invalid-api-key";
    pub const INVALID_AUTH_EVENT: &str = "auth/invalid-auth-event";
    pub const INVALID_CREDENTIAL: &str = "auth/invalid-credential";
    pub const INVALID_EMAIL: &str = "auth/invalid-email";
    pub const INVALID_OAUTH_CLIENT_ID: &str = "auth/invalid-oauth-client-id";
    pub const INTERNAL_ERROR: &str = "auth/internal-error";
    pub const MISSING_PASSWORD: &str = "auth/missing-password";
    pub const NETWORK_REQUEST_FAILED: &str = "auth/network-request-failed";
    pub const OPERATION_NOT_ALLOWED: &str = "auth/operation-not-allowed";
    pub const OPERATION_NOT_SUPPORTED: &str =
        "auth/operation-not-supported-in-this-environment";
    pub const POPUP_BLOCKED: &str = "auth/popup-blocked";
    pub const POPUP_CLOSED_BY_USER: &str = "auth/popup-closed-by-user";
    pub const TOO_MANY_REQUESTS: &str = "auth/too-many-requests";
    pub const USER_CANCELLED: &str = "auth/user-cancelled";
    pub const USER_DISABLED: &str = "auth/user-disabled";
    pub const USER_NOT_FOUND: &str = "auth/user-not-found";
    pub const WRONG_PASSWORD: &str = "auth/wrong-password";
}

/// A failed sign-in. Displays as its user-facing message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct AuthError {
    pub code: String,
    pub message: String,
}

impl AuthError {
    /// Error with an explicit message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }

    /// Error with the SDK's default wording: `Firebase: Error (auth/...).`
    pub fn from_code(code: &str) -> Self {
        Self::new(code, format!("Firebase: Error ({code})."))
    }

    /// Error with a server-provided detail: `Firebase: <detail> (auth/...).`
    pub fn with_detail(code: &str, detail: &str) -> Self {
        let detail = detail.trim();
        if detail.is_empty() {
            return Self::from_code(code);
        }
        Self::new(code, format!("Firebase: {detail} ({code})."))
    }

    /// Translate an Identity Toolkit error message (`CODE` or `CODE : detail`).
    pub fn from_rest_message(raw: &str) -> Self {
        let (server_code, detail) = match raw.split_once(" : ") {
            Some((code, detail)) => (code.trim(), detail),
            None => (raw.trim(), ""),
        };
        let code = sdk_code(server_code);
        Self::with_detail(&code, detail)
    }

    /// Transport failure before the provider answered.
    pub fn network(err: impl std::fmt::Display) -> Self {
        tracing::warn!("identity provider unreachable: {}", err);
        Self::from_code(codes::NETWORK_REQUEST_FAILED)
    }
}

fn sdk_code(server_code: &str) -> String {
    let mapped = match server_code {
        "EMAIL_NOT_FOUND" => codes::USER_NOT_FOUND,
        "INVALID_PASSWORD" => codes::WRONG_PASSWORD,
        "INVALID_LOGIN_CREDENTIALS" | "INVALID_IDP_RESPONSE" => codes::INVALID_CREDENTIAL,
        "INVALID_EMAIL" => codes::INVALID_EMAIL,
        "USER_DISABLED" => codes::USER_DISABLED,
        "TOO_MANY_ATTEMPTS_TRY_LATER" => codes::TOO_MANY_REQUESTS,
        "MISSING_PASSWORD" => codes::MISSING_PASSWORD,
        "OPERATION_NOT_ALLOWED" => codes::OPERATION_NOT_ALLOWED,
        "API_KEY_INVALID" | "INVALID_API_KEY" => codes::INVALID_API_KEY,
        other if other.starts_with("API key not valid") => codes::INVALID_API_KEY,
        other => {
            let slug: String = other
                .to_lowercase()
                .split(|c: char| c == '_' || c.is_whitespace())
                .filter(|part| !part.is_empty())
                .collect::<Vec<_>>()
                .join("-");
            if slug.is_empty() {
                return codes::INTERNAL_ERROR.to_string();
            }
            return format!("auth/{slug}");
        }
    };
    mapped.to_string()
}
