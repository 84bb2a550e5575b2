//! # Signed-in session
//!
//! [`AuthSession`] is what a successful Identity Toolkit call produces: the Firebase
//! ID token, its refresh token and lifetime, and a [`UserInfo`] projection of the
//! account. Both `signInWithPassword` and `signInWithIdp` answer with the same
//! camelCase shape, so a single [`SignInResponse`] covers them.
//!
//! Nothing here is persisted; the onboarding screen only acknowledges success.

use serde::{Deserialize, Serialize};

/// Account details safe to show in the UI.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserInfo {
    pub uid: String,
    pub email: String,
    pub display_name: Option<String>,
    pub photo_url: Option<String>,
    /// `password` or `google.com`.
    pub provider_id: String,
}

impl UserInfo {
    /// Get display name, falling back to email if name is not set.
    pub fn display_name(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.email)
    }
}

/// Tokens and profile returned by a successful sign-in.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthSession {
    pub user: UserInfo,
    pub id_token: String,
    pub refresh_token: String,
    pub expires_in_secs: u64,
}

/// Raw success body of `accounts:signInWithPassword` / `accounts:signInWithIdp`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SignInResponse {
    pub local_id: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub photo_url: Option<String>,
    pub id_token: String,
    #[serde(default)]
    pub refresh_token: String,
    /// Seconds, sent as a string.
    #[serde(default)]
    pub expires_in: Option<String>,
    #[serde(default)]
    pub provider_id: Option<String>,
}

impl SignInResponse {
    pub(crate) fn into_session(self, default_provider: &str) -> AuthSession {
        let display_name = self.display_name.filter(|name| !name.is_empty());
        AuthSession {
            user: UserInfo {
                uid: self.local_id,
                email: self.email,
                display_name,
                photo_url: self.photo_url.filter(|url| !url.is_empty()),
                provider_id: self
                    .provider_id
                    .unwrap_or_else(|| default_provider.to_string()),
            },
            id_token: self.id_token,
            refresh_token: self.refresh_token,
            expires_in_secs: self
                .expires_in
                .and_then(|secs| secs.parse().ok())
                .unwrap_or(0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn password_response_becomes_session() {
        let body = r#"{
            "kind": "identitytoolkit#VerifyPasswordResponse",
            "localId": "uid-123",
            "email": "kid@example.com",
            "displayName": "",
            "idToken": "id.jwt",
            "registered": true,
            "refreshToken": "refresh",
            "expiresIn": "3600"
        }"#;
        let response: SignInResponse = serde_json::from_str(body).unwrap();
        let session = response.into_session("password");

        assert_eq!(session.user.uid, "uid-123");
        assert_eq!(session.user.provider_id, "password");
        assert_eq!(session.user.display_name, None);
        assert_eq!(session.user.display_name(), "kid@example.com");
        assert_eq!(session.expires_in_secs, 3600);
    }

    #[test]
    fn idp_response_keeps_provider_and_profile() {
        let body = r#"{
            "federatedId": "https://accounts.google.com/42",
            "providerId": "google.com",
            "localId": "uid-42",
            "email": "teen@example.com",
            "displayName": "Future You",
            "photoUrl": "https://example.com/me.png",
            "idToken": "id.jwt",
            "refreshToken": "refresh",
            "expiresIn": "not-a-number"
        }"#;
        let response: SignInResponse = serde_json::from_str(body).unwrap();
        let session = response.into_session("google.com");

        assert_eq!(session.user.provider_id, "google.com");
        assert_eq!(session.user.display_name(), "Future You");
        assert_eq!(session.user.photo_url.as_deref(), Some("https://example.com/me.png"));
        assert_eq!(session.expires_in_secs, 0);
    }
}
