//! # Firebase Authentication over REST
//!
//! [`FirebaseAuth`] talks to the Identity Toolkit v1 API with `reqwest`, which works
//! both natively and in the browser:
//!
//! | Call | Endpoint | Used by |
//! |------|----------|---------|
//! | [`sign_in_with_password`](FirebaseAuth::sign_in_with_password) | `accounts:signInWithPassword` | email/password form |
//! | [`sign_in_with_google`](FirebaseAuth::sign_in_with_google) | `accounts:signInWithIdp` | Google popup, after the ID token came back |
//!
//! Error bodies (`{"error": {"message": "INVALID_PASSWORD"}}`) are turned into
//! [`AuthError`] via [`AuthError::from_rest_message`]; transport failures become
//! `auth/network-request-failed`.

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::config::FirebaseConfig;
use super::error::{codes, AuthError};
use super::google::GoogleCredential;
use crate::models::session::SignInResponse;
use crate::models::AuthSession;
use crate::IdentityProvider;

const PASSWORD_PROVIDER: &str = "password";
const GOOGLE_PROVIDER: &str = "google.com";

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PasswordRequest<'a> {
    email: &'a str,
    password: &'a str,
    return_secure_token: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct IdpRequest<'a> {
    post_body: String,
    request_uri: &'a str,
    return_idp_credential: bool,
    return_secure_token: bool,
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: String,
}

/// Firebase Authentication client for one project.
#[derive(Clone, Debug)]
pub struct FirebaseAuth {
    config: FirebaseConfig,
    http: Client,
}

impl PartialEq for FirebaseAuth {
    fn eq(&self, other: &Self) -> bool {
        self.config == other.config
    }
}

impl FirebaseAuth {
    pub fn new(config: FirebaseConfig) -> Self {
        Self {
            config,
            http: Client::new(),
        }
    }

    /// Verify an email/password pair.
    pub async fn sign_in_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<AuthSession, AuthError> {
        let body = PasswordRequest {
            email,
            password,
            return_secure_token: true,
        };
        let response: SignInResponse = self.post("accounts:signInWithPassword", &body).await?;
        Ok(response.into_session(PASSWORD_PROVIDER))
    }

    /// Exchange a Google ID token for a Firebase session.
    pub async fn sign_in_with_google(
        &self,
        credential: &GoogleCredential,
    ) -> Result<AuthSession, AuthError> {
        let body = IdpRequest {
            post_body: idp_post_body(credential),
            request_uri: &credential.request_uri,
            return_idp_credential: true,
            return_secure_token: true,
        };
        let response: SignInResponse = self.post("accounts:signInWithIdp", &body).await?;
        Ok(response.into_session(GOOGLE_PROVIDER))
    }

    async fn post<B, R>(&self, method: &str, body: &B) -> Result<R, AuthError>
    where
        B: Serialize,
        R: DeserializeOwned,
    {
        if self.config.validate().is_err() {
            return Err(AuthError::from_code(codes::INVALID_API_KEY));
        }

        let url = format!("{}/{}", self.config.identity_toolkit_url(), method);
        let response = self
            .http
            .post(&url)
            .query(&[("key", self.config.api_key.as_str())])
            .json(body)
            .send()
            .await
            .map_err(AuthError::network)?;

        let status = response.status();
        let text = response.text().await.map_err(AuthError::network)?;

        if status.is_success() {
            return serde_json::from_str(&text).map_err(|e| {
                tracing::error!("unexpected {} response: {}", method, e);
                AuthError::from_code(codes::INTERNAL_ERROR)
            });
        }

        tracing::debug!(%status, "{} rejected", method);
        Err(rest_error(&text))
    }

    /// Google popup flow, browser only.
    #[cfg(target_arch = "wasm32")]
    async fn popup_google(&self) -> Result<AuthSession, AuthError> {
        let credential = super::popup::google_popup(&self.config).await?;
        self.sign_in_with_google(&credential).await
    }

    #[cfg(not(target_arch = "wasm32"))]
    async fn popup_google(&self) -> Result<AuthSession, AuthError> {
        Err(AuthError::from_code(codes::OPERATION_NOT_SUPPORTED))
    }
}

impl IdentityProvider for FirebaseAuth {
    async fn sign_in_with_popup(&self) -> Result<AuthSession, AuthError> {
        let session = self.popup_google().await?;
        tracing::info!(uid = %session.user.uid, "signed in with Google");
        Ok(session)
    }

    async fn sign_in_with_email_and_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<AuthSession, AuthError> {
        let session = self.sign_in_with_password(email, password).await?;
        tracing::info!(uid = %session.user.uid, "signed in with email");
        Ok(session)
    }
}

fn idp_post_body(credential: &GoogleCredential) -> String {
    oauth2::url::form_urlencoded::Serializer::new(String::new())
        .append_pair("id_token", &credential.id_token)
        .append_pair("providerId", GOOGLE_PROVIDER)
        .append_pair("nonce", &credential.nonce)
        .finish()
}

fn rest_error(body: &str) -> AuthError {
    match serde_json::from_str::<ErrorEnvelope>(body) {
        Ok(envelope) => AuthError::from_rest_message(&envelope.error.message),
        Err(_) => AuthError::from_code(codes::INTERNAL_ERROR),
    }
}
