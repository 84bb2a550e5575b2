//! # Google sign-in request
//!
//! Builds the authorization URL opened in the sign-in popup and validates what
//! Google sends back. The flow is the browser-only variant of OpenID Connect:
//!
//! 1. **[`GoogleAuthRequest::new`]** asks for `response_type=id_token` with the
//!    `openid`, `email` and `profile` scopes, a random CSRF `state` and a random
//!    `nonce`. Google redirects the popup to [`POPUP_CALLBACK_PATH`](super::POPUP_CALLBACK_PATH)
//!    with the ID token in the URL fragment.
//! 2. **[`GoogleAuthRequest::verify_redirect`]** parses that fragment, maps provider
//!    errors, checks `state`, and hands back a [`GoogleCredential`] which
//!    [`FirebaseAuth`](super::FirebaseAuth) exchanges through `accounts:signInWithIdp`.
//!
//! No client secret is involved, so everything here can run inside wasm.

use std::collections::HashMap;

use oauth2::basic::BasicClient;
use oauth2::{
    AuthUrl, ClientId, CsrfToken, EndpointNotSet, EndpointSet, RedirectUrl, ResponseType, Scope,
};

use super::config::FirebaseConfig;
use super::error::{codes, AuthError};

const GOOGLE_AUTH_URL: &str = "https://accounts.google.com/o/oauth2/v2/auth";

/// OAuth client type with only the authorization endpoint set.
type ConfiguredClient = oauth2::Client<
    oauth2::basic::BasicErrorResponse,
    oauth2::basic::BasicTokenResponse,
    oauth2::basic::BasicTokenIntrospectionResponse,
    oauth2::StandardRevocableToken,
    oauth2::basic::BasicRevocationErrorResponse,
    EndpointSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointNotSet,
>;

/// Google ID token ready to be exchanged with Firebase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoogleCredential {
    pub id_token: String,
    pub nonce: String,
    /// The redirect URI the token was delivered to.
    pub request_uri: String,
}

/// One pending popup sign-in.
#[derive(Debug)]
pub struct GoogleAuthRequest {
    url: String,
    state: CsrfToken,
    nonce: String,
    redirect_uri: String,
}

impl GoogleAuthRequest {
    /// Build an authorization URL for the configured Google client.
    pub fn new(config: &FirebaseConfig, redirect_uri: &str) -> Result<Self, AuthError> {
        if config.google_client_id.trim().is_empty() {
            return Err(AuthError::with_detail(
                codes::INVALID_OAUTH_CLIENT_ID,
                "Google sign-in is not configured",
            ));
        }

        let client = create_client(config, redirect_uri)?;
        let nonce = CsrfToken::new_random().secret().clone();

        let (url, state) = client
            .authorize_url(CsrfToken::new_random)
            .set_response_type(&ResponseType::new("id_token".to_string()))
            .add_scope(Scope::new("openid".to_string()))
            .add_scope(Scope::new("email".to_string()))
            .add_scope(Scope::new("profile".to_string()))
            .add_extra_param("nonce", nonce.clone())
            .add_extra_param("prompt", "select_account")
            .url();

        Ok(Self {
            url: url.to_string(),
            state,
            nonce,
            redirect_uri: redirect_uri.to_string(),
        })
    }

    /// URL to open in the popup.
    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn redirect_uri(&self) -> &str {
        &self.redirect_uri
    }

    pub fn state(&self) -> &str {
        self.state.secret()
    }

    /// Validate the fragment (`#id_token=...&state=...`) Google redirected to.
    pub fn verify_redirect(&self, fragment: &str) -> Result<GoogleCredential, AuthError> {
        let params: HashMap<String, String> =
            oauth2::url::form_urlencoded::parse(fragment.trim_start_matches('#').as_bytes())
                .into_owned()
                .collect();

        if let Some(error) = params.get("error") {
            if error == "access_denied" {
                return Err(AuthError::from_code(codes::USER_CANCELLED));
            }
            let detail = params
                .get("error_description")
                .map(String::as_str)
                .unwrap_or(error.as_str());
            return Err(AuthError::with_detail(codes::INTERNAL_ERROR, detail));
        }

        match params.get("state") {
            Some(state) if state == self.state.secret() => {}
            _ => return Err(AuthError::from_code(codes::INVALID_AUTH_EVENT)),
        }

        let id_token = params
            .get("id_token")
            .filter(|token| !token.is_empty())
            .cloned()
            .ok_or_else(|| AuthError::from_code(codes::INVALID_CREDENTIAL))?;

        Ok(GoogleCredential {
            id_token,
            nonce: self.nonce.clone(),
            request_uri: self.redirect_uri.clone(),
        })
    }
}

fn create_client(config: &FirebaseConfig, redirect_uri: &str) -> Result<ConfiguredClient, AuthError> {
    let auth_url = AuthUrl::new(GOOGLE_AUTH_URL.to_string())
        .map_err(|e| AuthError::with_detail(codes::INTERNAL_ERROR, &e.to_string()))?;
    let redirect_url = RedirectUrl::new(redirect_uri.to_string())
        .map_err(|e| AuthError::with_detail(codes::INTERNAL_ERROR, &e.to_string()))?;

    Ok(BasicClient::new(ClientId::new(config.google_client_id.clone()))
        .set_auth_uri(auth_url)
        .set_redirect_uri(redirect_url))
}

#[cfg(test)]
mod tests {
    use super::*;
    use oauth2::url::Url;

    const REDIRECT: &str = "http://localhost:8080/auth/popup";

    fn config() -> FirebaseConfig {
        FirebaseConfig {
            api_key: "key".to_string(),
            google_client_id: "123.apps.googleusercontent.com".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn authorization_url_asks_for_an_id_token() {
        let request = GoogleAuthRequest::new(&config(), REDIRECT).unwrap();
        let url = Url::parse(request.url()).unwrap();
        let query: HashMap<String, String> = url.query_pairs().into_owned().collect();

        assert_eq!(url.host_str(), Some("accounts.google.com"));
        assert_eq!(query["client_id"], "123.apps.googleusercontent.com");
        assert_eq!(query["response_type"], "id_token");
        assert_eq!(query["redirect_uri"], REDIRECT);
        assert_eq!(query["scope"], "openid email profile");
        assert_eq!(query["state"], request.state());
        assert_eq!(query["prompt"], "select_account");
        assert!(!query["nonce"].is_empty());
        assert_ne!(query["nonce"], request.state());
    }

    #[test]
    fn missing_client_id_is_rejected() {
        let config = FirebaseConfig {
            google_client_id: String::new(),
            ..config()
        };
        let err = GoogleAuthRequest::new(&config, REDIRECT).unwrap_err();
        assert_eq!(err.code, codes::INVALID_OAUTH_CLIENT_ID);
    }

    #[test]
    fn valid_fragment_yields_credential() {
        let request = GoogleAuthRequest::new(&config(), REDIRECT).unwrap();
        let fragment = format!("#state={}&id_token=header.payload.sig&authuser=0", request.state());

        let credential = request.verify_redirect(&fragment).unwrap();
        assert_eq!(credential.id_token, "header.payload.sig");
        assert_eq!(credential.request_uri, REDIRECT);
        assert!(!credential.nonce.is_empty());
    }

    #[test]
    fn state_mismatch_is_rejected() {
        let request = GoogleAuthRequest::new(&config(), REDIRECT).unwrap();
        let err = request
            .verify_redirect("state=forged&id_token=header.payload.sig")
            .unwrap_err();
        assert_eq!(err.code, codes::INVALID_AUTH_EVENT);
    }

    #[test]
    fn provider_errors_are_mapped() {
        let request = GoogleAuthRequest::new(&config(), REDIRECT).unwrap();

        let denied = request.verify_redirect("error=access_denied").unwrap_err();
        assert_eq!(denied.code, codes::USER_CANCELLED);

        let other = request
            .verify_redirect("error=invalid_request&error_description=Bad+redirect")
            .unwrap_err();
        assert_eq!(other.code, codes::INTERNAL_ERROR);
        assert_eq!(other.message, "Firebase: Bad redirect (auth/internal-error).");
    }

    #[test]
    fn missing_token_is_rejected() {
        let request = GoogleAuthRequest::new(&config(), REDIRECT).unwrap();
        let fragment = format!("state={}", request.state());
        let err = request.verify_redirect(&fragment).unwrap_err();
        assert_eq!(err.code, codes::INVALID_CREDENTIAL);
    }
}
