//! Google sign-in popup, driven from the opener window.
//!
//! The popup is sent to Google and redirected back to
//! [`POPUP_CALLBACK_PATH`](super::POPUP_CALLBACK_PATH) on our own origin. While it is on
//! Google's pages its location is unreadable (cross-origin), so the opener polls until
//! either the popup is closed or its location becomes readable at the callback URL.

use std::time::Duration;

use super::config::FirebaseConfig;
use super::error::{codes, AuthError};
use super::google::{GoogleAuthRequest, GoogleCredential};
use super::POPUP_CALLBACK_PATH;

const POPUP_NAME: &str = "quantumyou-google-signin";
const POPUP_FEATURES: &str = "popup=yes,width=500,height=600";
const POLL_INTERVAL: Duration = Duration::from_millis(300);

pub(crate) async fn google_popup(config: &FirebaseConfig) -> Result<GoogleCredential, AuthError> {
    let window =
        web_sys::window().ok_or_else(|| AuthError::from_code(codes::OPERATION_NOT_SUPPORTED))?;
    let origin = window
        .location()
        .origin()
        .map_err(|_| AuthError::from_code(codes::OPERATION_NOT_SUPPORTED))?;

    let request = GoogleAuthRequest::new(config, &format!("{origin}{POPUP_CALLBACK_PATH}"))?;

    let popup = window
        .open_with_url_and_target_and_features(request.url(), POPUP_NAME, POPUP_FEATURES)
        .ok()
        .flatten()
        .ok_or_else(|| AuthError::from_code(codes::POPUP_BLOCKED))?;

    loop {
        gloo_timers::future::sleep(POLL_INTERVAL).await;

        if popup.closed().unwrap_or(true) {
            return Err(AuthError::from_code(codes::POPUP_CLOSED_BY_USER));
        }

        // Throws while the popup is still on a foreign origin.
        let Ok(href) = popup.location().href() else {
            continue;
        };
        if !href.starts_with(request.redirect_uri()) {
            continue;
        }

        let _ = popup.close();
        let fragment = href.split_once('#').map(|(_, f)| f).unwrap_or_default();
        return request.verify_redirect(fragment);
    }
}
