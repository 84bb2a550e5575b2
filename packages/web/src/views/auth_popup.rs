//! Same-origin landing page for the Google sign-in popup.
//!
//! The opener window polls this page's location, reads the token from the URL
//! fragment and closes the popup, so there is nothing to do here but wait.

use dioxus::prelude::*;

#[component]
pub fn AuthPopup() -> Element {
    rsx! {
        div { class: "popup-status", "Completing sign-in…" }
    }
}
