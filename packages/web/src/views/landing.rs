//! `/`: the splash screen.

use dioxus::prelude::*;
use ui::views::SplashScreen;

/// Landing page; hands the splash redirect to the router.
#[component]
pub fn Landing() -> Element {
    let nav = use_navigator();

    rsx! {
        SplashScreen {
            on_redirect: move |path: String| {
                nav.push(path.as_str());
            },
        }
    }
}
