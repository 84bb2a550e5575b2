use dioxus::prelude::*;
use ui::views::LoginScreen;

#[component]
pub fn Onboarding() -> Element {
    rsx! {
        LoginScreen {}
    }
}
