use dioxus::prelude::*;

use flow::AppConfig;
use ui::AuthProvider;
use views::{AuthPopup, Landing, Onboarding};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Landing {},
    #[route("/onboarding")]
    Onboarding {},
    #[route("/auth/popup")]
    AuthPopup {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

const CONFIG: &str = include_str!("../quantumyou.toml");

fn main() {
    dioxus::logger::initialize_default();
    dioxus::launch(App);
}

/// Parse the embedded config, falling back to defaults if it is invalid.
fn load_config() -> AppConfig {
    let config = match AppConfig::from_toml(CONFIG) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("{}; using defaults", e);
            AppConfig::default()
        }
    };
    config.with_env_overrides()
}

#[component]
fn App() -> Element {
    let config = use_context_provider(load_config);

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Link { rel: "stylesheet", href: ui::QUANTUMYOU_CSS }

        AuthProvider {
            config: config.firebase,
            Router::<Route> {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_config_is_valid() {
        let config = AppConfig::from_toml(CONFIG).unwrap();
        assert_eq!(config.splash.redirect_delay_ms, 3000);
        assert_eq!(config.splash.onboarding_path, "/onboarding");
        assert_eq!(config.splash.progress_width_percent, 70);
    }

    #[test]
    fn onboarding_route_matches_the_configured_path() {
        let config = AppConfig::from_toml(CONFIG).unwrap();
        let route: Route = config.splash.onboarding_path.parse().unwrap();
        assert_eq!(route, Route::Onboarding {});
    }

    #[test]
    fn popup_route_matches_the_oauth_redirect_path() {
        assert_eq!(Route::AuthPopup {}.to_string(), api::POPUP_CALLBACK_PATH);
    }
}
