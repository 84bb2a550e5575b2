//! Landing screen: animated scene, connectivity banner, timed redirect.

use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use flow::{AppConfig, HostTimer, RedirectGate};
use futures::StreamExt;

use crate::connectivity::{use_connectivity, OfflineBanner};
use crate::scene::QuantumScene;

const INDIA_FLAG: &str = "https://upload.wikimedia.org/wikipedia/en/4/41/Flag_of_India.svg";

/// Splash screen.
///
/// While online, `on_redirect` is called once with the onboarding path after the
/// configured delay. Going offline cancels the pending redirect and coming back
/// online starts the full delay again.
#[component]
pub fn SplashScreen(on_redirect: EventHandler<String>) -> Element {
    let splash = use_context::<AppConfig>().splash;

    let gate = use_hook(|| {
        let navigator = move |path: &str| on_redirect.call(path.to_string());
        let gate = RedirectGate::new(
            HostTimer::default(),
            navigator,
            splash.redirect_delay(),
            splash.onboarding_path.clone(),
        );
        Rc::new(RefCell::new(gate))
    });

    // Connectivity values reach the gate one by one, in host order.
    let feed = use_coroutine({
        let gate = gate.clone();
        move |mut values: UnboundedReceiver<bool>| {
            let gate = gate.clone();
            async move {
                while let Some(online) = values.next().await {
                    let armed = gate.borrow_mut().update(online);
                    if let Some(redirect) = armed {
                        spawn(redirect);
                    }
                }
            }
        }
    });

    let online = use_connectivity(move |is_online| feed.send(is_online));
    use_hook(|| feed.send(*online.peek()));

    use_drop(move || gate.borrow_mut().cancel());

    // The bar starts empty and grows on the next frame so the width transition runs.
    let mut started = use_signal(|| false);
    use_effect(move || started.set(true));

    let width = if started() && online() {
        splash.progress_width_percent
    } else {
        0
    };

    rsx! {
        div {
            class: "splash",
            div { class: "splash-glow" }
            main {
                class: "splash-card",
                div { class: "splash-scene", QuantumScene {} }
                div {
                    class: "splash-copy",
                    div { class: "splash-logo", "QY" }
                    h1 {
                        class: "splash-title",
                        "QUANTUM"
                        span { class: "gradient-text", "YOU" }
                    }
                    p {
                        class: "splash-tagline",
                        "A quantum‑inspired life simulator for kids and teens. "
                        "Watch the Quantum Core spin while your future timelines load."
                    }
                    if !online() {
                        OfflineBanner {}
                    }
                    footer {
                        class: "splash-footer",
                        span { "By Quantum AI Labs • Made with ❤️ in India" }
                        img { class: "splash-flag", src: INDIA_FLAG, alt: "Flag of India" }
                    }
                }
                LoadingBar { width_percent: width, duration_ms: splash.redirect_delay_ms }
            }
        }
    }
}

/// Presentational progress bar; its width eases over `duration_ms`.
#[component]
fn LoadingBar(width_percent: u8, duration_ms: u64) -> Element {
    rsx! {
        div {
            class: "loading-track",
            div {
                class: "loading-bar",
                style: "width: {width_percent}%; transition: width {duration_ms}ms ease-in-out;",
            }
        }
    }
}
