//! Reactive connectivity for components.

use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use flow::{ConnectivitySource, ConnectivityWatch, HostConnectivity};

use crate::icons::FaWifi;
use crate::Icon;

pub const OFFLINE_MESSAGE: &str =
    "No internet connection. Connect to the internet to continue your Quantum journey.";

/// Current connectivity as a signal.
///
/// Seeded from the host's current status, then updated on every online/offline
/// transition. Each transition is also handed to `on_change` as it happens, so
/// a quick offline/online pair is seen as two calls even if renders coalesce.
/// The host listeners are removed when the calling component unmounts.
pub fn use_connectivity(mut on_change: impl FnMut(bool) + 'static) -> Signal<bool> {
    let mut online = use_signal(|| HostConnectivity::default().is_online());

    let watch = use_hook(|| {
        let source = HostConnectivity::default();
        let watch = ConnectivityWatch::start(&source, move |is_online| {
            online.set(is_online);
            on_change(is_online);
        });
        Rc::new(RefCell::new(Some(watch)))
    });

    use_drop(move || {
        watch.borrow_mut().take();
    });

    online
}

/// Banner shown on the splash screen while offline.
#[component]
pub fn OfflineBanner() -> Element {
    rsx! {
        div {
            class: "offline-banner",
            role: "status",
            Icon { icon: FaWifi, width: 14, height: 14 }
            span { "{OFFLINE_MESSAGE}" }
        }
    }
}
