//! Identity context for the UI.

use api::{FirebaseAuth, FirebaseConfig};
use dioxus::prelude::*;
use flow::{FormCell, LoginForm};

/// The shared Firebase client.
pub fn use_identity() -> FirebaseAuth {
    use_context::<FirebaseAuth>()
}

/// Provider component that makes a [`FirebaseAuth`] client available to its children.
#[component]
pub fn AuthProvider(config: FirebaseConfig, children: Element) -> Element {
    use_context_provider(|| {
        if let Err(e) = config.validate() {
            tracing::warn!("sign-in will fail until configured: {}", e);
        }
        FirebaseAuth::new(config.clone())
    });

    rsx! {
        {children}
    }
}

/// A login form held in a component signal.
///
/// Writes are refused once the owning component has unmounted, so a sign-in that
/// resolves late leaves nothing behind.
#[derive(Clone, Copy)]
pub(crate) struct FormSignal(pub Signal<LoginForm>);

impl FormCell for FormSignal {
    fn with_form<R>(&self, f: impl FnOnce(&mut LoginForm) -> R) -> Option<R> {
        let mut signal = self.0;
        let result = match signal.try_write() {
            Ok(mut form) => Some(f(&mut form)),
            Err(_) => None,
        };
        result
    }
}
