//! # Redirect gate: the splash screen's one-shot delayed navigation
//!
//! [`RedirectGate`] owns the only redirect timer a splash screen may have. It is fed
//! every connectivity value and reacts to changes:
//!
//! - **online** → any pending redirect is aborted, then a fresh one is armed for the
//!   full delay. The armed redirect is returned as a future for the caller to spawn.
//! - **offline** → the pending redirect is aborted. Nothing resumes from partial
//!   progress; coming back online starts the delay again.
//! - **drop / [`cancel`](RedirectGate::cancel)** → the pending redirect is aborted.
//!
//! The returned future is wrapped in [`Abortable`]; once its handle is aborted it
//! resolves without navigating, even if its timer had already elapsed and it was
//! merely waiting to be polled. After a redirect has fired the gate is spent and
//! never arms again.

use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use futures::future::{AbortHandle, Abortable};
use futures::FutureExt;

use crate::timer::Timer;

/// The host's "navigate to path" capability.
pub trait Navigate: Clone + 'static {
    fn navigate(&self, path: &str);
}

impl<F> Navigate for F
where
    F: Fn(&str) + Clone + 'static,
{
    fn navigate(&self, path: &str) {
        self(path)
    }
}

/// Connectivity-gated, cancellable, one-shot navigation.
pub struct RedirectGate<T: Timer, N: Navigate> {
    timer: T,
    navigator: N,
    delay: Duration,
    destination: String,
    online: Option<bool>,
    pending: Option<AbortHandle>,
    fired: Arc<AtomicBool>,
}

impl<T: Timer, N: Navigate> RedirectGate<T, N> {
    pub fn new(timer: T, navigator: N, delay: Duration, destination: impl Into<String>) -> Self {
        Self {
            timer,
            navigator,
            delay,
            destination: destination.into(),
            online: None,
            pending: None,
            fired: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Feed the current connectivity value.
    ///
    /// Returns the newly armed redirect when this call armed one; the caller must
    /// spawn it on its executor. Repeating the previous value is a no-op.
    pub fn update(&mut self, online: bool) -> Option<impl Future<Output = ()>> {
        if self.online == Some(online) {
            return None;
        }
        self.online = Some(online);
        self.cancel();

        if !online || self.has_fired() {
            return None;
        }
        Some(self.arm())
    }

    /// Abort the pending redirect, if any.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
            if !self.has_fired() {
                tracing::debug!("pending redirect cancelled");
            }
        }
    }

    /// Whether a redirect is scheduled and has not yet fired.
    pub fn is_armed(&self) -> bool {
        self.pending.is_some() && !self.has_fired()
    }

    pub fn has_fired(&self) -> bool {
        self.fired.load(Ordering::SeqCst)
    }

    fn arm(&mut self) -> impl Future<Output = ()> {
        let (handle, registration) = AbortHandle::new_pair();
        self.pending = Some(handle);

        let sleep = self.timer.sleep(self.delay);
        let navigator = self.navigator.clone();
        let destination = self.destination.clone();
        let fired = self.fired.clone();
        let delay = self.delay;

        tracing::debug!(?delay, %destination, "redirect armed");
        let redirect = async move {
            sleep.await;
            if fired.swap(true, Ordering::SeqCst) {
                return;
            }
            tracing::info!(%destination, "redirecting");
            navigator.navigate(&destination);
        };
        Abortable::new(redirect, registration).map(|_| ())
    }
}

impl<T: Timer, N: Navigate> Drop for RedirectGate<T, N> {
    fn drop(&mut self) {
        self.cancel();
    }
}
