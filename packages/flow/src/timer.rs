//! Platform timers.

use std::future::Future;
use std::time::Duration;

/// Something that can produce a future completing after a delay.
///
/// The delay starts when [`sleep`](Timer::sleep) is called, not when the future is
/// first polled.
pub trait Timer: Clone + 'static {
    type Sleep: Future<Output = ()> + 'static;

    fn sleep(&self, duration: Duration) -> Self::Sleep;
}

/// `setTimeout`-backed timer for the browser.
#[cfg(target_arch = "wasm32")]
#[derive(Clone, Copy, Debug, Default)]
pub struct GlooTimer;

#[cfg(target_arch = "wasm32")]
impl Timer for GlooTimer {
    type Sleep = gloo_timers::future::TimeoutFuture;

    fn sleep(&self, duration: Duration) -> Self::Sleep {
        gloo_timers::future::sleep(duration)
    }
}

/// Tokio-backed timer for native builds and tests.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Clone, Copy, Debug, Default)]
pub struct TokioTimer;

#[cfg(not(target_arch = "wasm32"))]
impl Timer for TokioTimer {
    type Sleep = tokio::time::Sleep;

    fn sleep(&self, duration: Duration) -> Self::Sleep {
        tokio::time::sleep(duration)
    }
}

#[cfg(target_arch = "wasm32")]
pub type HostTimer = GlooTimer;
#[cfg(not(target_arch = "wasm32"))]
pub type HostTimer = TokioTimer;
