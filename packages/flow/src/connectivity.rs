//! # Connectivity: host reachability as an owned subscription
//!
//! The host environment reports reachability two ways: a point-in-time query and a
//! stream of "became reachable" / "became unreachable" notifications. Both sit behind
//! [`ConnectivitySource`].
//!
//! Listener registration returns a [`Subscription`]. Dropping it removes the listeners,
//! so a component that owns one cannot leak handlers across mount/unmount cycles.
//! [`ConnectivityWatch`] is the piece a screen actually holds: the subscription plus
//! the last known `is_online` value, forwarding only real transitions to an observer.
//!
//! | Source | Platform | Notes |
//! |--------|----------|-------|
//! | [`BrowserConnectivity`] | wasm | `navigator.onLine` + window `online`/`offline` events via `gloo-events` |
//! | [`ManualConnectivity`] | any | driven by hand; tests and hosts without a reachability signal |

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

/// A reachability signal provided by the host.
pub trait ConnectivitySource {
    /// Current reachability.
    fn is_online(&self) -> bool;

    /// Register `listener` for reachability transitions until the returned
    /// [`Subscription`] is dropped.
    fn subscribe(&self, listener: impl FnMut(bool) + 'static) -> Subscription;
}

/// Handle keeping a listener registered. Dropping it unregisters the listener.
#[must_use = "dropping a Subscription unregisters its listener immediately"]
pub struct Subscription {
    release: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    /// A subscription with nothing to release.
    pub fn detached() -> Self {
        Self { release: None }
    }

    /// Unregister now rather than at drop.
    pub fn unsubscribe(mut self) {
        self.release_now();
    }

    fn release_now(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release_now();
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.release.is_some())
            .finish()
    }
}

/// Owned connectivity state for one screen.
#[derive(Debug)]
pub struct ConnectivityWatch {
    online: Rc<Cell<bool>>,
    _subscription: Subscription,
}

impl ConnectivityWatch {
    /// Read current reachability and start forwarding transitions to `observer`.
    pub fn start<S: ConnectivitySource>(source: &S, mut observer: impl FnMut(bool) + 'static) -> Self {
        let online = Rc::new(Cell::new(source.is_online()));
        let state = online.clone();
        let subscription = source.subscribe(move |is_online| {
            if state.replace(is_online) != is_online {
                tracing::debug!(is_online, "connectivity changed");
                observer(is_online);
            }
        });
        Self {
            online,
            _subscription: subscription,
        }
    }

    pub fn is_online(&self) -> bool {
        self.online.get()
    }
}

type Listener = Rc<RefCell<Box<dyn FnMut(bool)>>>;

#[derive(Default)]
struct ManualState {
    online: bool,
    next_id: u64,
    listeners: Vec<(u64, Listener)>,
}

/// Connectivity source toggled by hand.
#[derive(Clone, Default)]
pub struct ManualConnectivity {
    state: Rc<RefCell<ManualState>>,
}

impl ManualConnectivity {
    pub fn new(online: bool) -> Self {
        let source = Self::default();
        source.state.borrow_mut().online = online;
        source
    }

    /// Change reachability, notifying listeners on a transition.
    pub fn set_online(&self, online: bool) {
        let listeners: Vec<Listener> = {
            let mut state = self.state.borrow_mut();
            if state.online == online {
                return;
            }
            state.online = online;
            state.listeners.iter().map(|(_, l)| l.clone()).collect()
        };
        for listener in listeners {
            (&mut *listener.borrow_mut())(online);
        }
    }

    pub fn listener_count(&self) -> usize {
        self.state.borrow().listeners.len()
    }
}

impl ConnectivitySource for ManualConnectivity {
    fn is_online(&self) -> bool {
        self.state.borrow().online
    }

    fn subscribe(&self, listener: impl FnMut(bool) + 'static) -> Subscription {
        let id = {
            let mut state = self.state.borrow_mut();
            let id = state.next_id;
            state.next_id += 1;
            let listener: Box<dyn FnMut(bool)> = Box::new(listener);
            state.listeners.push((id, Rc::new(RefCell::new(listener))));
            id
        };
        let state: Weak<RefCell<ManualState>> = Rc::downgrade(&self.state);
        Subscription::new(move || {
            if let Some(state) = state.upgrade() {
                state.borrow_mut().listeners.retain(|(other, _)| *other != id);
            }
        })
    }
}

/// `navigator.onLine` plus the window's `online` / `offline` events.
#[cfg(target_arch = "wasm32")]
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserConnectivity;

#[cfg(target_arch = "wasm32")]
impl ConnectivitySource for BrowserConnectivity {
    fn is_online(&self) -> bool {
        web_sys::window()
            .map(|window| window.navigator().on_line())
            .unwrap_or(true)
    }

    fn subscribe(&self, listener: impl FnMut(bool) + 'static) -> Subscription {
        use gloo_events::EventListener;

        let Some(window) = web_sys::window() else {
            return Subscription::detached();
        };
        let listener = Rc::new(RefCell::new(listener));

        let on_online = {
            let listener = listener.clone();
            EventListener::new(&window, "online", move |_| (&mut *listener.borrow_mut())(true))
        };
        let on_offline = EventListener::new(&window, "offline", move |_| {
            (&mut *listener.borrow_mut())(false)
        });

        tracing::debug!("listening for online/offline events");
        Subscription::new(move || {
            drop(on_online);
            drop(on_offline);
            tracing::debug!("stopped listening for online/offline events");
        })
    }
}

/// The reachability source of the platform being compiled for.
#[cfg(target_arch = "wasm32")]
pub type HostConnectivity = BrowserConnectivity;

/// Native hosts have no reachability signal; they are always online.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Clone, Copy, Debug, Default)]
pub struct HostConnectivity;

#[cfg(not(target_arch = "wasm32"))]
impl ConnectivitySource for HostConnectivity {
    fn is_online(&self) -> bool {
        true
    }

    fn subscribe(&self, _listener: impl FnMut(bool) + 'static) -> Subscription {
        Subscription::detached()
    }
}
