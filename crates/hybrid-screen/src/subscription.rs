//! Typed property subscriptions.
//!
//! A [`PropertyHub`] belongs to a renderer and fans property changes out
//! to listeners. Each `on_*` call returns a [`Subscription`]; dropping it
//! (or disposing the [`SubscriptionBag`] holding it) unregisters the
//! listener, so nothing is delivered to a screen after it is torn down.
//!
//! Listeners run while the hub is locked and must not subscribe or
//! unsubscribe from inside the callback.

use std::sync::{Arc, Mutex, Weak};

use url::Url;

use crate::events::PropertyChange;

type Listener = Box<dyn FnMut(&PropertyChange) + Send>;

#[derive(Default)]
struct Registry {
    next_id: u64,
    listeners: Vec<(u64, Listener)>,
}

/// Fan-out point for `progress`, `loading` and `url` changes.
#[derive(Clone, Default)]
pub struct PropertyHub {
    registry: Arc<Mutex<Registry>>,
}

impl std::fmt::Debug for PropertyHub {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PropertyHub")
            .field("listeners", &self.listener_count())
            .finish()
    }
}

impl PropertyHub {
    pub fn new() -> Self {
        Self::default()
    }

    /// Deliver a change to every live listener.
    pub fn emit(&self, change: PropertyChange) {
        if let Ok(mut registry) = self.registry.lock() {
            for (_, listener) in registry.listeners.iter_mut() {
                listener(&change);
            }
        }
    }

    pub fn on_progress_changed(
        &self,
        mut f: impl FnMut(f64) + Send + 'static,
    ) -> Subscription {
        self.subscribe(Box::new(move |change| {
            if let PropertyChange::Progress(value) = change {
                f(*value);
            }
        }))
    }

    pub fn on_loading_changed(
        &self,
        mut f: impl FnMut(bool) + Send + 'static,
    ) -> Subscription {
        self.subscribe(Box::new(move |change| {
            if let PropertyChange::Loading(loading) = change {
                f(*loading);
            }
        }))
    }

    pub fn on_url_changed(
        &self,
        mut f: impl FnMut(Option<&Url>) + Send + 'static,
    ) -> Subscription {
        self.subscribe(Box::new(move |change| {
            if let PropertyChange::Url(url) = change {
                f(url.as_ref());
            }
        }))
    }

    pub fn listener_count(&self) -> usize {
        self.registry.lock().map(|r| r.listeners.len()).unwrap_or(0)
    }

    fn subscribe(&self, listener: Listener) -> Subscription {
        let id = match self.registry.lock() {
            Ok(mut registry) => {
                let id = registry.next_id;
                registry.next_id += 1;
                registry.listeners.push((id, listener));
                id
            }
            Err(_) => u64::MAX,
        };
        Subscription {
            id,
            registry: Arc::downgrade(&self.registry),
        }
    }
}

/// Handle to one registered listener. Unregisters on drop.
#[must_use = "dropping a Subscription unregisters its listener"]
pub struct Subscription {
    id: u64,
    registry: Weak<Mutex<Registry>>,
}

impl Subscription {
    /// Unregister now.
    pub fn cancel(self) {}
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            if let Ok(mut registry) = registry.lock() {
                registry.listeners.retain(|(id, _)| *id != self.id);
            }
        }
    }
}

/// The set of subscriptions one screen holds on its renderer.
#[derive(Default)]
pub struct SubscriptionBag {
    subscriptions: Vec<Subscription>,
}

impl SubscriptionBag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, subscription: Subscription) {
        self.subscriptions.push(subscription);
    }

    /// Unregister every listener in the bag.
    pub fn dispose(&mut self) {
        self.subscriptions.clear();
    }

    pub fn len(&self) -> usize {
        self.subscriptions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subscriptions.is_empty()
    }
}
