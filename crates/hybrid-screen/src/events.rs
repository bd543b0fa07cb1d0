//! Events flowing from a renderer into its screen.

use std::sync::{Arc, Mutex};

use url::Url;

use crate::dialog::{DialogRequest, NewWindowRequest};

/// A change to one of the renderer's observable properties.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyChange {
    /// Estimated load progress in `[0.0, 1.0]`.
    Progress(f64),
    /// The renderer started or stopped loading.
    Loading(bool),
    /// The committed URL changed. `None` for documents without one.
    Url(Option<Url>),
}

/// Navigation lifecycle callbacks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationEvent {
    /// A navigation was accepted and is waiting for its first bytes.
    ProvisionalStarted,
    /// The navigation failed before any content arrived.
    ProvisionalFailed { error: String },
    /// The navigation failed after content started loading.
    Failed { error: String },
    /// The renderer's content process died.
    ContentProcessTerminated,
}

/// Everything a renderer can tell its screen, in emission order.
#[derive(Debug)]
pub enum RendererEvent {
    Property(PropertyChange),
    Navigation(NavigationEvent),
    Dialog(DialogRequest),
    NewWindow(NewWindowRequest),
}

impl From<PropertyChange> for RendererEvent {
    fn from(change: PropertyChange) -> Self {
        Self::Property(change)
    }
}

impl From<NavigationEvent> for RendererEvent {
    fn from(event: NavigationEvent) -> Self {
        Self::Navigation(event)
    }
}

/// Shared queue a screen drains on the UI thread.
///
/// Renderer callbacks and property subscriptions push into it; the
/// controller takes everything out in one go and applies it in order.
#[derive(Debug, Clone, Default)]
pub struct EventSink {
    events: Arc<Mutex<Vec<RendererEvent>>>,
}

impl EventSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, event: impl Into<RendererEvent>) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event.into());
        }
    }

    /// Take all pending events.
    pub fn drain(&self) -> Vec<RendererEvent> {
        match self.events.lock() {
            Ok(mut events) => std::mem::take(&mut *events),
            Err(_) => Vec::new(),
        }
    }

    /// Drop pending events without handling them.
    pub fn clear(&self) {
        if let Ok(mut events) = self.events.lock() {
            events.clear();
        }
    }

    pub fn len(&self) -> usize {
        self.events.lock().map(|e| e.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
