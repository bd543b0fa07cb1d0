//! Stack-level swipe-back gesture control.

use std::sync::atomic::{AtomicBool, Ordering};

/// Capability to turn the navigation stack's swipe-back gesture on or off.
///
/// Screens receive this at construction. While the page inside a screen
/// can go back, the gesture is disabled so that the swipe belongs to the
/// page and not to the stack.
pub trait GesturePolicy: Send + Sync {
    fn set_swipe_back_enabled(&self, enabled: bool);
    fn is_swipe_back_enabled(&self) -> bool;
}

/// A plain flag. The host checks it before popping a screen in response
/// to the swipe-back gesture (or its keyboard equivalent).
#[derive(Debug)]
pub struct SwipeBackGate {
    enabled: AtomicBool,
}

impl SwipeBackGate {
    pub fn new() -> Self {
        Self {
            enabled: AtomicBool::new(true),
        }
    }
}

impl Default for SwipeBackGate {
    fn default() -> Self {
        Self::new()
    }
}

impl GesturePolicy for SwipeBackGate {
    fn set_swipe_back_enabled(&self, enabled: bool) {
        self.enabled.store(enabled, Ordering::Relaxed);
    }

    fn is_swipe_back_enabled(&self) -> bool {
        self.enabled.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gate_starts_enabled_and_toggles() {
        let gate = SwipeBackGate::new();
        assert!(gate.is_swipe_back_enabled());
        gate.set_swipe_back_enabled(false);
        assert!(!gate.is_swipe_back_enabled());
        gate.set_swipe_back_enabled(true);
        assert!(gate.is_swipe_back_enabled());
    }
}
