//! `ApplicationHandler` implementation for the winit event loop.

use winit::application::ApplicationHandler;
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::event_loop::ActiveEventLoop;
use winit::keyboard::{Key, NamedKey};
use winit::window::WindowId;

use super::core::HybridApp;

/// What a key press means to the app.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum KeyAction {
    /// Escape: dismiss a modal, or swipe back to the previous screen.
    Dismiss,
    Back,
    Forward,
}

/// Map a pressed key plus the Alt modifier to an action.
pub(super) fn key_action(key: &Key, alt: bool) -> Option<KeyAction> {
    match key {
        Key::Named(NamedKey::Escape) => Some(KeyAction::Dismiss),
        Key::Named(NamedKey::ArrowLeft) if alt => Some(KeyAction::Back),
        Key::Named(NamedKey::ArrowRight) if alt => Some(KeyAction::Forward),
        Key::Named(NamedKey::BrowserBack) => Some(KeyAction::Back),
        Key::Named(NamedKey::BrowserForward) => Some(KeyAction::Forward),
        _ => None,
    }
}

impl ApplicationHandler for HybridApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        if let Err(e) = self.initialize_window(event_loop) {
            tracing::error!("Initialization failed: {e}");
            self.shutdown();
            event_loop.exit();
            return;
        }

        self.update_window_title();
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                tracing::info!("Window close requested");
                self.shutdown();
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                if size.width > 0 && size.height > 0 {
                    self.sync_bounds();
                }
            }

            WindowEvent::ModifiersChanged(new_modifiers) => {
                self.modifiers = new_modifiers.state();
            }

            WindowEvent::KeyboardInput { event, .. } => {
                self.handle_keyboard_input(event);
            }

            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.should_exit {
            event_loop.exit();
            return;
        }
        self.poll_and_schedule(event_loop);
    }

    fn memory_warning(&mut self, _event_loop: &ActiveEventLoop) {
        tracing::warn!("Memory warning received");
        if let Some(ref mut screens) = self.screens {
            screens.on_memory_warning();
        }
    }
}

impl HybridApp {
    fn handle_keyboard_input(&mut self, event: KeyEvent) {
        if event.state != ElementState::Pressed {
            return;
        }
        let Some(action) = key_action(&event.logical_key, self.modifiers.alt_key()) else {
            return;
        };
        self.dispatch_key(action);
    }

    pub(super) fn dispatch_key(&mut self, action: KeyAction) {
        tracing::debug!(?action, "key action");
        match action {
            KeyAction::Dismiss => {
                if self.cancel_modal() {
                    return;
                }
                if let Some(ref mut screens) = self.screens {
                    screens.pop_by_gesture();
                }
            }
            KeyAction::Back => self.go_back(),
            KeyAction::Forward => self.go_forward(),
        }
    }

    pub(super) fn go_back(&mut self) {
        if let Some(top) = self.screens.as_mut().and_then(|s| s.top_mut()) {
            top.go_back();
        }
    }

    pub(super) fn go_forward(&mut self) {
        if let Some(top) = self.screens.as_mut().and_then(|s| s.top_mut()) {
            top.go_forward();
        }
    }
}
