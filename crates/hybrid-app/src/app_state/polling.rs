//! Polling of renderer events, toolbar input and the progress fade.

use std::time::{Duration, Instant};

use winit::event_loop::{ActiveEventLoop, ControlFlow};

use hybrid_webview::ToolbarAction;

use super::core::HybridApp;

/// Wake-up interval while idle.
pub(super) const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Wake-up interval while the progress bar is fading.
pub(super) const FRAME_INTERVAL: Duration = Duration::from_millis(16);

impl HybridApp {
    /// Run one polling pass and schedule the next wake-up.
    pub(super) fn poll_and_schedule(&mut self, event_loop: &ActiveEventLoop) {
        let animating = self.poll(Instant::now());
        let interval = if animating { FRAME_INTERVAL } else { POLL_INTERVAL };
        event_loop.set_control_flow(ControlFlow::WaitUntil(Instant::now() + interval));
    }

    /// Returns `true` while any screen is animating.
    pub(super) fn poll(&mut self, now: Instant) -> bool {
        let dt = now.saturating_duration_since(self.last_poll);
        self.last_poll = now;

        self.poll_toolbar_actions();

        let animating = match self.screens {
            Some(ref mut screens) => {
                screens.pump(&mut self.modals);
                screens.tick(dt)
            }
            None => false,
        };

        self.show_next_modal();
        self.sync_visibility();
        self.render_chrome();
        self.update_window_title();
        animating
    }

    fn poll_toolbar_actions(&mut self) {
        let actions = match self.toolbar {
            Some(ref toolbar) => toolbar.drain_actions(),
            None => return,
        };
        for action in actions {
            match action {
                ToolbarAction::Back => self.go_back(),
                ToolbarAction::Forward => self.go_forward(),
                ToolbarAction::ModalResponse(response) => self.finish_modal(response),
            }
        }
    }

    /// Only the top screen is visible, and not while a modal covers it.
    fn sync_visibility(&mut self) {
        let Some(ref screens) = self.screens else {
            return;
        };
        let Some(top) = screens.top() else {
            return;
        };
        let wanted = (top.id().clone(), !self.modals.is_showing());
        if self.shown_screen.as_ref() == Some(&wanted) {
            return;
        }

        for screen in screens.screens() {
            let visible = screen.id() == &wanted.0 && wanted.1;
            if let Err(e) = screen.renderer().set_visible(visible) {
                tracing::warn!(screen = screen.id().short(), "Failed to set visibility: {e}");
            }
        }
        // The top screen changed, so its chrome must be pushed again
        self.shown_chrome = None;
        self.shown_screen = Some(wanted);
    }

    fn render_chrome(&mut self) {
        let (Some(toolbar), Some(screens)) = (&self.toolbar, &self.screens) else {
            return;
        };
        let Some(top) = screens.top() else {
            return;
        };
        let chrome = top.chrome();
        if self.shown_chrome.as_ref() == Some(chrome) {
            return;
        }
        if let Err(e) = toolbar.render(chrome) {
            tracing::warn!("Failed to update toolbar: {e}");
            return;
        }
        self.shown_chrome = Some(chrome.clone());
    }
}
