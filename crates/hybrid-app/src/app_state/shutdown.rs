//! Graceful shutdown: answer open dialogs, destroy screens, drop surfaces.

use super::core::HybridApp;

impl HybridApp {
    /// Perform graceful shutdown.
    ///
    /// Dialogs are cancelled first so every completion still reaches a
    /// live renderer, then screens are destroyed top first.
    pub(super) fn shutdown(&mut self) {
        tracing::info!("Initiating graceful shutdown");

        self.modals.cancel_all();

        if let Some(mut screens) = self.screens.take() {
            screens.clear();
        }
        self.toolbar = None;
        self.shown_screen = None;
        self.shown_chrome = None;
        self.should_exit = true;

        tracing::info!("Graceful shutdown complete");
    }
}
