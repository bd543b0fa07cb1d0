//! Window title management: reflects the top screen's host.

use super::core::HybridApp;

/// Title for the window: the page host when known, else the app title.
pub(super) fn window_title(host: Option<&str>, fallback: &str) -> String {
    match host {
        Some(host) if !host.is_empty() => host.to_string(),
        _ => fallback.to_string(),
    }
}

impl HybridApp {
    /// Update the window title to the top screen's title.
    pub(super) fn update_window_title(&mut self) {
        let Some(ref window) = self.window else {
            return;
        };

        let host = self
            .screens
            .as_ref()
            .and_then(|s| s.top())
            .and_then(|top| top.chrome().title.as_deref());
        let title = window_title(host, &self.config.window.title);

        if self.shown_title.as_deref() != Some(title.as_str()) {
            window.set_title(&title);
            self.shown_title = Some(title);
        }
    }
}
