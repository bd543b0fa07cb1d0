//! Screen behavior settings.

use serde::{Deserialize, Serialize};

/// Behavior of a single web screen.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScreenConfig {
    /// Page loaded when a screen is created without a target URL.
    pub default_url: String,
    /// Duration of the progress bar fade-out after a load completes.
    pub progress_fade_ms: u64,
    /// Height of the progress bar in logical pixels.
    pub progress_bar_height: u32,
    /// Consecutive content-process crash reloads allowed before giving up.
    /// `0` disables the cap.
    pub crash_reload_limit: u32,
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            default_url: "https://www.naver.com".into(),
            progress_fade_ms: 500,
            progress_bar_height: 3,
            crash_reload_limit: 5,
        }
    }
}

impl ScreenConfig {
    pub fn progress_fade(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.progress_fade_ms)
    }

    /// The crash reload cap, or `None` when unbounded.
    pub fn crash_reload_cap(&self) -> Option<u32> {
        (self.crash_reload_limit > 0).then_some(self.crash_reload_limit)
    }
}
