//! Renderer settings handed to every screen.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WebViewSettings {
    /// Custom user agent string.
    pub user_agent: Option<String>,
    /// Enable dev tools (always on in debug builds).
    pub devtools: bool,
    /// Allow the renderer's own back/forward swipe gestures.
    pub back_forward_gestures: bool,
    pub autoplay: bool,
    pub clipboard: bool,
}

impl Default for WebViewSettings {
    fn default() -> Self {
        Self {
            user_agent: None,
            devtools: cfg!(debug_assertions),
            back_forward_gestures: true,
            autoplay: false,
            clipboard: true,
        }
    }
}
