//! Window configuration types.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Title shown until the first page reports a host.
    pub title: String,
    pub width: u32,
    pub height: u32,
    /// Height of the back/forward toolbar in logical pixels.
    pub toolbar_height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Hybrid".into(),
            width: 430,
            height: 860,
            toolbar_height: 44,
        }
    }
}
