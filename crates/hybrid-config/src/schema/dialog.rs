//! Labels used when page dialogs are shown as native modals.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DialogConfig {
    /// Modal title. Empty by default; the page message carries the text.
    pub title: String,
    pub confirm_label: String,
    pub cancel_label: String,
}

impl Default for DialogConfig {
    fn default() -> Self {
        Self {
            title: String::new(),
            confirm_label: "OK".into(),
            cancel_label: "Cancel".into(),
        }
    }
}
