//! Per-screen settings derived from the loaded configuration.

use std::time::Duration;

use hybrid_config::{DialogConfig, HybridConfig};

use crate::request::LoadOptions;

#[derive(Debug, Clone)]
pub struct ScreenSettings {
    /// Address loaded when a screen has no target URL.
    pub default_address: String,
    pub load_options: LoadOptions,
    pub progress_fade: Duration,
    /// `None` reloads after every crash.
    pub crash_reload_cap: Option<u32>,
    pub dialog: DialogConfig,
}

impl ScreenSettings {
    pub fn from_config(config: &HybridConfig) -> Self {
        Self {
            default_address: config.screen.default_url.clone(),
            load_options: LoadOptions::from_config(&config.load),
            progress_fade: config.screen.progress_fade(),
            crash_reload_cap: config.screen.crash_reload_cap(),
            dialog: config.dialog.clone(),
        }
    }
}

impl Default for ScreenSettings {
    fn default() -> Self {
        Self::from_config(&HybridConfig::default())
    }
}
