//! Hybrid configuration system.
//!
//! TOML-based configuration for the embedded web screen. All sections use
//! `serde(default)` so a partial (or empty) `config.toml` works.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use hybrid_config::{load_config, config_to_json};
//!
//! let config = load_config().expect("failed to load config");
//! println!("{}", config_to_json(&config));
//! ```

pub mod address;
pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use address::normalize_address;
pub use schema::{
    CachePolicy, DialogConfig, HybridConfig, LoadConfig, LoggingConfig, ScreenConfig,
    WebViewSettings, WindowConfig, CONFIG_SCHEMA_VERSION,
};

use hybrid_common::ConfigError;
use std::path::Path;

/// Load config from the platform default path, creating it if missing.
pub fn load_config() -> Result<HybridConfig, ConfigError> {
    toml_loader::load_default()
}

/// Load config from an explicit path (the `--config` override).
pub fn load_config_from(path: &Path) -> Result<HybridConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.to_path_buf()));
    }
    toml_loader::load_from_path(path)
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &HybridConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}
