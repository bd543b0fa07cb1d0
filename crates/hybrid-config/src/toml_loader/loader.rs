//! Reading `config.toml`.

use std::path::Path;

use hybrid_common::ConfigError;
use tracing::{info, warn};

use crate::schema::HybridConfig;
use crate::validation;

use super::paths::{create_default_config, default_config_path};

/// Parse the file at `path`.
///
/// Absent keys take their defaults. A file that parses but fails
/// validation is ignored as a whole: the screen starts on the built-in
/// defaults and the problems are logged.
pub fn load_from_path(path: &Path) -> Result<HybridConfig, ConfigError> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::ParseError(format!("cannot read {}: {e}", path.display())))?;

    let config: HybridConfig = toml::from_str(&text)
        .map_err(|e| ConfigError::ParseError(format!("{}: {e}", path.display())))?;

    match validation::validate(&config) {
        Ok(()) => {
            info!(path = %path.display(), url = %config.screen.default_url, "config loaded");
            Ok(config)
        }
        Err(e) => {
            warn!(path = %path.display(), "{e}; using built-in defaults");
            Ok(HybridConfig::default())
        }
    }
}

/// Load `config.toml` from the platform config directory, writing the
/// commented starter file first if there is none.
pub fn load_default() -> Result<HybridConfig, ConfigError> {
    let path = default_config_path()?;
    if path.exists() {
        return load_from_path(&path);
    }
    create_default_config(&path)?;
    Ok(HybridConfig::default())
}
