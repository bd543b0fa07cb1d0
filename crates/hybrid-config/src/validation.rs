//! Configuration validation.
//!
//! Checks numeric ranges and that the default page is an address a
//! screen can load.

use crate::address::normalize_address;
use crate::schema::HybridConfig;
use hybrid_common::ConfigError;

/// Upper bound for the progress fade, in milliseconds.
const MAX_FADE_MS: u64 = 10_000;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &HybridConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    if let Err(e) = normalize_address(&config.screen.default_url) {
        errors.push(format!("screen.default_url: {e}"));
    }
    validate_range_u64(
        &mut errors,
        "screen.progress_fade_ms",
        config.screen.progress_fade_ms,
        0,
        MAX_FADE_MS,
    );
    validate_range(
        &mut errors,
        "screen.progress_bar_height",
        config.screen.progress_bar_height,
        1,
        20,
    );

    validate_range(&mut errors, "window.width", config.window.width, 1, 16_384);
    validate_range(&mut errors, "window.height", config.window.height, 1, 16_384);
    if config.window.toolbar_height >= config.window.height {
        errors.push(format!(
            "window.toolbar_height = {} leaves no room for the page (window.height = {})",
            config.window.toolbar_height, config.window.height
        ));
    }

    if config.dialog.confirm_label.trim().is_empty() {
        errors.push("dialog.confirm_label must not be empty".into());
    }
    if config.dialog.cancel_label.trim().is_empty() {
        errors.push("dialog.cancel_label must not be empty".into());
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}

fn validate_range(errors: &mut Vec<String>, name: &str, value: u32, min: u32, max: u32) {
    if value < min || value > max {
        errors.push(format!("{name} = {value} is out of range [{min}, {max}]"));
    }
}

fn validate_range_u64(errors: &mut Vec<String>, name: &str, value: u64, min: u64, max: u64) {
    if value < min || value > max {
        errors.push(format!("{name} = {value} is out of range [{min}, {max}]"));
    }
}
