//! Configuration schema types.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod dialog;
mod load;
mod logging;
mod screen;
mod webview;
mod window;

pub use dialog::*;
pub use load::*;
pub use logging::*;
pub use screen::*;
pub use webview::*;
pub use window::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct HybridConfig {
    pub screen: ScreenConfig,
    pub load: LoadConfig,
    pub dialog: DialogConfig,
    pub webview: WebViewSettings,
    pub window: WindowConfig,
    pub logging: LoggingConfig,
}
