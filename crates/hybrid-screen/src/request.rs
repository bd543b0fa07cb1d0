//! Page load requests.

use std::time::Duration;

use hybrid_config::{CachePolicy, LoadConfig};
use url::Url;

pub use hybrid_config::normalize_address;

/// Per-load cache and timeout options.
///
/// The default is protocol-default caching with no timeout override.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LoadOptions {
    pub cache_policy: CachePolicy,
    pub timeout: Option<Duration>,
}

impl LoadOptions {
    pub fn from_config(config: &LoadConfig) -> Self {
        Self {
            cache_policy: config.cache_policy,
            timeout: config.timeout(),
        }
    }
}

/// A fully resolved request handed to the renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadRequest {
    pub url: Url,
    pub options: LoadOptions,
}

impl LoadRequest {
    pub fn new(url: Url, options: LoadOptions) -> Self {
        Self { url, options }
    }
}
