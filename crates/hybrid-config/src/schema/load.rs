//! Default options applied to every page load.

use serde::{Deserialize, Serialize};

/// Request cache policy for a page load.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum CachePolicy {
    /// Whatever the HTTP caching headers say.
    #[default]
    ProtocolDefault,
    /// Always go to the network.
    ReloadIgnoringCache,
    /// Use cached data regardless of age, load if missing.
    ReturnCacheElseLoad,
    /// Use cached data only; never touch the network.
    ReturnCacheOnly,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoadConfig {
    pub cache_policy: CachePolicy,
    /// Request timeout in seconds. `0` leaves the platform default alone.
    pub timeout_secs: u64,
}

impl LoadConfig {
    pub fn timeout(&self) -> Option<std::time::Duration> {
        (self.timeout_secs > 0).then(|| std::time::Duration::from_secs(self.timeout_secs))
    }
}
