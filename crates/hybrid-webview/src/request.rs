//! Mapping load options onto request headers.

use hybrid_config::CachePolicy;
use wry::http::header::{HeaderMap, HeaderValue, CACHE_CONTROL};

/// Request headers expressing `policy`. The protocol default adds none.
pub fn cache_headers(policy: CachePolicy) -> HeaderMap {
    let mut headers = HeaderMap::new();
    let value = match policy {
        CachePolicy::ProtocolDefault => return headers,
        CachePolicy::ReloadIgnoringCache => "no-cache",
        CachePolicy::ReturnCacheElseLoad => "max-stale",
        CachePolicy::ReturnCacheOnly => "only-if-cached, max-stale",
    };
    headers.insert(CACHE_CONTROL, HeaderValue::from_static(value));
    headers
}
