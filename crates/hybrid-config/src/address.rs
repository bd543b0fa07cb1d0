//! Address normalization shared by config validation and page loads.

use hybrid_common::ScreenError;
use url::Url;

/// Turn a user- or config-supplied address into a URL.
///
/// Anything that does not start with `http` (case-insensitive) is taken
/// to be a bare host and gets `http://` in front. Callers that want TLS
/// must say `https://` themselves.
pub fn normalize_address(address: &str) -> Result<Url, ScreenError> {
    let address = address.trim();
    if address.is_empty() {
        return Err(ScreenError::InvalidUrl(String::new()));
    }

    let candidate = if address.to_ascii_lowercase().starts_with("http") {
        address.to_string()
    } else {
        format!("http://{address}")
    };

    Url::parse(&candidate).map_err(|e| ScreenError::InvalidUrl(format!("{candidate}: {e}")))
}
