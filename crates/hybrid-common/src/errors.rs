use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

/// Failures inside a single web screen. None of these reach the user;
/// the controller logs them and returns the UI to idle.
#[derive(Debug, thiserror::Error)]
pub enum ScreenError {
    #[error("invalid url: {0}")]
    InvalidUrl(String),

    #[error("renderer error: {0}")]
    Renderer(String),
}

#[derive(Debug, thiserror::Error)]
pub enum HybridError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Screen(#[from] ScreenError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("webview error: {0}")]
    WebView(String),

    #[error("window error: {0}")]
    Window(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let err = ConfigError::FileNotFound(PathBuf::from("/tmp/missing.toml"));
        assert_eq!(err.to_string(), "config file not found: /tmp/missing.toml");

        let err = ConfigError::ParseError("unexpected token".into());
        assert_eq!(err.to_string(), "config parse error: unexpected token");

        let err = ConfigError::ValidationError("window.width must be > 0".into());
        assert_eq!(
            err.to_string(),
            "config validation error: window.width must be > 0"
        );
    }

    #[test]
    fn screen_error_display() {
        let err = ScreenError::InvalidUrl("http://exa mple.com".into());
        assert_eq!(err.to_string(), "invalid url: http://exa mple.com");

        let err = ScreenError::Renderer("script evaluation failed".into());
        assert_eq!(err.to_string(), "renderer error: script evaluation failed");
    }

    #[test]
    fn hybrid_error_from_config() {
        let config_err = ConfigError::ParseError("bad toml".into());
        let err: HybridError = config_err.into();
        assert!(matches!(err, HybridError::Config(_)));
        assert!(err.to_string().contains("bad toml"));
    }

    #[test]
    fn hybrid_error_from_screen() {
        let err: HybridError = ScreenError::Renderer("gone".into()).into();
        assert!(matches!(err, HybridError::Screen(_)));
        assert_eq!(err.to_string(), "renderer error: gone");
    }

    #[test]
    fn hybrid_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: HybridError = io_err.into();
        assert!(matches!(err, HybridError::Io(_)));
        assert!(err.to_string().contains("file missing"));
    }

    #[test]
    fn hybrid_error_other_variants() {
        let err = HybridError::WebView("build failed".into());
        assert_eq!(err.to_string(), "webview error: build failed");

        let err = HybridError::Window("no display".into());
        assert_eq!(err.to_string(), "window error: no display");
    }
}
