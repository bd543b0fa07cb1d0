//! The rendering engine seam.

use hybrid_common::ScreenError;
use hybrid_config::WebViewSettings;
use serde::Serialize;
use url::Url;

use crate::events::EventSink;
use crate::request::LoadRequest;
use crate::subscription::PropertyHub;

/// Configuration a renderer is built with.
///
/// A screen opened from a new-window request receives an owned copy of
/// the configuration proposed by the renderer that raised the request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RendererConfig {
    pub user_agent: Option<String>,
    pub devtools: bool,
    /// Let the engine handle its own back/forward swipes inside the page.
    pub back_forward_gestures: bool,
    pub autoplay: bool,
    pub clipboard: bool,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self::from(&WebViewSettings::default())
    }
}

impl From<&WebViewSettings> for RendererConfig {
    fn from(settings: &WebViewSettings) -> Self {
        Self {
            user_agent: settings.user_agent.clone(),
            devtools: settings.devtools,
            back_forward_gestures: settings.back_forward_gestures,
            autoplay: settings.autoplay,
            clipboard: settings.clipboard,
        }
    }
}

/// A web rendering engine hosted by one screen.
///
/// Property changes (`progress`, `loading`, `url`) are published through
/// [`Renderer::properties`]. Everything else (navigation callbacks,
/// dialogs, new-window requests) is pushed into the event sink installed
/// with [`Renderer::set_event_sink`]; with no sink installed those
/// events are dropped. New-window requests never get a surface from the
/// renderer itself: the screen decides what to do with them.
pub trait Renderer {
    fn load(&mut self, request: LoadRequest) -> Result<(), ScreenError>;
    fn stop(&mut self) -> Result<(), ScreenError>;
    fn reload(&mut self) -> Result<(), ScreenError>;
    fn go_back(&mut self) -> Result<(), ScreenError>;
    fn go_forward(&mut self) -> Result<(), ScreenError>;

    fn can_go_back(&self) -> bool;
    fn can_go_forward(&self) -> bool;
    fn is_loading(&self) -> bool;
    fn current_url(&self) -> Option<Url>;

    fn properties(&self) -> &PropertyHub;
    fn set_event_sink(&mut self, sink: Option<EventSink>);

    fn configuration(&self) -> &RendererConfig;
}

/// Builds renderers for new screens.
pub trait RendererFactory {
    type Renderer: Renderer;

    fn create(&mut self, config: &RendererConfig) -> Result<Self::Renderer, ScreenError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_copies_webview_settings() {
        let settings = WebViewSettings {
            user_agent: Some("Hybrid/0.1".into()),
            devtools: true,
            back_forward_gestures: false,
            autoplay: true,
            clipboard: false,
        };
        let config = RendererConfig::from(&settings);
        assert_eq!(config.user_agent.as_deref(), Some("Hybrid/0.1"));
        assert!(config.devtools);
        assert!(!config.back_forward_gestures);
        assert!(config.autoplay);
        assert!(!config.clipboard);
    }
}
