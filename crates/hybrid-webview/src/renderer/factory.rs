use std::sync::Arc;

use hybrid_common::ScreenError;
use hybrid_screen::{RendererConfig, RendererFactory};
use wry::raw_window_handle;

use super::WryRenderer;

/// Builds renderers as children of one window, all sharing the page area.
pub struct WryRendererFactory<W> {
    window: Arc<W>,
    bounds: wry::Rect,
}

impl<W: raw_window_handle::HasWindowHandle> WryRendererFactory<W> {
    pub fn new(window: Arc<W>, bounds: wry::Rect) -> Self {
        Self { window, bounds }
    }

    /// Bounds used for renderers created from now on.
    pub fn set_bounds(&mut self, bounds: wry::Rect) {
        self.bounds = bounds;
    }
}

impl<W: raw_window_handle::HasWindowHandle> RendererFactory for WryRendererFactory<W> {
    type Renderer = WryRenderer;

    fn create(&mut self, config: &RendererConfig) -> Result<WryRenderer, ScreenError> {
        WryRenderer::build(&*self.window, self.bounds, config.clone())
            .map_err(|e| ScreenError::Renderer(e.to_string()))
    }
}
