//! Window creation, toolbar setup and the root screen.

use std::sync::Arc;

use winit::event_loop::ActiveEventLoop;
use winit::window::WindowAttributes;

use hybrid_common::HybridError;
use hybrid_screen::{GesturePolicy, RendererConfig, ScreenSeed, ScreenSettings, ScreenStack};
use hybrid_webview::{rect_to_wry, Toolbar, WryRendererFactory};

use super::core::HybridApp;

impl HybridApp {
    /// Create the window, the toolbar and the root screen.
    pub(super) fn initialize_window(
        &mut self,
        event_loop: &ActiveEventLoop,
    ) -> Result<(), HybridError> {
        let attrs = WindowAttributes::default()
            .with_title(self.config.window.title.as_str())
            .with_inner_size(winit::dpi::LogicalSize::new(
                self.config.window.width,
                self.config.window.height,
            ));

        let window = event_loop
            .create_window(attrs)
            .map(Arc::new)
            .map_err(|e| HybridError::Window(e.to_string()))?;
        self.window = Some(Arc::clone(&window));

        let (page, bar) = self
            .layout_rects()
            .ok_or_else(|| HybridError::Window("window has no size".into()))?;

        let toolbar = Toolbar::build(
            &*window,
            rect_to_wry(&bar),
            self.config.screen.progress_bar_height,
        )
        .map_err(|e| HybridError::WebView(e.to_string()))?;
        self.toolbar = Some(toolbar);

        let gesture: Arc<dyn GesturePolicy> = self.gesture.clone();
        let mut screens = ScreenStack::new(
            WryRendererFactory::new(window, rect_to_wry(&page)),
            ScreenSettings::from_config(&self.config),
            RendererConfig::from(&self.config.webview),
            gesture,
        );

        let seed = match self.initial_url.take() {
            Some(url) => ScreenSeed::with_url(url),
            None => ScreenSeed::default(),
        };
        screens.push_screen(seed)?;
        self.screens = Some(screens);

        tracing::info!("Window initialized");
        Ok(())
    }
}
