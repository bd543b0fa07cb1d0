//! Page and toolbar placement inside the window.

use hybrid_common::Rect;
use hybrid_webview::rect_to_wry;

use super::core::HybridApp;

/// Split a window of `width` x `height` into the page area and the
/// toolbar strip below it. While a modal is open the toolbar surface
/// covers the whole window.
pub(super) fn split_window(
    width: f64,
    height: f64,
    toolbar_height: f64,
    modal_open: bool,
) -> (Rect, Rect) {
    let window = Rect::new(0.0, 0.0, width, height);
    let (page, toolbar) = window.split_bottom(toolbar_height);
    if modal_open {
        (page, window)
    } else {
        (page, toolbar)
    }
}

impl HybridApp {
    /// Current page and toolbar rects, in logical pixels.
    pub(super) fn layout_rects(&self) -> Option<(Rect, Rect)> {
        let window = self.window.as_ref()?;
        let size = window.inner_size().to_logical::<f64>(window.scale_factor());
        Some(split_window(
            size.width,
            size.height,
            f64::from(self.config.window.toolbar_height),
            self.modals.is_showing(),
        ))
    }

    /// Push the current layout to the toolbar and every screen.
    pub(super) fn sync_bounds(&mut self) {
        let Some((page, bar)) = self.layout_rects() else {
            return;
        };
        let page = rect_to_wry(&page);

        if let Some(ref toolbar) = self.toolbar {
            if let Err(e) = toolbar.set_bounds(rect_to_wry(&bar)) {
                tracing::warn!("Failed to resize toolbar: {e}");
            }
        }
        if let Some(ref mut screens) = self.screens {
            screens.factory_mut().set_bounds(page);
            for screen in screens.screens() {
                if let Err(e) = screen.renderer().set_bounds(page) {
                    tracing::warn!(screen = screen.id().short(), "Failed to resize page: {e}");
                }
            }
        }
    }
}
