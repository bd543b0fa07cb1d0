use serde::{Deserialize, Serialize};

/// Logical-pixel rectangle used for laying out the page surface and
/// the toolbar inside the window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Split off a strip of `height` at the bottom. Returns `(top, bottom)`.
    /// The strip is clamped to the rect's own height.
    pub fn split_bottom(&self, height: f64) -> (Rect, Rect) {
        let strip = height.clamp(0.0, self.height);
        let top = Rect::new(self.x, self.y, self.width, self.height - strip);
        let bottom = Rect::new(self.x, self.y + self.height - strip, self.width, strip);
        (top, bottom)
    }
}
