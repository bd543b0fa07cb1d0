//! Coordinate conversion between layout rects and wry rects.

use hybrid_common::Rect;

/// Convert a layout `Rect` (f64 logical coords) to a wry `Rect`.
pub fn rect_to_wry(rect: &Rect) -> wry::Rect {
    wry::Rect {
        position: wry::dpi::Position::Logical(wry::dpi::LogicalPosition::new(rect.x, rect.y)),
        size: wry::dpi::Size::Logical(wry::dpi::LogicalSize::new(rect.width, rect.height)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_converts_to_logical_wry_rect() {
        let wry_rect = rect_to_wry(&Rect::new(0.0, 816.0, 430.0, 44.0));

        match wry_rect.position {
            wry::dpi::Position::Logical(pos) => {
                assert!((pos.x - 0.0).abs() < f64::EPSILON);
                assert!((pos.y - 816.0).abs() < f64::EPSILON);
            }
            _ => panic!("Expected logical position"),
        }

        match wry_rect.size {
            wry::dpi::Size::Logical(size) => {
                assert!((size.width - 430.0).abs() < f64::EPSILON);
                assert!((size.height - 44.0).abs() < f64::EPSILON);
            }
            _ => panic!("Expected logical size"),
        }
    }
}
