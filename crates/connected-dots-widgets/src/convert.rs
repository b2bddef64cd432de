//! Conversions between kurbo/peniko and egui types.

use egui::{Color32, Pos2, Rect, Vec2, pos2};
use peniko::Color;

/// Convert a peniko color to an egui color.
pub fn to_color32(color: Color) -> Color32 {
    let rgba = color.to_rgba8();
    Color32::from_rgba_unmultiplied(rgba.r, rgba.g, rgba.b, rgba.a)
}

/// Convert an egui color to a peniko color.
pub fn from_color32(color: Color32) -> Color {
    let [r, g, b, a] = color.to_srgba_unmultiplied();
    Color::from_rgba8(r, g, b, a)
}

/// Convert a rect local to the control into screen space.
pub fn to_rect(rect: kurbo::Rect, origin: Pos2) -> Rect {
    Rect::from_min_max(
        pos2(origin.x + rect.x0 as f32, origin.y + rect.y0 as f32),
        pos2(origin.x + rect.x1 as f32, origin.y + rect.y1 as f32),
    )
}

/// Convert a point local to the control into screen space.
pub fn to_pos(point: kurbo::Point, origin: Pos2) -> Pos2 {
    pos2(origin.x + point.x as f32, origin.y + point.y as f32)
}

/// Convert an offset from the control's top-left corner into a local point.
pub fn to_point(offset: Vec2) -> kurbo::Point {
    kurbo::Point::new(offset.x as f64, offset.y as f64)
}

/// Convert an egui size into a kurbo size.
pub fn to_size(size: Vec2) -> kurbo::Size {
    kurbo::Size::new(size.x as f64, size.y as f64)
}
