//! egui host for the connected dots control.
//!
//! - **DotsView**: widget that sizes the control, forwards presses and paints it
//! - **Paint**: replays core draw commands on an `egui::Painter`
//! - **Convert**: kurbo/peniko to egui conversions

pub mod convert;
pub mod dots_view;
pub mod paint;

pub use convert::{from_color32, to_color32, to_point, to_pos, to_rect, to_size};
pub use dots_view::{DotsView, default_height};
pub use paint::paint_commands;

