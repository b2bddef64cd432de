//! Replay draw commands onto an egui painter.

use connected_dots_core::DrawCommand;
use egui::{Align2, CornerRadius, FontId, Painter, Pos2, Stroke};

use crate::convert::{to_color32, to_pos, to_rect};

/// Paint `commands` in order with their local coordinates offset by `origin`.
pub fn paint_commands(painter: &Painter, origin: Pos2, commands: &[DrawCommand]) {
    for command in commands {
        match command {
            DrawCommand::Connector { rect, color, .. } => {
                painter.rect_filled(to_rect(*rect, origin), CornerRadius::ZERO, to_color32(*color));
            }
            DrawCommand::Dot { color, .. } => {
                if let Some(ellipse) = command.ellipse() {
                    painter.circle_filled(
                        to_pos(ellipse.center(), origin),
                        ellipse.radii().x as f32,
                        to_color32(*color),
                    );
                }
            }
            DrawCommand::SelectionOutline { color, width, .. } => {
                if *width <= 0.0 {
                    continue;
                }
                if let Some(ellipse) = command.ellipse() {
                    painter.circle_stroke(
                        to_pos(ellipse.center(), origin),
                        ellipse.radii().x as f32,
                        Stroke::new(*width as f32, to_color32(*color)),
                    );
                }
            }
            DrawCommand::Label {
                text,
                rect,
                color,
                font_size,
                ..
            } => {
                painter.text(
                    to_rect(*rect, origin).center(),
                    Align2::CENTER_CENTER,
                    text,
                    FontId::proportional(*font_size as f32),
                    to_color32(*color),
                );
            }
        }
    }
}
