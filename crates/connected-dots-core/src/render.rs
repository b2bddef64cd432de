//! Draw-command pipeline.
//!
//! Turns a [`DotLayout`] plus fill overrides and selection into an ordered
//! list of [`DrawCommand`]s. Backends replay the list front to back; later
//! commands paint over earlier ones.

use crate::config::DotsConfig;
use crate::fill::FillColors;
use crate::layout::DotLayout;
use kurbo::{Ellipse, Rect};
use peniko::Color;

/// Extra width added to right connectors so they overlap the next dot's left
/// connector instead of leaving a hairline seam.
pub const CONNECTOR_SEAM_OVERLAP: f64 = 0.5;

/// Which side of its dot a connector half sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConnectorSide {
    Left,
    Right,
}

/// A single drawing operation.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Filled connector half between a dot center and the middle of the gap.
    Connector {
        index: usize,
        side: ConnectorSide,
        rect: Rect,
        color: Color,
    },
    /// Filled dot body, an oval inscribed in `rect`.
    Dot {
        index: usize,
        rect: Rect,
        color: Color,
    },
    /// Stroked outline around the selected dot.
    SelectionOutline {
        index: usize,
        rect: Rect,
        color: Color,
        width: f64,
    },
    /// Text centered in `rect`.
    Label {
        index: usize,
        text: String,
        rect: Rect,
        color: Color,
        font_size: f64,
    },
}

impl DrawCommand {
    /// Index of the dot this command belongs to.
    pub fn index(&self) -> usize {
        match self {
            DrawCommand::Connector { index, .. }
            | DrawCommand::Dot { index, .. }
            | DrawCommand::SelectionOutline { index, .. }
            | DrawCommand::Label { index, .. } => *index,
        }
    }

    /// Bounding rect of the command.
    pub fn rect(&self) -> Rect {
        match self {
            DrawCommand::Connector { rect, .. }
            | DrawCommand::Dot { rect, .. }
            | DrawCommand::SelectionOutline { rect, .. }
            | DrawCommand::Label { rect, .. } => *rect,
        }
    }

    /// Ellipse for dot bodies and outlines.
    pub fn ellipse(&self) -> Option<Ellipse> {
        match self {
            DrawCommand::Dot { rect, .. } | DrawCommand::SelectionOutline { rect, .. } => {
                Some(Ellipse::from_rect(*rect))
            }
            _ => None,
        }
    }
}

/// Build the draw commands for one frame.
///
/// Per dot, in order: left connector, right connector, body, selection
/// outline, label. A connector half only carries the dot's color when the
/// neighbour it points to also has an override. Label color instead follows
/// the dot's own override.
pub fn render(
    layout: &DotLayout,
    config: &DotsConfig,
    fills: &FillColors,
    selected: Option<usize>,
) -> Vec<DrawCommand> {
    let count = layout.len();
    let half_gap = layout.half_gap();
    let half_line = config.connector_line_width / 2.0;
    let mut commands = Vec::with_capacity(count * 5);

    for (index, &rect) in layout.dots.iter().enumerate() {
        let color = fills.resolve(index, config.default_color);
        let center = rect.center();

        if index > 0 {
            let color = if fills.has_override(index - 1) {
                color
            } else {
                config.default_color
            };
            commands.push(DrawCommand::Connector {
                index,
                side: ConnectorSide::Left,
                rect: Rect::new(
                    rect.x0 - half_gap,
                    center.y - half_line,
                    center.x,
                    center.y + half_line,
                ),
                color,
            });
        }

        if index + 1 < count {
            let color = if fills.has_override(index + 1) {
                color
            } else {
                config.default_color
            };
            commands.push(DrawCommand::Connector {
                index,
                side: ConnectorSide::Right,
                rect: Rect::new(
                    center.x,
                    center.y - half_line,
                    rect.x1 + half_gap + CONNECTOR_SEAM_OVERLAP,
                    center.y + half_line,
                ),
                color,
            });
        }

        commands.push(DrawCommand::Dot { index, rect, color });

        if selected == Some(index) {
            commands.push(DrawCommand::SelectionOutline {
                index,
                rect,
                color: config.selection_outline_color,
                width: config.selection_outline_width,
            });
        }

        if config.show_text {
            let text_color = if fills.has_override(index) {
                config.filled_dot_text_color
            } else {
                config.text_color
            };
            commands.push(DrawCommand::Label {
                index,
                text: label_text(index, config.text_starting_number),
                rect,
                color: text_color,
                font_size: config.label_font_size,
            });
        }
    }

    commands
}

/// Label for the dot at `index`.
pub fn label_text(index: usize, starting_number: i64) -> String {
    (index as i64).saturating_add(starting_number).to_string()
}
