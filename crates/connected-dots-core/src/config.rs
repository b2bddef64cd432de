//! Configuration for the connected dots control.

use crate::color::{DARK_GRAY, LIGHT_GRAY, WHITE, serde_color};
use peniko::Color;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("Dot radius must be positive, got {0}")]
    DotRadius(f64),
    #[error("Connector line width must be positive, got {0}")]
    ConnectorLineWidth(f64),
    #[error("Selection outline width must be non-negative, got {0}")]
    SelectionOutlineWidth(f64),
    #[error("Label font size must be positive, got {0}")]
    LabelFontSize(f64),
    #[error("Insets must be finite: {0:?}")]
    Insets(Insets),
}

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// How a tap on the control turns into a selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SelectionType {
    /// Select the tapped dot.
    #[default]
    Direct,
    /// Step one dot towards the tap, starting from the first dot.
    Progressive,
    /// Taps never select.
    None,
}

/// Content insets. Only `left` and `right` take part in layout.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Insets {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl Insets {
    /// Insets with all four sides set to zero.
    pub const ZERO: Insets = Insets {
        left: 0.0,
        right: 0.0,
        top: 0.0,
        bottom: 0.0,
    };

    /// Create insets from the four sides.
    pub fn new(left: f64, right: f64, top: f64, bottom: f64) -> Self {
        Self {
            left,
            right,
            top,
            bottom,
        }
    }

    /// Total horizontal inset.
    pub fn horizontal(&self) -> f64 {
        self.left + self.right
    }

    fn is_finite(&self) -> bool {
        self.left.is_finite()
            && self.right.is_finite()
            && self.top.is_finite()
            && self.bottom.is_finite()
    }
}

/// Appearance and behaviour of the control.
///
/// Immutable during a layout/render pass; the host swaps it between passes
/// through [`crate::ConnectedDots::set_config`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DotsConfig {
    /// Number of dots to draw.
    pub number_of_dots: usize,
    /// Dot radius.
    pub dot_radius: f64,
    /// Color of dots and connectors without an override.
    #[serde(with = "serde_color")]
    pub default_color: Color,
    /// Outline color of the selected dot.
    #[serde(with = "serde_color")]
    pub selection_outline_color: Color,
    /// Outline width of the selected dot. Also reserved as padding at both ends of the row.
    pub selection_outline_width: f64,
    /// Whether to draw numeric labels.
    pub show_text: bool,
    /// Label color on a dot without an override.
    #[serde(with = "serde_color")]
    pub text_color: Color,
    /// Label color on a dot with an override.
    #[serde(with = "serde_color")]
    pub filled_dot_text_color: Color,
    /// Number shown on the first dot.
    pub text_starting_number: i64,
    /// Label font size.
    pub label_font_size: f64,
    /// Thickness of the connectors.
    pub connector_line_width: f64,
    /// Content insets.
    pub insets: Insets,
    /// Tap policy.
    pub selection_type: SelectionType,
}

impl Default for DotsConfig {
    fn default() -> Self {
        Self {
            number_of_dots: 6,
            dot_radius: 10.0,
            default_color: LIGHT_GRAY,
            selection_outline_color: DARK_GRAY,
            selection_outline_width: 1.0,
            show_text: true,
            text_color: DARK_GRAY,
            filled_dot_text_color: WHITE,
            text_starting_number: 0,
            label_font_size: 16.0,
            connector_line_width: 4.0,
            insets: Insets::ZERO,
            selection_type: SelectionType::Direct,
        }
    }
}

impl DotsConfig {
    /// Create a configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Dot diameter.
    pub fn dot_diameter(&self) -> f64 {
        self.dot_radius * 2.0
    }

    /// Horizontal space left for dots and gaps in a container of the given width.
    pub fn available_width(&self, container_width: f64) -> f64 {
        container_width - self.insets.horizontal() - self.selection_outline_width * 2.0
    }

    /// Check the invariants every layout and render pass relies on.
    pub fn validate(&self) -> ConfigResult<()> {
        if !(self.dot_radius.is_finite() && self.dot_radius > 0.0) {
            return Err(ConfigError::DotRadius(self.dot_radius));
        }
        if !(self.connector_line_width.is_finite() && self.connector_line_width > 0.0) {
            return Err(ConfigError::ConnectorLineWidth(self.connector_line_width));
        }
        if !(self.selection_outline_width.is_finite() && self.selection_outline_width >= 0.0) {
            return Err(ConfigError::SelectionOutlineWidth(
                self.selection_outline_width,
            ));
        }
        if !(self.label_font_size.is_finite() && self.label_font_size > 0.0) {
            return Err(ConfigError::LabelFontSize(self.label_font_size));
        }
        if !self.insets.is_finite() {
            return Err(ConfigError::Insets(self.insets));
        }
        Ok(())
    }

    /// Set the number of dots.
    pub fn with_number_of_dots(mut self, count: usize) -> Self {
        self.number_of_dots = count;
        self
    }

    /// Set the dot radius.
    pub fn with_dot_radius(mut self, radius: f64) -> Self {
        self.dot_radius = radius;
        self
    }

    /// Set the default dot and connector color.
    pub fn with_default_color(mut self, color: Color) -> Self {
        self.default_color = color;
        self
    }

    /// Set the selection outline color and width.
    pub fn with_selection_outline(mut self, color: Color, width: f64) -> Self {
        self.selection_outline_color = color;
        self.selection_outline_width = width;
        self
    }

    /// Show or hide labels.
    pub fn with_show_text(mut self, show: bool) -> Self {
        self.show_text = show;
        self
    }

    /// Set the label colors for plain and filled dots.
    pub fn with_text_colors(mut self, text: Color, filled_dot_text: Color) -> Self {
        self.text_color = text;
        self.filled_dot_text_color = filled_dot_text;
        self
    }

    /// Set the number shown on the first dot.
    pub fn with_text_starting_number(mut self, start: i64) -> Self {
        self.text_starting_number = start;
        self
    }

    /// Set the label font size.
    pub fn with_label_font_size(mut self, size: f64) -> Self {
        self.label_font_size = size;
        self
    }

    /// Set the connector thickness.
    pub fn with_connector_line_width(mut self, width: f64) -> Self {
        self.connector_line_width = width;
        self
    }

    /// Set the content insets.
    pub fn with_insets(mut self, insets: Insets) -> Self {
        self.insets = insets;
        self
    }

    /// Set the tap policy.
    pub fn with_selection_type(mut self, selection_type: SelectionType) -> Self {
        self.selection_type = selection_type;
        self
    }
}
