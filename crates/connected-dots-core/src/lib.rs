//! Connected Dots Core Library
//!
//! Platform-agnostic layout, draw-command pipeline and selection state for a
//! horizontal row of connected, selectable dots.

pub mod color;
pub mod config;
pub mod control;
pub mod fill;
pub mod layout;
pub mod render;
pub mod selection;

pub use color::SerializableColor;
pub use config::{ConfigError, ConfigResult, DotsConfig, Insets, SelectionType};
pub use control::{ConnectedDots, DotsEvent};
pub use fill::FillColors;
pub use layout::{DotLayout, compute_layout, tap_index};
pub use render::{ConnectorSide, DrawCommand, label_text, render};
pub use selection::{AllowAll, SelectionState, SelectionVeto, clamp_index, tap_candidate};
