//! Color constants and serde support for `peniko::Color`.

use peniko::Color;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Light gray used for unfilled dots and connectors.
pub const LIGHT_GRAY: Color = Color::from_rgba8(170, 170, 170, 255);
/// Dark gray used for the selection outline and label text.
pub const DARK_GRAY: Color = Color::from_rgba8(85, 85, 85, 255);
/// Label text color on top of a filled dot.
pub const WHITE: Color = Color::from_rgba8(255, 255, 255, 255);

/// Serializable color representation (RGBA8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerializableColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl SerializableColor {
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

impl From<Color> for SerializableColor {
    fn from(color: Color) -> Self {
        let rgba = color.to_rgba8();
        Self {
            r: rgba.r,
            g: rgba.g,
            b: rgba.b,
            a: rgba.a,
        }
    }
}

impl From<SerializableColor> for Color {
    fn from(color: SerializableColor) -> Self {
        Color::from_rgba8(color.r, color.g, color.b, color.a)
    }
}

/// `#[serde(with = "crate::color::serde_color")]` adapter for `Color` fields.
pub mod serde_color {
    use super::*;

    pub fn serialize<S: Serializer>(color: &Color, serializer: S) -> Result<S::Ok, S::Error> {
        SerializableColor::from(*color).serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Color, D::Error> {
        SerializableColor::deserialize(deserializer).map(Color::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_color() {
        let c = SerializableColor::from(Color::from_rgba8(10, 20, 30, 40));
        assert_eq!(c, SerializableColor::new(10, 20, 30, 40));
    }

    #[test]
    fn test_palette_is_opaque() {
        for color in [LIGHT_GRAY, DARK_GRAY, WHITE] {
            assert_eq!(color.to_rgba8().a, 255);
        }
    }
}
