//! Per-dot fill color overrides.

use peniko::Color;
use std::collections::HashMap;

/// Sparse map from dot index to fill color.
///
/// An absent key means the dot uses the configured default color. Keys at or
/// beyond the current dot count are tolerated and never read by the render
/// pipeline; [`FillColors::retain_below`] prunes them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FillColors {
    colors: HashMap<usize, Color>,
}

impl FillColors {
    /// Create an empty override map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the fill color of a dot.
    pub fn set(&mut self, index: usize, color: Color) {
        self.colors.insert(index, color);
    }

    /// Remove the override of a dot. Returns the removed color.
    pub fn reset(&mut self, index: usize) -> Option<Color> {
        self.colors.remove(&index)
    }

    /// Remove every override.
    pub fn reset_all(&mut self) {
        self.colors.clear();
    }

    /// The override of a dot, if any.
    pub fn get(&self, index: usize) -> Option<Color> {
        self.colors.get(&index).copied()
    }

    /// Whether a dot has an override.
    pub fn has_override(&self, index: usize) -> bool {
        self.colors.contains_key(&index)
    }

    /// The override of a dot, falling back to `default`.
    pub fn resolve(&self, index: usize, default: Color) -> Color {
        self.get(index).unwrap_or(default)
    }

    /// Drop overrides for indices `>= count`.
    pub fn retain_below(&mut self, count: usize) {
        self.colors.retain(|&index, _| index < count);
    }

    /// Number of overrides.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Whether there are no overrides.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Iterate over `(index, color)` pairs in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, Color)> + '_ {
        self.colors.iter().map(|(&index, &color)| (index, color))
    }
}
