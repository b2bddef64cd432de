//! Geometric placement of dots inside a container.

use crate::config::DotsConfig;
use kurbo::{Point, Rect, Size};

/// Dot rectangles and the uniform gap between neighbouring dots.
///
/// Derived on every pass from the configuration and container size; never stored.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DotLayout {
    /// One rect per dot, left to right.
    pub dots: Vec<Rect>,
    /// Distance between the right edge of a dot and the left edge of the next.
    /// Negative when the dots do not fit, in which case they overlap.
    pub gap: f64,
}

impl DotLayout {
    /// Number of dots laid out.
    pub fn len(&self) -> usize {
        self.dots.len()
    }

    /// Whether there are no dots.
    pub fn is_empty(&self) -> bool {
        self.dots.is_empty()
    }

    /// Half of the gap; each connector extends this far outside its dot.
    pub fn half_gap(&self) -> f64 {
        self.gap / 2.0
    }
}

/// Lay out `config.number_of_dots` dots in a container of the given size.
///
/// Dots are vertically centered and spread so the first touches the left
/// inset (plus outline padding) and the last touches the right one.
pub fn compute_layout(container: Size, config: &DotsConfig) -> DotLayout {
    let count = config.number_of_dots;
    let diameter = config.dot_diameter();

    let raw_gap = config.available_width(container.width) - diameter * count as f64;
    let gap = if count > 1 {
        raw_gap / (count - 1) as f64
    } else {
        raw_gap
    };

    let origin = Point::new(
        config.insets.left + config.selection_outline_width,
        (container.height - diameter) / 2.0,
    );
    let step = diameter + gap;
    let dots = (0..count)
        .map(|i| {
            let x = origin.x + step * i as f64;
            Rect::from_origin_size(Point::new(x, origin.y), Size::new(diameter, diameter))
        })
        .collect();

    DotLayout { dots, gap }
}

/// Map a pointer x coordinate (local to the control) to a raw dot index.
///
/// The row is split into `number_of_dots` equal tap columns. The result is not
/// clamped: taps left of the first column are negative, taps past the last
/// column are `>= number_of_dots`. Returns `None` when there are no dots or
/// the columns have no usable width.
///
/// `x` is measured from the control's left edge; the left inset is not
/// subtracted, so columns start at 0 even when dots are inset. The division is
/// floored, so any negative `x` maps to a negative index rather than truncating
/// to column 0. Under the progressive policy with dot 0 selected, such a tap
/// re-commits dot 0 and notifies.
pub fn tap_index(x: f64, container_width: f64, config: &DotsConfig) -> Option<i64> {
    if config.number_of_dots == 0 {
        return None;
    }
    let tap_width = config.available_width(container_width) / config.number_of_dots as f64;
    if !(tap_width.is_finite() && tap_width > 0.0) || !x.is_finite() {
        return None;
    }
    Some((x / tap_width).floor() as i64)
}
