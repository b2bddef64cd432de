//! Single-dot selection: tap policies, clamping and veto.

use crate::config::SelectionType;
use crate::control::ConnectedDots;

/// Predicate consulted before a selection is committed.
///
/// Returning `false` aborts the selection; state stays untouched and no
/// events are emitted.
pub trait SelectionVeto {
    /// Whether the dot at `index` (already clamped) may become selected.
    fn should_select(&self, dots: &ConnectedDots, index: usize) -> bool;
}

/// Veto that accepts every candidate.
#[derive(Debug, Clone, Copy, Default)]
pub struct AllowAll;

impl SelectionVeto for AllowAll {
    fn should_select(&self, _dots: &ConnectedDots, _index: usize) -> bool {
        true
    }
}

impl<F> SelectionVeto for F
where
    F: Fn(&ConnectedDots, usize) -> bool,
{
    fn should_select(&self, dots: &ConnectedDots, index: usize) -> bool {
        self(dots, index)
    }
}

/// Candidate index proposed by a tap, before clamping and veto.
///
/// `None` means the tap does nothing under this policy.
pub fn tap_candidate(
    selection_type: SelectionType,
    tapped: i64,
    selected: Option<usize>,
) -> Option<i64> {
    match selection_type {
        SelectionType::Direct => Some(tapped),
        SelectionType::Progressive => match selected {
            None => Some(0),
            Some(current) => {
                let current = current as i64;
                if tapped > current {
                    Some(current + 1)
                } else if tapped < current {
                    Some(current - 1)
                } else {
                    None
                }
            }
        },
        SelectionType::None => None,
    }
}

/// Clamp a candidate into `[0, count)`. `None` when there are no dots.
pub fn clamp_index(candidate: i64, count: usize) -> Option<usize> {
    if count == 0 {
        return None;
    }
    if candidate < 0 {
        Some(0)
    } else {
        Some((candidate as u64).min(count as u64 - 1) as usize)
    }
}

/// Holds the currently selected dot, if any.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectionState {
    selected: Option<usize>,
}

impl SelectionState {
    /// Create a state with nothing selected.
    pub fn new() -> Self {
        Self::default()
    }

    /// The selected dot.
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Overwrite the selection.
    pub(crate) fn commit(&mut self, selected: Option<usize>) {
        self.selected = selected;
    }
}
