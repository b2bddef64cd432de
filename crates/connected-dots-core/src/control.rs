//! The connected dots control: owns configuration, fill overrides and selection.

use crate::config::{ConfigResult, DotsConfig};
use crate::fill::FillColors;
use crate::layout::{DotLayout, compute_layout, tap_index};
use crate::render::{DrawCommand, render};
use crate::selection::{AllowAll, SelectionState, SelectionVeto, clamp_index, tap_candidate};
use kurbo::{Point, Size};
use peniko::Color;

/// Notification for the host, drained with [`ConnectedDots::drain_events`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DotsEvent {
    /// State changed; the host should schedule a render pass.
    RepaintRequested,
    /// A selection was committed (including deselection).
    SelectionChanged(Option<usize>),
}

/// A row of selectable, connected dots.
///
/// Framework agnostic: the host supplies the container size when rendering,
/// forwards pointer-down positions and drains [`DotsEvent`]s afterwards.
pub struct ConnectedDots {
    config: DotsConfig,
    fills: FillColors,
    selection: SelectionState,
    veto: Box<dyn SelectionVeto>,
    events: Vec<DotsEvent>,
}

impl std::fmt::Debug for ConnectedDots {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConnectedDots")
            .field("config", &self.config)
            .field("fills", &self.fills)
            .field("selection", &self.selection)
            .field("events", &self.events)
            .finish_non_exhaustive()
    }
}

impl Default for ConnectedDots {
    fn default() -> Self {
        Self::with_valid_config(DotsConfig::default())
    }
}

impl ConnectedDots {
    /// Create a control with the given configuration.
    pub fn new(config: DotsConfig) -> ConfigResult<Self> {
        config.validate()?;
        Ok(Self::with_valid_config(config))
    }

    fn with_valid_config(config: DotsConfig) -> Self {
        Self {
            config,
            fills: FillColors::new(),
            selection: SelectionState::new(),
            veto: Box::new(AllowAll),
            events: Vec::new(),
        }
    }

    /// Current configuration.
    pub fn config(&self) -> &DotsConfig {
        &self.config
    }

    /// Replace the configuration.
    ///
    /// Invalid configurations are rejected and the current one is kept. A
    /// selection past the new dot count is clamped to the last dot.
    pub fn set_config(&mut self, config: DotsConfig) -> ConfigResult<()> {
        if let Err(err) = config.validate() {
            log::warn!("Rejected dots config: {err}");
            return Err(err);
        }
        log::debug!(
            "Dots config updated: {} dots, {:?} selection",
            config.number_of_dots,
            config.selection_type
        );
        self.config = config;
        self.events.push(DotsEvent::RepaintRequested);

        if let Some(selected) = self.selection.selected() {
            if selected >= self.config.number_of_dots {
                let clamped = clamp_index(selected as i64, self.config.number_of_dots);
                self.commit(clamped);
            }
        }
        Ok(())
    }

    /// Fill overrides.
    pub fn fill_colors(&self) -> &FillColors {
        &self.fills
    }

    /// Set the fill color of the dot at `index`.
    pub fn set_fill_color(&mut self, color: Color, index: usize) {
        self.fills.set(index, color);
        self.events.push(DotsEvent::RepaintRequested);
    }

    /// Remove the fill override of the dot at `index`.
    pub fn reset_fill_color(&mut self, index: usize) {
        self.fills.reset(index);
        self.events.push(DotsEvent::RepaintRequested);
    }

    /// Remove every fill override.
    pub fn reset_all_fill_colors(&mut self) {
        self.fills.reset_all();
        self.events.push(DotsEvent::RepaintRequested);
    }

    /// Drop overrides for indices past the current dot count.
    pub fn prune_fill_colors(&mut self) {
        self.fills.retain_below(self.config.number_of_dots);
    }

    /// Color the dot at `index` is drawn with.
    pub fn resolved_color(&self, index: usize) -> Color {
        self.fills.resolve(index, self.config.default_color)
    }

    /// Install a selection veto.
    pub fn set_veto(&mut self, veto: impl SelectionVeto + 'static) {
        self.veto = Box::new(veto);
    }

    /// Remove the selection veto; every candidate is accepted again.
    pub fn clear_veto(&mut self) {
        self.veto = Box::new(AllowAll);
    }

    /// Currently selected dot.
    pub fn selected_dot_index(&self) -> Option<usize> {
        self.selection.selected()
    }

    /// Select the dot at `index`, clamped into range, unless vetoed.
    ///
    /// Returns `true` when the selection was committed. With no dots there is
    /// nothing to select and the selection stays as it is.
    pub fn select_dot(&mut self, index: i64) -> bool {
        let Some(clamped) = clamp_index(index, self.config.number_of_dots) else {
            log::trace!("Ignoring selection of dot {index}: no dots");
            return false;
        };
        if !self.veto.should_select(self, clamped) {
            log::trace!("Selection of dot {clamped} vetoed");
            return false;
        }
        self.commit(Some(clamped));
        true
    }

    /// Clear the selection. Not subject to the veto.
    pub fn deselect_dot(&mut self) {
        self.commit(None);
    }

    /// Handle a pointer-down at `point`, local to a container of `size`.
    ///
    /// Returns `true` when a selection was committed.
    pub fn handle_pointer_down(&mut self, point: Point, size: Size) -> bool {
        let Some(tapped) = tap_index(point.x, size.width, &self.config) else {
            log::trace!("Ignoring tap at {point:?}: no tap columns");
            return false;
        };
        match tap_candidate(self.config.selection_type, tapped, self.selection.selected()) {
            Some(candidate) => self.select_dot(candidate),
            None => false,
        }
    }

    /// Dot geometry for a container of `size`.
    pub fn layout(&self, size: Size) -> DotLayout {
        compute_layout(size, &self.config)
    }

    /// Draw commands for a container of `size`.
    pub fn render(&self, size: Size) -> Vec<DrawCommand> {
        render(
            &self.layout(size),
            &self.config,
            &self.fills,
            self.selection.selected(),
        )
    }

    /// Take all pending host events, oldest first.
    pub fn drain_events(&mut self) -> Vec<DotsEvent> {
        std::mem::take(&mut self.events)
    }

    /// Whether events are waiting to be drained.
    pub fn has_pending_events(&self) -> bool {
        !self.events.is_empty()
    }

    fn commit(&mut self, selected: Option<usize>) {
        log::debug!("Selected dot: {selected:?}");
        self.selection.commit(selected);
        self.events.push(DotsEvent::RepaintRequested);
        self.events.push(DotsEvent::SelectionChanged(selected));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SelectionType;

    fn dots(count: usize) -> ConnectedDots {
        ConnectedDots::new(DotsConfig::default().with_number_of_dots(count)).unwrap()
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        assert!(ConnectedDots::new(DotsConfig::default().with_dot_radius(-1.0)).is_err());
    }

    #[test]
    fn test_select_commits_and_notifies() {
        let mut dots = dots(4);
        assert!(dots.select_dot(2));
        assert_eq!(dots.selected_dot_index(), Some(2));
        assert_eq!(
            dots.drain_events(),
            vec![DotsEvent::RepaintRequested, DotsEvent::SelectionChanged(Some(2))]
        );
        assert!(!dots.has_pending_events());
    }

    #[test]
    fn test_select_clamps() {
        let mut dots = dots(4);
        dots.select_dot(-7);
        assert_eq!(dots.selected_dot_index(), Some(0));
        dots.select_dot(99);
        assert_eq!(dots.selected_dot_index(), Some(3));
    }

    #[test]
    fn test_select_with_no_dots_is_noop() {
        let mut dots = dots(0);
        assert!(!dots.select_dot(0));
        assert_eq!(dots.selected_dot_index(), None);
        assert!(dots.drain_events().is_empty());
    }

    #[test]
    fn test_veto_receives_clamped_index() {
        let mut dots = dots(3);
        dots.set_veto(|_: &ConnectedDots, index: usize| index != 2);
        assert!(!dots.select_dot(10));
        assert_eq!(dots.selected_dot_index(), None);
        assert!(dots.select_dot(1));

        dots.clear_veto();
        assert!(dots.select_dot(10));
        assert_eq!(dots.selected_dot_index(), Some(2));
    }

    #[test]
    fn test_veto_sees_current_state() {
        let mut dots = dots(5);
        // Only allow moving one step at a time.
        dots.set_veto(|dots: &ConnectedDots, index: usize| match dots.selected_dot_index() {
            None => true,
            Some(current) => current.abs_diff(index) <= 1,
        });
        assert!(dots.select_dot(1));
        assert!(!dots.select_dot(4));
        assert!(dots.select_dot(2));
    }

    #[test]
    fn test_deselect_bypasses_veto() {
        let mut dots = dots(3);
        dots.select_dot(1);
        dots.set_veto(|_: &ConnectedDots, _: usize| false);
        dots.drain_events();

        dots.deselect_dot();
        assert_eq!(dots.selected_dot_index(), None);
        assert_eq!(
            dots.drain_events(),
            vec![DotsEvent::RepaintRequested, DotsEvent::SelectionChanged(None)]
        );
    }

    #[test]
    fn test_fill_colors_request_repaint() {
        let mut dots = dots(3);
        let red = Color::from_rgba8(255, 0, 0, 255);
        dots.set_fill_color(red, 1);
        assert_eq!(dots.resolved_color(1), red);
        dots.reset_fill_color(1);
        dots.reset_all_fill_colors();
        assert_eq!(dots.drain_events(), vec![DotsEvent::RepaintRequested; 3]);
    }

    #[test]
    fn test_prune_fill_colors() {
        let mut dots = dots(3);
        let red = Color::from_rgba8(255, 0, 0, 255);
        dots.set_fill_color(red, 1);
        dots.set_fill_color(red, 7);
        dots.prune_fill_colors();
        assert_eq!(dots.fill_colors().len(), 1);
        assert!(dots.fill_colors().has_override(1));
    }

    #[test]
    fn test_pointer_down_direct() {
        let mut dots = ConnectedDots::new(
            DotsConfig::default()
                .with_number_of_dots(4)
                .with_selection_outline(crate::color::DARK_GRAY, 0.0),
        )
        .unwrap();
        assert!(dots.handle_pointer_down(Point::new(120.0, 10.0), Size::new(200.0, 20.0)));
        assert_eq!(dots.selected_dot_index(), Some(2));
    }

    #[test]
    fn test_pointer_down_none_policy() {
        let mut dots = ConnectedDots::new(
            DotsConfig::default()
                .with_number_of_dots(4)
                .with_selection_type(SelectionType::None),
        )
        .unwrap();
        assert!(!dots.handle_pointer_down(Point::new(120.0, 10.0), Size::new(200.0, 20.0)));
        assert_eq!(dots.selected_dot_index(), None);
        assert!(dots.drain_events().is_empty());
    }

    #[test]
    fn test_set_config_clamps_selection() {
        let mut dots = dots(6);
        dots.select_dot(5);
        dots.drain_events();

        dots.set_config(DotsConfig::default().with_number_of_dots(3))
            .unwrap();
        assert_eq!(dots.selected_dot_index(), Some(2));
        assert_eq!(
            dots.drain_events(),
            vec![
                DotsEvent::RepaintRequested,
                DotsEvent::RepaintRequested,
                DotsEvent::SelectionChanged(Some(2)),
            ]
        );

        dots.set_config(DotsConfig::default().with_number_of_dots(0))
            .unwrap();
        assert_eq!(dots.selected_dot_index(), None);
    }

    #[test]
    fn test_set_config_keeps_old_on_error() {
        let mut dots = dots(6);
        let err = dots
            .set_config(DotsConfig::default().with_connector_line_width(0.0))
            .unwrap_err();
        assert!(err.to_string().contains("Connector line width"));
        assert_eq!(dots.config().number_of_dots, 6);
        assert!(dots.drain_events().is_empty());
    }
}
