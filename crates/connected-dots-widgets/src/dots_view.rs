//! egui host for [`ConnectedDots`].

use connected_dots_core::{ConnectedDots, DotsConfig, DotsEvent};
use egui::{Response, Sense, Ui, Vec2, Widget, vec2};

use crate::convert::{to_point, to_size};
use crate::paint::paint_commands;

/// Height that fits a dot, its selection outline and the vertical insets.
pub fn default_height(config: &DotsConfig) -> f32 {
    (config.dot_diameter()
        + config.selection_outline_width * 2.0
        + config.insets.top
        + config.insets.bottom) as f32
}

/// Widget that lays out, paints and routes presses to a [`ConnectedDots`].
///
/// The response is marked changed whenever a selection was committed this
/// frame, including selections made by the host since the previous frame.
pub struct DotsView<'a> {
    dots: &'a mut ConnectedDots,
    size: Option<Vec2>,
}

impl<'a> DotsView<'a> {
    /// Create a view over `dots`.
    pub fn new(dots: &'a mut ConnectedDots) -> Self {
        Self { dots, size: None }
    }

    /// Use a fixed size instead of the available width and [`default_height`].
    pub fn desired_size(mut self, size: Vec2) -> Self {
        self.size = Some(size);
        self
    }

    /// Show the view.
    pub fn show(self, ui: &mut Ui) -> Response {
        let desired = self
            .size
            .unwrap_or_else(|| vec2(ui.available_width(), default_height(self.dots.config())));
        let (rect, mut response) = ui.allocate_exact_size(desired, Sense::click());
        let size = to_size(rect.size());

        let pressed = ui.input(|i| i.pointer.any_pressed());
        if pressed && response.is_pointer_button_down_on() {
            if let Some(pos) = response.interact_pointer_pos() {
                self.dots.handle_pointer_down(to_point(pos - rect.min), size);
            }
        }

        for event in self.dots.drain_events() {
            match event {
                DotsEvent::RepaintRequested => ui.ctx().request_repaint(),
                DotsEvent::SelectionChanged(selected) => {
                    log::debug!("Dots view selection changed: {selected:?}");
                    response.mark_changed();
                }
            }
        }

        if ui.is_rect_visible(rect) {
            paint_commands(ui.painter(), rect.min, &self.dots.render(size));
        }

        response
    }
}

impl Widget for DotsView<'_> {
    fn ui(self, ui: &mut Ui) -> Response {
        self.show(ui)
    }
}
