//! Vello-based renderer implementation.

use crate::renderer::{RenderContext, RenderResult, Renderer};
use connected_dots_core::DrawCommand;
use kurbo::{Affine, Ellipse, Rect, Stroke};
use parley::layout::PositionedLayoutItem;
use parley::{FontContext, LayoutContext, StyleProperty};
use peniko::{Brush, Color, Fill};
use vello::Scene;

/// Vello-based renderer for the connected dots draw commands.
pub struct VelloRenderer {
    /// The Vello scene being built.
    scene: Scene,
    /// Font context for label shaping (cached across frames).
    font_cx: FontContext,
    /// Layout context for label shaping.
    layout_cx: LayoutContext<Brush>,
}

impl Default for VelloRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl VelloRenderer {
    /// Create a new Vello renderer.
    pub fn new() -> Self {
        Self {
            scene: Scene::new(),
            font_cx: FontContext::new(),
            layout_cx: LayoutContext::new(),
        }
    }

    /// Get the built scene for rendering.
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Take ownership of the scene (resets internal scene).
    pub fn take_scene(&mut self) -> Scene {
        std::mem::take(&mut self.scene)
    }

    fn fill_rect(&mut self, rect: Rect, color: Color, transform: Affine) {
        self.scene.fill(Fill::NonZero, transform, color, None, &rect);
    }

    fn fill_dot(&mut self, ellipse: Ellipse, color: Color, transform: Affine) {
        self.scene.fill(Fill::NonZero, transform, color, None, &ellipse);
    }

    fn stroke_dot(&mut self, ellipse: Ellipse, color: Color, width: f64, transform: Affine) {
        if width <= 0.0 {
            return;
        }
        self.scene
            .stroke(&Stroke::new(width), transform, color, None, &ellipse);
    }

    /// Shape `text` with Parley and draw it centered in `rect`.
    fn render_label(
        &mut self,
        text: &str,
        rect: Rect,
        color: Color,
        font_size: f64,
        transform: Affine,
    ) {
        if text.is_empty() {
            return;
        }
        let brush = Brush::Solid(color);

        let mut builder = self
            .layout_cx
            .ranged_builder(&mut self.font_cx, text, 1.0, false);
        builder.push_default(StyleProperty::FontSize(font_size as f32));
        builder.push_default(StyleProperty::Brush(brush.clone()));
        let mut layout = builder.build(text);
        layout.break_all_lines(None);
        layout.align(None, parley::Alignment::Start, parley::AlignmentOptions::default());

        let center = rect.center();
        let origin_x = center.x - layout.width() as f64 / 2.0;
        let origin_y = center.y - layout.height() as f64 / 2.0;
        let text_transform = transform * Affine::translate((origin_x, origin_y));

        let mut glyph_count = 0;
        for line in layout.lines() {
            for item in line.items() {
                let PositionedLayoutItem::GlyphRun(glyph_run) = item else {
                    continue;
                };
                let mut x = glyph_run.offset();
                let y = glyph_run.baseline();
                let run = glyph_run.run();
                let font = run.font();
                let run_font_size = run.font_size();
                let synthesis = run.synthesis();
                let glyph_xform = synthesis
                    .skew()
                    .map(|angle| Affine::skew(angle.to_radians().tan() as f64, 0.0));

                let glyphs: Vec<vello::Glyph> = glyph_run
                    .glyphs()
                    .map(|glyph| {
                        let gx = x + glyph.x;
                        let gy = y - glyph.y;
                        x += glyph.advance;
                        glyph_count += 1;
                        vello::Glyph {
                            id: glyph.id,
                            x: gx,
                            y: gy,
                        }
                    })
                    .collect();

                if !glyphs.is_empty() {
                    self.scene
                        .draw_glyphs(font)
                        .brush(&brush)
                        .hint(true)
                        .transform(text_transform)
                        .glyph_transform(glyph_xform)
                        .font_size(run_font_size)
                        .normalized_coords(run.normalized_coords())
                        .draw(Fill::NonZero, glyphs.into_iter());
                }
            }
        }

        if glyph_count == 0 {
            log::debug!("No font available for label {text:?}; label skipped");
        }
    }
}

impl Renderer for VelloRenderer {
    fn build_scene(&mut self, ctx: &RenderContext) -> RenderResult<()> {
        ctx.validate()?;
        self.scene.reset();

        let transform = Affine::scale(ctx.scale_factor);

        for command in ctx.commands {
            match command {
                DrawCommand::Connector { rect, color, .. } => {
                    self.fill_rect(*rect, *color, transform);
                }
                DrawCommand::Dot { color, .. } => {
                    if let Some(ellipse) = command.ellipse() {
                        self.fill_dot(ellipse, *color, transform);
                    }
                }
                DrawCommand::SelectionOutline { color, width, .. } => {
                    if let Some(ellipse) = command.ellipse() {
                        self.stroke_dot(ellipse, *color, *width, transform);
                    }
                }
                DrawCommand::Label {
                    text,
                    rect,
                    color,
                    font_size,
                    ..
                } => {
                    self.render_label(text, *rect, *color, *font_size, transform);
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use connected_dots_core::{ConnectedDots, DotsConfig};
    use kurbo::Size;

    #[test]
    fn test_renderer_creation() {
        let renderer = VelloRenderer::new();
        assert!(renderer.scene().encoding().is_empty());
    }

    #[test]
    fn test_build_empty_scene() {
        let mut renderer = VelloRenderer::new();
        let ctx = RenderContext::new(&[], Size::new(200.0, 40.0));
        renderer.build_scene(&ctx).unwrap();
        assert!(renderer.scene().encoding().is_empty());
    }

    #[test]
    fn test_build_scene_with_dots() {
        let mut renderer = VelloRenderer::new();
        let mut dots =
            ConnectedDots::new(DotsConfig::default().with_show_text(false)).unwrap();
        dots.select_dot(2);
        let size = Size::new(240.0, 40.0);
        let commands = dots.render(size);

        let ctx = RenderContext::new(&commands, size).with_scale_factor(2.0);
        renderer.build_scene(&ctx).unwrap();
        assert!(!renderer.scene().encoding().is_empty());

        let scene = renderer.take_scene();
        assert!(!scene.encoding().is_empty());
        assert!(renderer.scene().encoding().is_empty());
    }

    #[test]
    fn test_build_scene_rejects_bad_viewport() {
        let mut renderer = VelloRenderer::new();
        let ctx = RenderContext::new(&[], Size::new(-1.0, 40.0));
        assert!(renderer.build_scene(&ctx).is_err());
    }
}
