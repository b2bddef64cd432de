//! Renderer trait abstraction.

use connected_dots_core::DrawCommand;
use kurbo::Size;
use thiserror::Error;

/// Renderer errors.
#[derive(Debug, Error)]
pub enum RendererError {
    #[error("Render failed: {0}")]
    RenderFailed(String),
    #[error("Surface error: {0}")]
    Surface(String),
}

/// Result type for renderer operations.
pub type RenderResult<T> = Result<T, RendererError>;

/// Context for a single render frame.
pub struct RenderContext<'a> {
    /// Draw commands, painted front to back.
    pub commands: &'a [DrawCommand],
    /// Viewport size in logical pixels.
    pub viewport_size: Size,
    /// Device pixel ratio (for HiDPI).
    pub scale_factor: f64,
}

impl<'a> RenderContext<'a> {
    /// Create a new render context.
    pub fn new(commands: &'a [DrawCommand], viewport_size: Size) -> Self {
        Self {
            commands,
            viewport_size,
            scale_factor: 1.0,
        }
    }

    /// Set the scale factor for HiDPI.
    pub fn with_scale_factor(mut self, scale_factor: f64) -> Self {
        self.scale_factor = scale_factor;
        self
    }

    /// Check the context can be rendered.
    pub fn validate(&self) -> RenderResult<()> {
        let Size { width, height } = self.viewport_size;
        if !(width.is_finite() && height.is_finite() && width >= 0.0 && height >= 0.0) {
            return Err(RendererError::Surface(format!(
                "invalid viewport {width}x{height}"
            )));
        }
        if !(self.scale_factor.is_finite() && self.scale_factor > 0.0) {
            return Err(RendererError::RenderFailed(format!(
                "invalid scale factor {}",
                self.scale_factor
            )));
        }
        Ok(())
    }
}

/// Trait for rendering backends.
pub trait Renderer {
    /// Build the scene/command buffer for a frame.
    ///
    /// Called once per repaint; implementations start from an empty scene.
    fn build_scene(&mut self, ctx: &RenderContext) -> RenderResult<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_defaults() {
        let ctx = RenderContext::new(&[], Size::new(200.0, 40.0));
        assert!((ctx.scale_factor - 1.0).abs() < f64::EPSILON);
        assert!(ctx.validate().is_ok());
    }

    #[test]
    fn test_context_rejects_bad_viewport() {
        let ctx = RenderContext::new(&[], Size::new(f64::NAN, 40.0));
        assert!(matches!(ctx.validate(), Err(RendererError::Surface(_))));

        let ctx = RenderContext::new(&[], Size::new(10.0, 10.0)).with_scale_factor(0.0);
        assert!(matches!(ctx.validate(), Err(RendererError::RenderFailed(_))));
    }
}
