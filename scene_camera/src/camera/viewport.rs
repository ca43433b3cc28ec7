/// Viewport size and clip-space depth convention.

use crate::error::{Error, Result};
use crate::camera_err;

/// Dimensions of the rendering surface (pixels or logical units).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportSize {
    pub width: f32,
    pub height: f32,
}

impl ViewportSize {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Check that both dimensions are finite and strictly positive.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidViewport` otherwise.
    pub fn validate(&self) -> Result<()> {
        let valid = self.width.is_finite()
            && self.height.is_finite()
            && self.width > 0.0
            && self.height > 0.0;

        if !valid {
            return Err(camera_err!("scene_camera::Viewport", Error::InvalidViewport {
                width: self.width,
                height: self.height,
            }));
        }
        Ok(())
    }

    /// Width divided by height.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidViewport` for zero, negative or non-finite dimensions.
    pub fn aspect_ratio(&self) -> Result<f32> {
        self.validate()?;
        Ok(self.width / self.height)
    }
}

impl From<(f32, f32)> for ViewportSize {
    fn from((width, height): (f32, f32)) -> Self {
        Self::new(width, height)
    }
}

impl From<(u32, u32)> for ViewportSize {
    fn from((width, height): (u32, u32)) -> Self {
        Self::new(width as f32, height as f32)
    }
}

impl From<glam::Vec2> for ViewportSize {
    fn from(size: glam::Vec2) -> Self {
        Self::new(size.x, size.y)
    }
}

/// Clip-space depth range produced by projection matrices.
///
/// Both conventions are right-handed (camera looks down -Z).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DepthRange {
    /// Depth in `[0, 1]` (Vulkan, Metal, D3D, wgpu)
    #[default]
    ZeroToOne,
    /// Depth in `[-1, 1]` (OpenGL)
    NegativeOneToOne,
}
