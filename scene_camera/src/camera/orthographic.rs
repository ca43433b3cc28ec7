/// OrthographicCamera — parallel projection with a fixed half-height.

use glam::{Mat4, Vec3};
use crate::error::{Error, Result};
use crate::camera_err;
use super::camera::Camera;
use super::euler::Euler;
use super::viewport::{DepthRange, ViewportSize};
use super::{DEFAULT_FAR, DEFAULT_NEAR, DEFAULT_POSITION};

/// Default half-extent of the view volume at unit aspect
pub const DEFAULT_SCALE: f32 = 1.0;

/// Orthographic camera.
///
/// The view volume spans `[-scale, scale]` vertically and
/// `[-aspect, aspect]` horizontally, where `aspect = (w / h) * scale`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrthographicCamera {
    pub position: Vec3,
    pub rotation: Euler,
    /// Near clip distance (must be less than `far`)
    pub near: f32,
    /// Far clip distance
    pub far: f32,
    /// Half-height of the view volume (must be positive)
    pub scale: f32,
    pub is_rotating: bool,
}

impl Default for OrthographicCamera {
    fn default() -> Self {
        Self {
            position: DEFAULT_POSITION,
            rotation: Euler::IDENTITY,
            near: DEFAULT_NEAR,
            far: DEFAULT_FAR,
            scale: DEFAULT_SCALE,
            is_rotating: false,
        }
    }
}

impl OrthographicCamera {
    /// Create a camera with identity rotation.
    pub fn new(position: Vec3, near: f32, far: f32, scale: f32) -> Self {
        Self {
            position,
            near,
            far,
            scale,
            ..Self::default()
        }
    }

    /// Check `near < far` and `scale > 0` (all finite).
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidProjection` naming the offending parameter.
    pub fn validate(&self) -> Result<()> {
        if !self.scale.is_finite() || self.scale <= 0.0 {
            return Err(camera_err!("scene_camera::OrthographicCamera", Error::InvalidProjection(
                format!("orthographic scale must be positive, got {}", self.scale)
            )));
        }
        if !self.near.is_finite() || !self.far.is_finite() || self.near >= self.far {
            return Err(camera_err!("scene_camera::OrthographicCamera", Error::InvalidProjection(
                format!("near ({}) must be less than far ({})", self.near, self.far)
            )));
        }
        Ok(())
    }
}

impl Camera for OrthographicCamera {
    fn position(&self) -> Vec3 {
        self.position
    }

    fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    fn rotation(&self) -> Euler {
        self.rotation
    }

    fn set_rotation(&mut self, rotation: Euler) {
        self.rotation = rotation;
    }

    fn is_rotating(&self) -> bool {
        self.is_rotating
    }

    fn set_rotating(&mut self, rotating: bool) {
        self.is_rotating = rotating;
    }

    fn projection_matrix_in(&self, viewport: ViewportSize, depth: DepthRange) -> Result<Mat4> {
        self.validate()?;
        let aspect = viewport.aspect_ratio()? * self.scale;

        let (left, right) = (-aspect, aspect);
        let (bottom, top) = (-self.scale, self.scale);

        Ok(match depth {
            DepthRange::ZeroToOne => {
                Mat4::orthographic_rh(left, right, bottom, top, self.near, self.far)
            }
            DepthRange::NegativeOneToOne => {
                Mat4::orthographic_rh_gl(left, right, bottom, top, self.near, self.far)
            }
        })
    }
}

#[cfg(test)]
#[path = "orthographic_tests.rs"]
mod tests;
