/// PerspectiveCamera — symmetric perspective frustum from a vertical field of view.

use std::f32::consts::PI;
use glam::{Mat4, Vec3};
use crate::error::{Error, Result};
use crate::camera_err;
use super::camera::Camera;
use super::euler::Euler;
use super::viewport::{DepthRange, ViewportSize};
use super::{DEFAULT_FAR, DEFAULT_NEAR, DEFAULT_POSITION};

/// Default vertical field of view, in degrees
pub const DEFAULT_FOV_DEGREES: f32 = 60.0;

/// Perspective camera.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PerspectiveCamera {
    pub position: Vec3,
    pub rotation: Euler,
    /// Vertical field of view in radians, in `(0, PI)`
    pub fov_y: f32,
    /// Near clip distance (positive, less than `far`)
    pub near: f32,
    pub far: f32,
    pub is_rotating: bool,
}

impl Default for PerspectiveCamera {
    fn default() -> Self {
        Self {
            position: DEFAULT_POSITION,
            rotation: Euler::IDENTITY,
            fov_y: DEFAULT_FOV_DEGREES.to_radians(),
            near: DEFAULT_NEAR,
            far: DEFAULT_FAR,
            is_rotating: false,
        }
    }
}

impl PerspectiveCamera {
    /// Create a camera with identity rotation. `fov_y` is in radians.
    pub fn new(position: Vec3, fov_y: f32, near: f32, far: f32) -> Self {
        Self {
            position,
            fov_y,
            near,
            far,
            ..Self::default()
        }
    }

    /// Same camera with the vertical field of view given in degrees.
    pub fn with_fov_degrees(mut self, degrees: f32) -> Self {
        self.fov_y = degrees.to_radians();
        self
    }

    /// Vertical field of view in degrees.
    pub fn fov_degrees(&self) -> f32 {
        self.fov_y.to_degrees()
    }

    /// Check `0 < fov_y < PI` and `0 < near < far` (all finite).
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidProjection` naming the offending parameter.
    pub fn validate(&self) -> Result<()> {
        if !self.fov_y.is_finite() || self.fov_y <= 0.0 || self.fov_y >= PI {
            return Err(camera_err!("scene_camera::PerspectiveCamera", Error::InvalidProjection(
                format!("field of view must be in (0, PI) radians, got {}", self.fov_y)
            )));
        }
        if !self.near.is_finite() || self.near <= 0.0 {
            return Err(camera_err!("scene_camera::PerspectiveCamera", Error::InvalidProjection(
                format!("near must be positive, got {}", self.near)
            )));
        }
        if !self.far.is_finite() || self.near >= self.far {
            return Err(camera_err!("scene_camera::PerspectiveCamera", Error::InvalidProjection(
                format!("near ({}) must be less than far ({})", self.near, self.far)
            )));
        }
        Ok(())
    }
}

impl Camera for PerspectiveCamera {
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
        let aspect = viewport.aspect_ratio()?;

        Ok(match depth {
            DepthRange::ZeroToOne => {
                Mat4::perspective_rh(self.fov_y, aspect, self.near, self.far)
            }
            DepthRange::NegativeOneToOne => {
                Mat4::perspective_rh_gl(self.fov_y, aspect, self.near, self.far)
            }
        })
    }
}

#[cfg(test)]
#[path = "perspective_tests.rs"]
mod tests;
