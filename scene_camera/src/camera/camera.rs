/// Camera — capability set shared by every camera variant.
///
/// A camera exposes a mutable position, rotation and rotating flag, and
/// derives a projection matrix from its own fields and the viewport size.
/// Everything else (view matrix, basis vectors, transform) is provided on
/// top of those accessors.

use glam::{Mat4, Quat, Vec3};
use crate::error::Result;
use super::euler::Euler;
use super::transform::CameraTransform;
use super::viewport::{DepthRange, ViewportSize};

/// Capability set of a camera.
///
/// Implementors are plain values: projection derivation is a pure function
/// of `self` and the viewport, with no hidden state.
pub trait Camera {
    /// World-space position.
    fn position(&self) -> Vec3;

    fn set_position(&mut self, position: Vec3);

    /// Orientation. The camera looks down its local -Z axis.
    fn rotation(&self) -> Euler;

    /// Replace the orientation wholesale.
    fn set_rotation(&mut self, rotation: Euler);

    /// Advisory flag for the renderer (e.g. suppress recentring while the user drags).
    ///
    /// Not used by any matrix derivation.
    fn is_rotating(&self) -> bool;

    fn set_rotating(&mut self, rotating: bool);

    /// Projection matrix for `viewport` in the requested depth convention.
    ///
    /// # Errors
    ///
    /// - `Error::InvalidViewport` for non-positive or non-finite dimensions
    /// - `Error::InvalidProjection` when the camera's own parameters are invalid
    fn projection_matrix_in(&self, viewport: ViewportSize, depth: DepthRange) -> Result<Mat4>;

    /// Projection matrix for `viewport`, depth mapped to `[0, 1]`.
    fn projection_matrix(&self, viewport: ViewportSize) -> Result<Mat4> {
        self.projection_matrix_in(viewport, DepthRange::default())
    }

    /// Camera-to-world transform.
    fn world_matrix(&self) -> Mat4 {
        Mat4::from_rotation_translation(self.rotation().to_quat(), self.position())
    }

    /// World-to-camera transform (inverse of `world_matrix`).
    fn view_matrix(&self) -> Mat4 {
        let inverse_rotation: Quat = self.rotation().to_quat().conjugate();
        Mat4::from_quat(inverse_rotation) * Mat4::from_translation(-self.position())
    }

    /// Combined view-projection matrix (projection * view).
    fn view_projection_matrix(&self, viewport: ViewportSize) -> Result<Mat4> {
        Ok(self.projection_matrix(viewport)? * self.view_matrix())
    }

    /// Unit viewing direction in world space.
    fn forward(&self) -> Vec3 {
        self.rotation().to_quat() * Vec3::NEG_Z
    }

    /// Unit up direction in world space.
    fn up(&self) -> Vec3 {
        self.rotation().to_quat() * Vec3::Y
    }

    /// Unit right direction in world space.
    fn right(&self) -> Vec3 {
        self.rotation().to_quat() * Vec3::X
    }

    /// Animatable position/rotation pair.
    fn transform(&self) -> CameraTransform {
        CameraTransform::new(self.position(), self.rotation())
    }

    fn set_transform(&mut self, transform: CameraTransform) {
        self.set_position(transform.position);
        self.set_rotation(transform.rotation);
    }
}

#[cfg(test)]
#[path = "camera_tests.rs"]
mod tests;
