/// CameraTransform — the animatable part of a camera.
///
/// Animation drivers interpolate this pair between frames; they never need
/// to know which camera variant they are animating.

use glam::Vec3;
use super::euler::Euler;

/// Position and rotation of a camera.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CameraTransform {
    pub position: Vec3,
    pub rotation: Euler,
}

impl CameraTransform {
    pub const fn new(position: Vec3, rotation: Euler) -> Self {
        Self { position, rotation }
    }

    /// Blend toward `other` by `t` (clamped to `[0, 1]`).
    ///
    /// Position is interpolated linearly. Rotation is slerped through
    /// quaternions along the shortest arc. `t == 0` and `t == 1` return the
    /// endpoints exactly.
    pub fn interpolate(&self, other: &Self, t: f32) -> Self {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        if t == 0.0 {
            return *self;
        }
        if t == 1.0 {
            return *other;
        }

        let position = self.position.lerp(other.position, t);
        let rotation = self.rotation.to_quat().slerp(other.rotation.to_quat(), t);

        Self {
            position,
            rotation: Euler::from_quat(rotation),
        }
    }
}

#[cfg(test)]
#[path = "transform_tests.rs"]
mod tests;
