/// Euler — orientation as three rotation angles (radians).
///
/// Angles are applied in `EULER_ORDER` (intrinsic X, then Y, then Z).
/// An `Euler` is a flat numeric triple so it can be interpolated
/// component-wise, but `CameraTransform::interpolate` goes through
/// quaternions to stay on the shortest arc.

use glam::{EulerRot, Mat3, Quat};

/// Rotation order used for every Euler <-> quaternion conversion
pub const EULER_ORDER: EulerRot = EulerRot::XYZ;

/// Orientation as three angles in radians.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Euler {
    /// Rotation around the X axis (pitch)
    pub x: f32,
    /// Rotation around the Y axis (yaw)
    pub y: f32,
    /// Rotation around the Z axis (roll)
    pub z: f32,
}

impl Euler {
    /// No rotation
    pub const IDENTITY: Self = Self { x: 0.0, y: 0.0, z: 0.0 };

    /// Create from angles in radians.
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Create from angles in degrees.
    pub fn from_degrees(x: f32, y: f32, z: f32) -> Self {
        Self::new(x.to_radians(), y.to_radians(), z.to_radians())
    }

    /// Create from a unit quaternion.
    pub fn from_quat(quat: Quat) -> Self {
        let (x, y, z) = quat.to_euler(EULER_ORDER);
        Self { x, y, z }
    }

    /// Create from a pure rotation matrix (orthonormal columns).
    pub fn from_mat3(matrix: Mat3) -> Self {
        Self::from_quat(Quat::from_mat3(&matrix))
    }

    /// Convert to a unit quaternion.
    pub fn to_quat(self) -> Quat {
        Quat::from_euler(EULER_ORDER, self.x, self.y, self.z)
    }

    /// Convert to a 3x3 rotation matrix.
    pub fn to_mat3(self) -> Mat3 {
        Mat3::from_quat(self.to_quat())
    }

    /// Angles as an array `[x, y, z]`.
    pub fn to_array(self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    /// Compare the rotations (not the raw angles) within `max_angle` radians.
    ///
    /// Different angle triples can describe the same orientation, so the
    /// comparison goes through quaternions.
    pub fn abs_diff_eq(self, other: Self, max_angle: f32) -> bool {
        self.to_quat().angle_between(other.to_quat()) <= max_angle
    }
}

impl From<Quat> for Euler {
    fn from(quat: Quat) -> Self {
        Self::from_quat(quat)
    }
}

impl From<Euler> for Quat {
    fn from(euler: Euler) -> Self {
        euler.to_quat()
    }
}

impl From<[f32; 3]> for Euler {
    fn from(angles: [f32; 3]) -> Self {
        Self::new(angles[0], angles[1], angles[2])
    }
}

#[cfg(test)]
#[path = "euler_tests.rs"]
mod tests;
