/// Look-at orientation helpers.
///
/// Builds a right-handed basis where the camera's local -Z axis points
/// from its position toward the target:
///
/// - back    = normalize(position - center)
/// - right   = normalize(cross(up, back))
/// - true_up = cross(back, right)
///
/// The rotation matrix has columns (right, true_up, back), so the viewing
/// direction `rotation * -Z` equals `normalize(center - position)`. This is
/// the same basis `Mat4::look_at_rh` inverts for its view matrix.

use glam::{Mat3, Vec3};
use crate::error::{Error, Result};
use crate::{camera_err, camera_trace};
use super::camera::Camera;
use super::euler::Euler;

/// Default up reference vector
pub const DEFAULT_UP: Vec3 = Vec3::Y;

/// Squared length under which a basis vector (or the sine of the up/view
/// angle) is treated as zero
const DEGENERATE_LENGTH_SQUARED: f32 = 1e-12;

/// Rotation that orients a camera at `position` toward `center`.
///
/// # Errors
///
/// Returns `Error::DegenerateOrientation` when an input is not finite,
/// when `center` coincides with `position`, when `up` has zero length, or
/// when `up` is parallel to the viewing direction (roll is undefined).
/// Only the direction of `up` matters, not its length.
pub fn look_rotation(position: Vec3, center: Vec3, up: Vec3) -> Result<Euler> {
    if !position.is_finite() || !center.is_finite() || !up.is_finite() {
        return Err(camera_err!("scene_camera::LookAt", Error::DegenerateOrientation(
            format!("non-finite input (position {}, center {}, up {})", position, center, up)
        )));
    }

    let back = position - center;
    if back.length_squared() <= DEGENERATE_LENGTH_SQUARED {
        return Err(camera_err!("scene_camera::LookAt", Error::DegenerateOrientation(
            format!("target {} coincides with camera position", center)
        )));
    }
    let back = back.normalize();

    let Some(up) = up.try_normalize() else {
        return Err(camera_err!("scene_camera::LookAt", Error::DegenerateOrientation(
            format!("up vector {} has zero length", up)
        )));
    };

    // Both vectors are unit length, so this is sin^2 of the angle between them
    let right = up.cross(back);
    if right.length_squared() <= DEGENERATE_LENGTH_SQUARED {
        return Err(camera_err!("scene_camera::LookAt", Error::DegenerateOrientation(
            format!("up vector {} is parallel to the view direction {}", up, -back)
        )));
    }
    let right = right.normalize();
    let true_up = back.cross(right);

    Ok(Euler::from_mat3(Mat3::from_cols(right, true_up, back)))
}

/// Orient `camera` in place so it faces `center`.
///
/// On error the camera is left unchanged.
pub fn look_at<C: Camera + ?Sized>(camera: &mut C, center: Vec3, up: Vec3) -> Result<()> {
    let rotation = look_rotation(camera.position(), center, up)?;
    camera.set_rotation(rotation);
    camera_trace!(
        "scene_camera::LookAt",
        "Camera at {} now faces {} (rotation {:?})",
        camera.position(),
        center,
        rotation.to_array()
    );
    Ok(())
}

/// Copy of `camera` oriented to face `center`.
pub fn looking_at<C: Camera + Clone>(camera: &C, center: Vec3, up: Vec3) -> Result<C> {
    let mut oriented = camera.clone();
    look_at(&mut oriented, center, up)?;
    Ok(oriented)
}

#[cfg(test)]
#[path = "look_at_tests.rs"]
mod tests;
