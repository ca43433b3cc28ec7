//! Error types for the scene camera crate
//!
//! Projection and orientation derivations never return NaN-filled matrices.
//! Degenerate inputs are reported through these variants instead.

use std::fmt;

/// Result type for scene camera operations
pub type Result<T> = std::result::Result<T, Error>;

/// Scene camera errors
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Viewport width or height is zero, negative, or not finite
    InvalidViewport {
        width: f32,
        height: f32,
    },

    /// Look-at target coincides with the camera, or up is parallel to the view direction
    DegenerateOrientation(String),

    /// Camera parameters violate a projection invariant (near/far, fov, scale)
    InvalidProjection(String),

    /// Image source (IBL, skybox) could not be parsed
    InvalidSource(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidViewport { width, height } => {
                write!(f, "Invalid viewport: {}x{} (both dimensions must be positive)", width, height)
            }
            Error::DegenerateOrientation(msg) => write!(f, "Degenerate orientation: {}", msg),
            Error::InvalidProjection(msg) => write!(f, "Invalid projection: {}", msg),
            Error::InvalidSource(msg) => write!(f, "Invalid image source: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

/// Build an [`Error`], log it at ERROR severity with file:line, and evaluate to it.
///
/// ```ignore
/// return Err(camera_err!("scene_camera::Perspective",
///     Error::InvalidProjection(format!("near {} >= far {}", near, far))));
/// ```
#[macro_export]
macro_rules! camera_err {
    ($source:expr, $error:expr) => {{
        let error = $error;
        $crate::camera_error!($source, "{}", error);
        error
    }};
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
