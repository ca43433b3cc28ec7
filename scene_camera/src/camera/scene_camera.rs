/// SceneCamera — the camera value a scene environment carries.
///
/// A closed sum of the two variants so the environment can store, copy and
/// compare the active camera without boxing.

use glam::{Mat4, Vec3};
use crate::error::Result;
use super::camera::Camera;
use super::euler::Euler;
use super::orthographic::OrthographicCamera;
use super::perspective::PerspectiveCamera;
use super::viewport::{DepthRange, ViewportSize};

/// Either camera variant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SceneCamera {
    Orthographic(OrthographicCamera),
    Perspective(PerspectiveCamera),
}

impl Default for SceneCamera {
    /// Perspective camera with default parameters.
    fn default() -> Self {
        SceneCamera::Perspective(PerspectiveCamera::default())
    }
}

impl SceneCamera {
    pub fn as_orthographic(&self) -> Option<&OrthographicCamera> {
        match self {
            SceneCamera::Orthographic(camera) => Some(camera),
            SceneCamera::Perspective(_) => None,
        }
    }

    pub fn as_perspective(&self) -> Option<&PerspectiveCamera> {
        match self {
            SceneCamera::Perspective(camera) => Some(camera),
            SceneCamera::Orthographic(_) => None,
        }
    }

    pub fn is_orthographic(&self) -> bool {
        matches!(self, SceneCamera::Orthographic(_))
    }

    pub fn is_perspective(&self) -> bool {
        matches!(self, SceneCamera::Perspective(_))
    }

    fn inner(&self) -> &dyn Camera {
        match self {
            SceneCamera::Orthographic(camera) => camera,
            SceneCamera::Perspective(camera) => camera,
        }
    }

    fn inner_mut(&mut self) -> &mut dyn Camera {
        match self {
            SceneCamera::Orthographic(camera) => camera,
            SceneCamera::Perspective(camera) => camera,
        }
    }
}

impl From<OrthographicCamera> for SceneCamera {
    fn from(camera: OrthographicCamera) -> Self {
        SceneCamera::Orthographic(camera)
    }
}

impl From<PerspectiveCamera> for SceneCamera {
    fn from(camera: PerspectiveCamera) -> Self {
        SceneCamera::Perspective(camera)
    }
}

impl Camera for SceneCamera {
    fn position(&self) -> Vec3 {
        self.inner().position()
    }

    fn set_position(&mut self, position: Vec3) {
        self.inner_mut().set_position(position);
    }

    fn rotation(&self) -> Euler {
        self.inner().rotation()
    }

    fn set_rotation(&mut self, rotation: Euler) {
        self.inner_mut().set_rotation(rotation);
    }

    fn is_rotating(&self) -> bool {
        self.inner().is_rotating()
    }

    fn set_rotating(&mut self, rotating: bool) {
        self.inner_mut().set_rotating(rotating);
    }

    fn projection_matrix_in(&self, viewport: ViewportSize, depth: DepthRange) -> Result<Mat4> {
        self.inner().projection_matrix_in(viewport, depth)
    }
}

#[cfg(test)]
#[path = "scene_camera_tests.rs"]
mod tests;
