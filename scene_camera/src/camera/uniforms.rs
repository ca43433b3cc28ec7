/// CameraUniforms — GPU-ready snapshot of a camera for one frame.
///
/// Layout matches a std140/std430 block of three `mat4` followed by a
/// `vec4` (208 bytes, no padding).

use bytemuck::{Pod, Zeroable};
use crate::error::Result;
use super::camera::Camera;
use super::viewport::{DepthRange, ViewportSize};

/// Per-frame camera block.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct CameraUniforms {
    /// World-to-camera matrix (column-major)
    pub view: [[f32; 4]; 4],
    /// Camera-to-clip matrix (column-major)
    pub projection: [[f32; 4]; 4],
    /// projection * view
    pub view_projection: [[f32; 4]; 4],
    /// World-space camera position, w = 1
    pub position: [f32; 4],
}

impl CameraUniforms {
    /// Snapshot `camera` for `viewport`, depth mapped to `[0, 1]`.
    pub fn from_camera<C: Camera + ?Sized>(camera: &C, viewport: ViewportSize) -> Result<Self> {
        Self::from_camera_in(camera, viewport, DepthRange::default())
    }

    /// Snapshot `camera` for `viewport` in the requested depth convention.
    pub fn from_camera_in<C: Camera + ?Sized>(
        camera: &C,
        viewport: ViewportSize,
        depth: DepthRange,
    ) -> Result<Self> {
        let view = camera.view_matrix();
        let projection = camera.projection_matrix_in(viewport, depth)?;

        Ok(Self {
            view: view.to_cols_array_2d(),
            projection: projection.to_cols_array_2d(),
            view_projection: (projection * view).to_cols_array_2d(),
            position: camera.position().extend(1.0).to_array(),
        })
    }

    /// Raw bytes for buffer upload.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}

#[cfg(test)]
#[path = "uniforms_tests.rs"]
mod tests;
