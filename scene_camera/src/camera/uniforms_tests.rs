use glam::{Mat4, Vec3};
use crate::camera::{look_at, OrthographicCamera, PerspectiveCamera, DEFAULT_UP};
use crate::error::Error;
use super::*;

#[test]
fn test_uniforms_layout_size() {
    assert_eq!(std::mem::size_of::<CameraUniforms>(), 208);
}

#[test]
fn test_uniforms_from_camera() {
    let mut camera = PerspectiveCamera { position: Vec3::new(1.0, 2.0, 3.0), ..PerspectiveCamera::default() };
    look_at(&mut camera, Vec3::ZERO, DEFAULT_UP).unwrap();
    let viewport = ViewportSize::new(1280.0, 720.0);

    let uniforms = CameraUniforms::from_camera(&camera, viewport).unwrap();

    let projection = camera.projection_matrix(viewport).unwrap();
    let view = camera.view_matrix();
    assert_eq!(Mat4::from_cols_array_2d(&uniforms.view), view);
    assert_eq!(Mat4::from_cols_array_2d(&uniforms.projection), projection);
    assert_eq!(Mat4::from_cols_array_2d(&uniforms.view_projection), projection * view);
    assert_eq!(uniforms.position, [1.0, 2.0, 3.0, 1.0]);
}

#[test]
fn test_uniforms_as_bytes() {
    let uniforms = CameraUniforms::from_camera(&OrthographicCamera::default(), ViewportSize::new(1.0, 1.0)).unwrap();
    let bytes = uniforms.as_bytes();

    assert_eq!(bytes.len(), 208);
    let position: &[f32] = bytemuck::cast_slice(&bytes[192..]);
    assert_eq!(position, &[0.0, 0.0, 2.0, 1.0]);
}

#[test]
fn test_uniforms_propagate_viewport_error() {
    let result = CameraUniforms::from_camera(&PerspectiveCamera::default(), ViewportSize::new(0.0, 0.0));
    assert!(matches!(result, Err(Error::InvalidViewport { .. })));
}
