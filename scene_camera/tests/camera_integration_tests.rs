//! Integration tests for the camera model
//!
//! Drives cameras the way a renderer does: build, orient, derive matrices
//! per frame, react to viewport changes.
//!
//! Run with: cargo test --test camera_integration_tests

use scene_camera::glam::{Vec3, Vec4};
use scene_camera::scene3d::Error;
use scene_camera::scene3d::camera::{
    look_at, looking_at, Camera, CameraTransform, CameraUniforms, DepthRange,
    Euler, OrthographicCamera, PerspectiveCamera, SceneCamera, ViewportSize, DEFAULT_UP,
};

// ============================================================================
// HELPERS
// ============================================================================

/// Project a world point to normalized device coordinates.
fn to_ndc(camera: &dyn Camera, viewport: ViewportSize, point: Vec3) -> Vec3 {
    let clip = camera.view_projection_matrix(viewport).unwrap() * point.extend(1.0);
    clip.truncate() / clip.w
}

// ============================================================================
// FRAME LOOP
// ============================================================================

#[test]
fn test_integration_target_projects_to_screen_center() {
    let cameras: Vec<SceneCamera> = vec![
        PerspectiveCamera { position: Vec3::new(4.0, 3.0, 6.0), ..PerspectiveCamera::default() }.into(),
        OrthographicCamera { position: Vec3::new(-5.0, 2.0, 1.0), ..OrthographicCamera::default() }.into(),
    ];
    let target = Vec3::new(0.5, 0.25, -1.0);
    let viewport = ViewportSize::new(1920.0, 1080.0);

    for camera in cameras {
        let oriented = looking_at(&camera, target, DEFAULT_UP).unwrap();
        let ndc = to_ndc(&oriented, viewport, target);

        assert!(ndc.x.abs() < 1e-4, "x = {}", ndc.x);
        assert!(ndc.y.abs() < 1e-4, "y = {}", ndc.y);
        assert!((0.0..=1.0).contains(&ndc.z), "z = {}", ndc.z);
    }
}

#[test]
fn test_integration_point_above_target_projects_up() {
    let mut camera = PerspectiveCamera { position: Vec3::new(0.0, 0.0, 10.0), ..PerspectiveCamera::default() };
    look_at(&mut camera, Vec3::ZERO, DEFAULT_UP).unwrap();

    let ndc = to_ndc(&camera, ViewportSize::new(800.0, 600.0), Vec3::new(0.0, 1.0, 0.0));
    assert!(ndc.y > 0.0);
    assert!(ndc.x.abs() < 1e-5);
}

#[test]
fn test_integration_viewport_resize() {
    let camera = PerspectiveCamera::default();

    let wide = camera.projection_matrix(ViewportSize::new(2000.0, 1000.0)).unwrap();
    let square = camera.projection_matrix(ViewportSize::new(1000.0, 1000.0)).unwrap();

    // Vertical scale is independent of the aspect ratio
    assert!((wide.y_axis.y - square.y_axis.y).abs() < 1e-6);
    assert!((wide.x_axis.x * 2.0 - square.x_axis.x).abs() < 1e-5);
}

#[test]
fn test_integration_minimized_window_skips_frame() {
    let camera = SceneCamera::default();
    let last_good = camera.projection_matrix(ViewportSize::new(1280.0, 720.0)).unwrap();

    let projection = match camera.projection_matrix(ViewportSize::new(1280.0, 0.0)) {
        Ok(matrix) => matrix,
        Err(Error::InvalidViewport { .. }) => last_good,
        Err(other) => panic!("unexpected error: {}", other),
    };

    assert_eq!(projection, last_good);
    assert!(!projection.is_nan());
}

#[test]
fn test_integration_gl_and_vulkan_agree_on_xy() {
    let camera = PerspectiveCamera::default();
    let viewport = ViewportSize::new(640.0, 480.0);
    let point = Vec4::new(0.3, -0.2, -5.0, 1.0);

    let zo = camera.projection_matrix_in(viewport, DepthRange::ZeroToOne).unwrap() * point;
    let gl = camera.projection_matrix_in(viewport, DepthRange::NegativeOneToOne).unwrap() * point;

    assert!((zo.x / zo.w - gl.x / gl.w).abs() < 1e-6);
    assert!((zo.y / zo.w - gl.y / gl.w).abs() < 1e-6);
}

// ============================================================================
// ANIMATION
// ============================================================================

#[test]
fn test_integration_orbit_animation_keeps_target_centered() {
    let start = looking_at(&PerspectiveCamera { position: Vec3::new(0.0, 0.0, 5.0), ..PerspectiveCamera::default() },
        Vec3::ZERO, DEFAULT_UP).unwrap();
    let end = looking_at(&PerspectiveCamera { position: Vec3::new(5.0, 0.0, 0.0), ..PerspectiveCamera::default() },
        Vec3::ZERO, DEFAULT_UP).unwrap();

    let mut camera = start;
    camera.set_rotating(true);
    for step in 0..=10 {
        let t = step as f32 / 10.0;
        let frame = start.transform().interpolate(&end.transform(), t);
        camera.set_transform(frame);

        // Both endpoints face the origin, so the origin stays on the view axis
        let to_origin = (Vec3::ZERO - camera.position()).normalize_or_zero();
        let forward = camera.forward();
        assert!(forward.is_normalized());
        if t == 0.0 || t == 1.0 {
            assert!(forward.abs_diff_eq(to_origin, 1e-4));
        }
    }
    camera.set_rotating(false);

    assert!(camera.position().abs_diff_eq(Vec3::new(5.0, 0.0, 0.0), 1e-6));
    assert!(camera.rotation().abs_diff_eq(end.rotation, 1e-5));
}

#[test]
fn test_integration_transform_is_independent_of_variant() {
    let transform = CameraTransform::new(Vec3::new(1.0, 1.0, 1.0), Euler::from_degrees(10.0, 20.0, 0.0));

    let mut ortho = SceneCamera::from(OrthographicCamera::default());
    let mut persp = SceneCamera::from(PerspectiveCamera::default());
    ortho.set_transform(transform);
    persp.set_transform(transform);

    assert_eq!(ortho.view_matrix(), persp.view_matrix());
}

// ============================================================================
// UNIFORM UPLOAD
// ============================================================================

#[test]
fn test_integration_uniform_upload() {
    let camera = SceneCamera::from(OrthographicCamera { scale: 4.0, ..OrthographicCamera::default() });
    let uniforms = CameraUniforms::from_camera(&camera, ViewportSize::from((1024u32, 512u32))).unwrap();

    let bytes = uniforms.as_bytes();
    assert_eq!(bytes.len(), std::mem::size_of::<CameraUniforms>());
    assert!(bytes.iter().any(|&b| b != 0));
}
