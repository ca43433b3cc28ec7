//! Camera module — camera capability set, variants, and orientation helpers.
//!
//! Cameras are plain values. The host owns them, re-orients them with
//! `look_at`, and hands them to a `SceneEnvironment`. The rendering layer
//! derives the projection for the current viewport every frame.

mod euler;
mod viewport;
mod camera;
mod orthographic;
mod perspective;
mod scene_camera;
mod look_at;
mod transform;
mod uniforms;

pub use euler::{Euler, EULER_ORDER};
pub use viewport::{ViewportSize, DepthRange};
pub use camera::Camera;
pub use orthographic::{OrthographicCamera, DEFAULT_SCALE};
pub use perspective::{PerspectiveCamera, DEFAULT_FOV_DEGREES};
pub use scene_camera::SceneCamera;
pub use look_at::{look_at, looking_at, look_rotation, DEFAULT_UP};
pub use transform::CameraTransform;
pub use uniforms::CameraUniforms;

/// Default camera position shared by both variants
pub const DEFAULT_POSITION: glam::Vec3 = glam::Vec3::new(0.0, 0.0, 2.0);

/// Default near clip distance
pub const DEFAULT_NEAR: f32 = 0.1;

/// Default far clip distance
pub const DEFAULT_FAR: f32 = 100.0;
