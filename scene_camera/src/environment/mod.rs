//! Environment module — explicit scene context passed down to the renderer.
//!
//! A `SceneEnvironment` maps typed keys to values (active camera, IBL
//! source, skybox source). Views derive child environments by overriding
//! keys; reading an unset key yields the key's declared default.

mod keys;
mod image_source;
mod environment;

pub use keys::{EnvironmentKey, CameraKey, IblKey, SkyboxKey};
pub use image_source::ImageSource;
pub use environment::SceneEnvironment;
