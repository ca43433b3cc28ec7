/// Environment keys — typed slots of a `SceneEnvironment`.

use std::fmt::Debug;
use crate::camera::SceneCamera;
use super::image_source::ImageSource;

/// A typed slot in a scene environment.
///
/// The key type itself is only a marker; the stored value is `Self::Value`.
///
/// # Example
///
/// ```
/// use scene_camera::scene3d::environment::{EnvironmentKey, SceneEnvironment};
///
/// struct ExposureKey;
///
/// impl EnvironmentKey for ExposureKey {
///     type Value = f32;
///     const NAME: &'static str = "exposure";
///     fn default_value() -> f32 { 1.0 }
/// }
///
/// let env = SceneEnvironment::new().with::<ExposureKey>(0.5);
/// assert_eq!(env.get::<ExposureKey>(), 0.5);
/// ```
pub trait EnvironmentKey: 'static {
    /// Value stored under this key
    type Value: Clone + PartialEq + Debug + Send + Sync + 'static;

    /// Human-readable key name (logs, Debug output)
    const NAME: &'static str;

    /// Value returned when the key was never set
    fn default_value() -> Self::Value;
}

/// Active camera. Defaults to a perspective camera with default parameters.
pub struct CameraKey;

impl EnvironmentKey for CameraKey {
    type Value = SceneCamera;
    const NAME: &'static str = "camera";

    fn default_value() -> SceneCamera {
        SceneCamera::default()
    }
}

/// Image-based-lighting source. Defaults to none.
pub struct IblKey;

impl EnvironmentKey for IblKey {
    type Value = Option<ImageSource>;
    const NAME: &'static str = "ibl";

    fn default_value() -> Option<ImageSource> {
        None
    }
}

/// Skybox source. Defaults to none.
pub struct SkyboxKey;

impl EnvironmentKey for SkyboxKey {
    type Value = Option<ImageSource>;
    const NAME: &'static str = "skybox";

    fn default_value() -> Option<ImageSource> {
        None
    }
}
