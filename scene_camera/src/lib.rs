/*!
# Scene Camera

Camera model and scene environment for a declarative 3D view layer.

The crate computes nothing per frame on its own. The host builds camera
values and a [`SceneEnvironment`](scene3d::environment::SceneEnvironment),
then the rendering layer reads the active camera and derives its matrices
for the current viewport.

## Architecture

- **Camera**: capability trait (position, rotation, rotating flag, projection)
- **OrthographicCamera / PerspectiveCamera**: the two concrete variants
- **SceneCamera**: closed sum of the variants, stored in the environment
- **look_at / looking_at**: orientation helpers over any `Camera`
- **SceneEnvironment**: immutable keyed context (camera, IBL, skybox)

Conventions: right-handed, the camera looks down its local -Z axis, and
projections map depth to `[0, 1]` unless `DepthRange::NegativeOneToOne`
is requested.
*/

// Internal modules
mod error;
pub mod log;
pub mod camera;
pub mod environment;

// Main scene3d namespace module
pub mod scene3d {
    // Error types
    pub use crate::error::{Error, Result};

    // Logging sub-module (types and logger slot, NOT macros)
    pub mod log {
        pub use crate::log::{
            Logger, LogEntry, LogSeverity, DefaultLogger, DEFAULT_MIN_SEVERITY,
            set_logger, reset_logger,
        };
    }

    // Camera sub-module
    pub mod camera {
        pub use crate::camera::*;
    }

    // Environment sub-module
    pub mod environment {
        pub use crate::environment::*;
    }
}

// Re-export math library at crate root
pub use glam;
