/*!
# Suburbs 3D

Camera and shadow-mapping core of the "Speed through the Suburbs" scene.

The crate never talks to a graphics API directly. A backend implements
[`GraphicsDevice`](graphics_device::GraphicsDevice) and the scene's meshes
are drawn through a [`SceneDrawer`](shadow::SceneDrawer) callback.

## Architecture

- **Camera**: free-fly camera, mouse look, scripted intro, frustum tests
- **GraphicsDevice**: backend seam, shader programs, depth targets, uniforms
- **Shadow**: directional light, shadow map, two-pass render pipeline
- **Scene**: per-frame context, lighting, rain, frame loop
- **Input**: held-key table and key bindings

Frame state is owned by [`FrameLoop`](scene::FrameLoop) and passed by
reference; nothing is global except the logger.
*/

// Internal modules
mod error;
mod engine;
mod config;
pub mod log;
pub mod camera;
pub mod graphics_device;
pub mod input;
pub mod scene;
pub mod shadow;

pub use config::SceneConfig;

// Main suburbs3d namespace module
pub mod suburbs3d {
    // Error types
    pub use crate::error::{Error, Result};

    // Engine facade (logger, device diagnostics)
    pub use crate::engine::Engine;

    // Startup configuration
    pub use crate::config::SceneConfig;

    // Logging sub-module (types only, NOT macros)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
    }

    // Camera sub-module
    pub mod camera {
        pub use crate::camera::*;
    }

    // Backend seam sub-module
    pub mod device {
        pub use crate::graphics_device::*;
    }

    // Shadow sub-module
    pub mod shadow {
        pub use crate::shadow::*;
    }

    // Scene sub-module
    pub mod scene {
        pub use crate::scene::*;
    }

    // Input sub-module
    pub mod input {
        pub use crate::input::*;
    }
}

// Re-export math library at crate root
pub use glam;
