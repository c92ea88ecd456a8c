//! Camera module - free-fly camera, look angles, driving mode, and frustum.
//!
//! The renderer does NOT store cameras globally. They are owned and driven
//! by the caller (see `FrameLoop`).

mod camera;
mod camera_mode;
mod frustum;
mod orientation;

pub use camera::{Camera, MoveDirection};
pub use camera_mode::{CameraMode, IntroAnimation};
pub use frustum::{
    Aabb, Frustum,
    PLANE_LEFT, PLANE_RIGHT, PLANE_BOTTOM, PLANE_TOP, PLANE_NEAR, PLANE_FAR,
};
pub use orientation::{MouseLook, Orientation, PITCH_LIMIT};
