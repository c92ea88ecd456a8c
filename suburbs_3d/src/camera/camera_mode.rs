/// Camera driving mode: scripted intro or interactive control.
///
/// The mode is owned by the caller (the frame loop), not by the Camera.

use crate::error::Result;
use super::camera::Camera;

/// Who drives the camera this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CameraMode {
    /// Position driven by `IntroAnimation` until `start_time + duration`
    Scripted { start_time: f32, duration: f32 },
    /// Orientation driven by mouse look, position by movement keys
    Interactive,
}

impl CameraMode {
    pub fn scripted(start_time: f32, duration: f32) -> Self {
        CameraMode::Scripted { start_time, duration }
    }

    pub fn is_interactive(&self) -> bool {
        matches!(self, CameraMode::Interactive)
    }

    /// Advance the mode at time `now` (seconds).
    ///
    /// While scripted and inside the time window, steps the intro path.
    /// Returns `true` on the frame the mode switches to Interactive.
    pub fn update(&mut self, camera: &mut Camera, intro: &IntroAnimation, now: f32) -> Result<bool> {
        match *self {
            CameraMode::Interactive => Ok(false),
            CameraMode::Scripted { start_time, duration } => {
                if now - start_time < duration {
                    intro.step(camera)?;
                    Ok(false)
                } else {
                    *self = CameraMode::Interactive;
                    crate::engine_info!("suburbs3d::CameraMode",
                        "Intro finished after {:.2}s, switching to interactive camera", now - start_time);
                    Ok(true)
                }
            }
        }
    }
}

/// Fixed per-frame intro path: slide along -X, climb once past x = 0,
/// always facing the camera target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntroAnimation {
    /// X displacement per frame
    pub step_x: f32,
    /// Y displacement per frame once x < 0
    pub climb_y: f32,
}

impl Default for IntroAnimation {
    fn default() -> Self {
        Self {
            step_x: -0.2,
            climb_y: 0.05,
        }
    }
}

impl IntroAnimation {
    /// Move the camera one frame along the path
    pub fn step(&self, camera: &mut Camera) -> Result<()> {
        let mut position = camera.position();
        position.x += self.step_x;
        if position.x < 0.0 {
            position.y += self.climb_y;
        }
        camera.set_position(position)
    }
}

#[cfg(test)]
#[path = "camera_mode_tests.rs"]
mod tests;
