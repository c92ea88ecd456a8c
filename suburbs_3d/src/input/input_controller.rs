/// Keyboard bindings: camera movement, render mode, lighting, fog, rain
///
/// | Key     | Action                                  |
/// |---------|-----------------------------------------|
/// | W/A/S/D | Move (held, applied once per frame)     |
/// | P       | Cycle Fill -> Line -> Point             |
/// | L / K   | Brighten / dim the sun                  |
/// | M / N   | Thicken / thin the fog (repeats)        |
/// | Z / X   | Rotate the light -/+ (repeats)          |
/// | R       | Toggle rain                             |
/// | Escape  | Request close                           |

use winit::event::ElementState;
use winit::keyboard::KeyCode;
use crate::camera::{Camera, CameraMode, MoveDirection};
use crate::graphics_device::PolygonMode;
use crate::scene::{FrameContext, SkyboxVariant};

/// State change the caller may need to forward (to the device, the
/// skybox loader, or the window)
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ControlEvent {
    CloseRequested,
    PolygonModeChanged(PolygonMode),
    SkyboxChanged(SkyboxVariant),
    /// Light color or fog changed without a day/night switch
    LightingChanged,
    /// New light angle in degrees
    LightRotated(f32),
    RainToggled(bool),
}

/// Maps key events onto the frame context
#[derive(Debug, Clone, Copy)]
pub struct InputController {
    move_speed: f32,
}

impl InputController {
    pub fn new(move_speed: f32) -> Self {
        Self { move_speed }
    }

    pub fn move_speed(&self) -> f32 {
        self.move_speed
    }

    /// Handle one key event. Ignored entirely while the camera is scripted.
    pub fn key_event(
        &self,
        ctx: &mut FrameContext,
        mode: &CameraMode,
        key: KeyCode,
        state: ElementState,
    ) -> Option<ControlEvent> {
        if !mode.is_interactive() {
            return None;
        }

        let fresh = ctx.keys.apply(key, state);
        if state != ElementState::Pressed {
            return None;
        }

        // Fresh presses only
        if fresh {
            match key {
                KeyCode::Escape => return Some(ControlEvent::CloseRequested),
                KeyCode::KeyP => {
                    ctx.polygon_mode = ctx.polygon_mode.next();
                    return Some(ControlEvent::PolygonModeChanged(ctx.polygon_mode));
                }
                KeyCode::KeyL => return Some(Self::lighting_event(ctx, |l| l.brighten())),
                KeyCode::KeyK => return Some(Self::lighting_event(ctx, |l| l.dim())),
                KeyCode::KeyR => {
                    ctx.rain_enabled = !ctx.rain_enabled;
                    crate::engine_debug!("suburbs3d::InputController",
                        "Rain {}", if ctx.rain_enabled { "on" } else { "off" });
                    return Some(ControlEvent::RainToggled(ctx.rain_enabled));
                }
                _ => {}
            }
        }

        // Fresh presses and auto-repeats
        match key {
            KeyCode::KeyM => {
                ctx.lighting.increase_fog();
                Some(ControlEvent::LightingChanged)
            }
            KeyCode::KeyN => {
                ctx.lighting.decrease_fog();
                Some(ControlEvent::LightingChanged)
            }
            KeyCode::KeyZ => {
                ctx.light.rotate_by(-ctx.light_angle_step);
                Some(ControlEvent::LightRotated(ctx.light.angle()))
            }
            KeyCode::KeyX => {
                ctx.light.rotate_by(ctx.light_angle_step);
                Some(ControlEvent::LightRotated(ctx.light.angle()))
            }
            _ => None,
        }
    }

    /// Move `camera` for every held movement key. Returns true if it moved.
    pub fn apply_movement(&self, ctx: &FrameContext, camera: &mut Camera) -> bool {
        let bindings = [
            (KeyCode::KeyW, MoveDirection::Forward),
            (KeyCode::KeyS, MoveDirection::Backward),
            (KeyCode::KeyA, MoveDirection::Left),
            (KeyCode::KeyD, MoveDirection::Right),
        ];

        let mut moved = false;
        for (key, direction) in bindings {
            if ctx.keys.is_pressed(key) {
                camera.move_along(direction, self.move_speed);
                moved = true;
            }
        }
        moved
    }

    fn lighting_event<F>(ctx: &mut FrameContext, change: F) -> ControlEvent
    where
        F: FnOnce(&mut crate::scene::SceneLighting) -> Option<SkyboxVariant>,
    {
        match change(&mut ctx.lighting) {
            Some(skybox) => {
                ctx.skybox = skybox;
                crate::engine_info!("suburbs3d::InputController", "Switching to {:?} skybox", skybox);
                ControlEvent::SkyboxChanged(skybox)
            }
            None => ControlEvent::LightingChanged,
        }
    }
}

impl Default for InputController {
    fn default() -> Self {
        Self::new(0.3)
    }
}

#[cfg(test)]
#[path = "input_controller_tests.rs"]
mod tests;
