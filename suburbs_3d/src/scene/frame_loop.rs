/// Frame loop - owns the camera, frame context, and pipeline, and turns
/// window events and clock ticks into rendered frames.

use winit::event::ElementState;
use winit::keyboard::KeyCode;
use crate::camera::{Camera, CameraMode, IntroAnimation, MouseLook, Orientation};
use crate::config::SceneConfig;
use crate::error::Result;
use crate::graphics_device::{GraphicsDevice, ScenePrograms};
use crate::input::{ControlEvent, InputController};
use crate::scene::{FrameContext, RainEffect};
use crate::shadow::{LightTransform, SceneDrawer, ShadowRenderPipeline};

/// The window itself (event pump, buffer swap) stays with the caller:
///
/// ```
/// use suburbs_3d::suburbs3d::{Result, SceneConfig};
/// use suburbs_3d::suburbs3d::device::GraphicsDevice;
/// use suburbs_3d::suburbs3d::scene::FrameLoop;
/// use suburbs_3d::suburbs3d::shadow::SceneDrawer;
///
/// fn run(
///     device: &mut dyn GraphicsDevice,
///     drawer: &mut dyn SceneDrawer,
///     mut clock: impl FnMut() -> f32,
///     mut swap_buffers: impl FnMut(),
/// ) -> Result<()> {
///     let mut frame_loop = FrameLoop::new(device, &SceneConfig::default(), clock())?;
///     while !frame_loop.close_requested() {
///         // forward window events to key_event / cursor_moved / resize
///         frame_loop.frame(device, drawer, clock())?;
///         swap_buffers();
///     }
///     Ok(())
/// }
/// ```
pub struct FrameLoop {
    camera: Camera,
    mode: CameraMode,
    intro: IntroAnimation,
    mouse_look: MouseLook,
    controller: InputController,
    context: FrameContext,
    pipeline: ShadowRenderPipeline,
    rain: RainEffect,
    close_requested: bool,
}

impl FrameLoop {
    /// Create programs, shadow map, camera, and frame state.
    ///
    /// `start_time` (seconds) starts the scripted intro.
    ///
    /// # Errors
    ///
    /// Any failure here is fatal: program creation, an incomplete shadow
    /// target, or a degenerate camera/light configuration.
    pub fn new(device: &mut dyn GraphicsDevice, config: &SceneConfig, start_time: f32) -> Result<Self> {
        let programs = ScenePrograms::create(device)?;
        Self::with_programs(device, programs, config, start_time)
    }

    /// Same as `new` with programs created by the caller
    pub fn with_programs(
        device: &mut dyn GraphicsDevice,
        programs: ScenePrograms,
        config: &SceneConfig,
        start_time: f32,
    ) -> Result<Self> {
        let camera = Camera::new(config.camera_position, config.camera_target, config.camera_up)?;
        let context = FrameContext::new(config)?;
        let pipeline = ShadowRenderPipeline::new(
            device,
            programs,
            config.shadow_resolution,
            config.shadow_projection,
        )?;

        if let Some(bounds) = &config.scene_bounds {
            pipeline.covers(&context.light, bounds);
        }

        device.set_polygon_mode(context.polygon_mode);
        crate::device_check!(device);

        crate::engine_info!("suburbs3d::FrameLoop",
            "Scene ready, intro runs for {:.1}s", config.intro_duration);

        Ok(Self {
            camera,
            mode: CameraMode::scripted(start_time, config.intro_duration),
            intro: config.intro,
            mouse_look: MouseLook::new(config.mouse_sensitivity, config.pitch_limit),
            controller: InputController::new(config.move_speed),
            context,
            pipeline,
            rain: RainEffect::new(config.rain),
            close_requested: false,
        })
    }

    // ===== ACCESSORS =====

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn mode(&self) -> &CameraMode {
        &self.mode
    }

    pub fn context(&self) -> &FrameContext {
        &self.context
    }

    pub fn context_mut(&mut self) -> &mut FrameContext {
        &mut self.context
    }

    pub fn pipeline(&self) -> &ShadowRenderPipeline {
        &self.pipeline
    }

    pub fn rain(&self) -> &RainEffect {
        &self.rain
    }

    pub fn close_requested(&self) -> bool {
        self.close_requested
    }

    // ===== EVENTS =====

    /// Forward a keyboard event
    pub fn key_event(
        &mut self,
        device: &mut dyn GraphicsDevice,
        key: KeyCode,
        state: ElementState,
    ) -> Option<ControlEvent> {
        let event = self.controller.key_event(&mut self.context, &self.mode, key, state)?;

        match event {
            ControlEvent::CloseRequested => {
                crate::engine_info!("suburbs3d::FrameLoop", "Close requested");
                self.close_requested = true;
            }
            ControlEvent::PolygonModeChanged(mode) => {
                device.set_polygon_mode(mode);
                crate::device_check!(device);
            }
            ControlEvent::RainToggled(false) => self.rain.pause(),
            _ => {}
        }

        Some(event)
    }

    /// Forward a cursor position. Ignored while the camera is scripted.
    pub fn cursor_moved(&mut self, x: f64, y: f64) {
        if !self.mode.is_interactive() {
            return;
        }
        if let Some(orientation) = self.mouse_look.cursor_moved(x, y) {
            self.camera.set_orientation(&orientation);
        }
    }

    /// Forward a window resize
    pub fn resize(&mut self, width: u32, height: u32) -> bool {
        self.context.resize(width, height)
    }

    /// Window lost focus: release events will not arrive for held keys
    pub fn focus_lost(&mut self) {
        self.context.keys.clear();
    }

    // ===== FRAME =====

    /// Advance camera and effects to `now` (seconds) and render one frame.
    pub fn frame(
        &mut self,
        device: &mut dyn GraphicsDevice,
        drawer: &mut dyn SceneDrawer,
        now: f32,
    ) -> Result<LightTransform> {
        if self.mode.update(&mut self.camera, &self.intro, now)? {
            // Continue mouse look from where the intro left the camera
            self.mouse_look.reset(Orientation::from_front(self.camera.front()));
        }

        if self.mode.is_interactive() {
            self.controller.apply_movement(&self.context, &mut self.camera);
        }

        let transform = self.pipeline.render_frame(device, &mut self.context, &self.camera, drawer)?;

        if self.context.rain_enabled {
            self.rain.update(now);
            let pass = self.pipeline.final_draw_pass(&self.context, &transform.light_space);
            drawer.draw_rain(device, &pass, &self.rain.drop_matrices())?;
        }

        crate::device_check!(device);
        Ok(transform)
    }
}

#[cfg(test)]
#[path = "frame_loop_tests.rs"]
mod tests;
