/// Per-window frame state shared by the render passes and input handling

use glam::Mat4;
use crate::config::SceneConfig;
use crate::error::Result;
use crate::graphics_device::{PolygonMode, UniformCache, Viewport};
use crate::input::KeyState;
use crate::scene::{SceneLighting, SkyboxVariant};
use crate::shadow::DirectionalLight;

/// Perspective parameters of the scene camera
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PerspectiveDesc {
    pub fov_y_degrees: f32,
    pub near: f32,
    pub far: f32,
}

impl PerspectiveDesc {
    /// OpenGL-convention perspective matrix for `aspect_ratio`
    pub fn matrix(&self, aspect_ratio: f32) -> Mat4 {
        Mat4::perspective_rh_gl(self.fov_y_degrees.to_radians(), aspect_ratio, self.near, self.far)
    }
}

/// Everything that varies between frames, owned by the frame loop and
/// passed by `&mut` to whoever needs it.
#[derive(Debug)]
pub struct FrameContext {
    /// Camera view matrix, refreshed at the start of each frame
    pub view: Mat4,
    pub projection: Mat4,
    pub perspective: PerspectiveDesc,
    pub window_viewport: Viewport,
    pub light: DirectionalLight,
    /// Degrees per light rotation step
    pub light_angle_step: f32,
    pub lighting: SceneLighting,
    pub skybox: SkyboxVariant,
    pub uniforms: UniformCache,
    pub keys: KeyState,
    pub polygon_mode: PolygonMode,
    pub rain_enabled: bool,
}

impl FrameContext {
    /// Build the initial frame state.
    ///
    /// # Errors
    ///
    /// `DegenerateLightDirection` if the configured light cannot be used.
    pub fn new(config: &SceneConfig) -> Result<Self> {
        let perspective = PerspectiveDesc {
            fov_y_degrees: config.fov_y_degrees,
            near: config.near_plane,
            far: config.far_plane,
        };
        let window_viewport = Viewport::from_size(config.window_width, config.window_height);
        let lighting = config.lighting.clone();

        Ok(Self {
            view: Mat4::IDENTITY,
            projection: perspective.matrix(window_viewport.aspect_ratio()),
            perspective,
            window_viewport,
            light: DirectionalLight::new(config.light_base_direction, config.light_angle)?,
            light_angle_step: config.light_angle_step,
            skybox: lighting.skybox(),
            lighting,
            uniforms: UniformCache::new(),
            keys: KeyState::new(),
            polygon_mode: PolygonMode::default(),
            rain_enabled: false,
        })
    }

    /// Handle a window resize.
    ///
    /// A zero dimension (minimized window) is ignored and returns false.
    pub fn resize(&mut self, width: u32, height: u32) -> bool {
        if width == 0 || height == 0 {
            crate::engine_debug!("suburbs3d::FrameContext",
                "Ignoring resize to {}x{}", width, height);
            return false;
        }

        self.window_viewport = Viewport::from_size(width, height);
        self.projection = self.perspective.matrix(self.window_viewport.aspect_ratio());

        crate::engine_info!("suburbs3d::FrameContext", "Window resized to {}x{}", width, height);
        true
    }
}

#[cfg(test)]
#[path = "frame_context_tests.rs"]
mod tests;
