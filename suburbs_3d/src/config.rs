/// Scene configuration - every tunable the renderer starts from

use glam::Vec3;
use crate::camera::{Aabb, IntroAnimation, PITCH_LIMIT};
use crate::scene::{RainDesc, SceneLighting};
use crate::shadow::{ShadowProjection, DEFAULT_SHADOW_RESOLUTION};

/// Startup configuration.
///
/// `SceneConfig::default()` reproduces the suburbs scene; override fields
/// with struct update syntax:
///
/// ```no_run
/// use suburbs_3d::SceneConfig;
///
/// let config = SceneConfig {
///     shadow_resolution: 4096,
///     ..SceneConfig::default()
/// };
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SceneConfig {
    // ===== CAMERA =====
    pub camera_position: Vec3,
    pub camera_target: Vec3,
    pub camera_up: Vec3,
    /// Distance per frame while a movement key is held
    pub move_speed: f32,
    /// Degrees per cursor pixel
    pub mouse_sensitivity: f32,
    pub pitch_limit: f32,

    // ===== INTRO =====
    /// Seconds of scripted camera before control is handed over
    pub intro_duration: f32,
    pub intro: IntroAnimation,

    // ===== WINDOW / PROJECTION =====
    pub window_width: u32,
    pub window_height: u32,
    pub fov_y_degrees: f32,
    pub near_plane: f32,
    pub far_plane: f32,

    // ===== SHADOWS =====
    pub shadow_resolution: u32,
    pub shadow_projection: ShadowProjection,
    pub light_base_direction: Vec3,
    /// Initial light rotation around +Y, degrees
    pub light_angle: f32,
    /// Degrees per light rotation key press
    pub light_angle_step: f32,
    /// World bounds that must receive shadows; checked once at startup
    pub scene_bounds: Option<Aabb>,

    // ===== ATMOSPHERE =====
    pub lighting: SceneLighting,
    pub rain: RainDesc,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            camera_position: Vec3::new(75.0, 11.6, -0.2),
            camera_target: Vec3::ZERO,
            camera_up: Vec3::Y,
            move_speed: 0.3,
            mouse_sensitivity: 0.1,
            pitch_limit: PITCH_LIMIT,
            intro_duration: 6.5,
            intro: IntroAnimation::default(),
            window_width: 1920,
            window_height: 1080,
            fov_y_degrees: 45.0,
            near_plane: 0.1,
            far_plane: 1000.0,
            shadow_resolution: DEFAULT_SHADOW_RESOLUTION,
            shadow_projection: ShadowProjection::default(),
            light_base_direction: Vec3::new(0.0, 1.0, 1.0),
            light_angle: 45.0,
            light_angle_step: 1.0,
            scene_bounds: None,
            lighting: SceneLighting::default(),
            rain: RainDesc::default(),
        }
    }
}
