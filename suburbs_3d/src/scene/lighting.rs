/// Scene lighting state: sun color, street lamps, fog, day/night

use glam::Vec3;

/// Number of point lights the lit program declares
pub const POINT_LIGHT_COUNT: usize = 12;

/// Per-channel bounds of the directional light color
pub const LIGHT_COLOR_MIN: f32 = 0.005;
pub const LIGHT_COLOR_MAX: f32 = 1.1;

/// Green channel at or below which the scene switches to night
pub const NIGHT_THRESHOLD: f32 = 0.05;

pub const BRIGHTEN_FACTOR: f32 = 1.6;
pub const DIM_FACTOR: f32 = 0.5;

pub const FOG_STEP: f32 = 0.003;
pub const FOG_MAX: f32 = 0.03;

/// Lamp color while night is active
pub const NIGHT_POINT_LIGHT_COLOR: Vec3 = Vec3::new(1.0, 1.0, 0.5);

/// Street lamp positions in world space
pub const STREET_LAMPS: [Vec3; POINT_LIGHT_COUNT] = [
    Vec3::new(0.328, 8.754, -0.139),
    Vec3::new(-2.979, 8.954, 21.839),
    Vec3::new(3.596, 8.970, 41.187),
    Vec3::new(26.455, 8.963, 3.246),
    Vec3::new(51.690, 8.967, -3.230),
    Vec3::new(-22.946, 9.074, -3.217),
    Vec3::new(-41.214, 8.971, 3.248),
    Vec3::new(-2.952, 8.970, -22.456),
    Vec3::new(3.542, 8.967, -47.387),
    Vec3::new(-30.462, 8.857, -42.352),
    Vec3::new(-41.335, 8.834, -42.095),
    Vec3::new(-52.796, 8.852, -41.965),
];

/// Which cubemap the skybox samples
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SkyboxVariant {
    #[default]
    Day,
    Night,
}

/// Lighting uniforms fed to the lit program every frame
#[derive(Debug, Clone, PartialEq)]
pub struct SceneLighting {
    /// Directional light color
    pub light_color: Vec3,
    pub point_lights: [Vec3; POINT_LIGHT_COUNT],
    /// Black while the lamps are off
    pub point_light_color: Vec3,
    pub fog_density: f32,
    night: bool,
}

impl Default for SceneLighting {
    fn default() -> Self {
        Self {
            light_color: Vec3::ONE,
            point_lights: STREET_LAMPS,
            point_light_color: Vec3::ZERO,
            fog_density: 0.0,
            night: false,
        }
    }
}

impl SceneLighting {
    pub fn is_night(&self) -> bool {
        self.night
    }

    /// Skybox matching the current time of day
    pub fn skybox(&self) -> SkyboxVariant {
        if self.night {
            SkyboxVariant::Night
        } else {
            SkyboxVariant::Day
        }
    }

    /// Scale the light up. Returns the new skybox if day returns.
    pub fn brighten(&mut self) -> Option<SkyboxVariant> {
        self.scale_light(BRIGHTEN_FACTOR);

        if self.light_color.y > NIGHT_THRESHOLD && self.night {
            self.night = false;
            self.point_light_color = Vec3::ZERO;
            return Some(SkyboxVariant::Day);
        }
        None
    }

    /// Scale the light down. Returns the new skybox if night falls.
    pub fn dim(&mut self) -> Option<SkyboxVariant> {
        self.scale_light(DIM_FACTOR);

        if self.light_color.y <= NIGHT_THRESHOLD && !self.night {
            self.night = true;
            self.point_light_color = NIGHT_POINT_LIGHT_COLOR;
            return Some(SkyboxVariant::Night);
        }
        None
    }

    pub fn increase_fog(&mut self) {
        self.fog_density = (self.fog_density + FOG_STEP).min(FOG_MAX);
    }

    pub fn decrease_fog(&mut self) {
        self.fog_density = (self.fog_density - FOG_STEP).max(0.0);
    }

    fn scale_light(&mut self, factor: f32) {
        self.light_color = (self.light_color * factor)
            .clamp(Vec3::splat(LIGHT_COLOR_MIN), Vec3::splat(LIGHT_COLOR_MAX));
    }
}

#[cfg(test)]
#[path = "lighting_tests.rs"]
mod tests;
