/// Directional light and the light-space transform used for shadow mapping.

use glam::{Mat3, Mat4, Vec3};
use crate::camera::Frustum;
use crate::error::{Error, Result};

/// Orthographic volume rendered into the shadow map, in light view space.
///
/// The bounds are sized to the authored scene, not derived from it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShadowProjection {
    /// Left/right/bottom/top are ±half_extent
    pub half_extent: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for ShadowProjection {
    fn default() -> Self {
        Self {
            half_extent: 100.0,
            near: -100.0,
            far: 100.0,
        }
    }
}

impl ShadowProjection {
    /// OpenGL-convention orthographic projection matrix
    pub fn matrix(&self) -> Mat4 {
        let h = self.half_extent;
        Mat4::orthographic_rh_gl(-h, h, -h, h, self.near, self.far)
    }
}

/// Rotation of the light about world +Y by `angle` degrees
pub fn light_rotation(angle: f32) -> Mat3 {
    Mat3::from_rotation_y(angle.to_radians())
}

/// Light-space transform (`projection * view`) for a light at `light_angle`
/// degrees around +Y from `base_direction`, with the default ±100 volume.
pub fn compute_light_space_transform(light_angle: f32, base_direction: Vec3) -> Mat4 {
    LightTransform::compute(light_angle, base_direction, &ShadowProjection::default()).light_space
}

/// View, projection, and combined light-space matrix for one frame.
///
/// Computed once per frame and shared by the depth and final passes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LightTransform {
    pub view: Mat4,
    pub projection: Mat4,
    pub light_space: Mat4,
}

impl LightTransform {
    /// Look from `rotate_y(angle) * base_direction` toward the origin, +Y up,
    /// through the orthographic `projection`.
    pub fn compute(angle: f32, base_direction: Vec3, projection: &ShadowProjection) -> Self {
        let eye = light_rotation(angle) * base_direction;
        let view = Mat4::look_at_rh(eye, Vec3::ZERO, Vec3::Y);
        let projection = projection.matrix();

        Self {
            view,
            projection,
            light_space: projection * view,
        }
    }

    /// Shadow volume planes in world space
    pub fn frustum(&self) -> Frustum {
        Frustum::from_view_projection(&self.light_space)
    }
}

/// Single directional light casting the scene's shadows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectionalLight {
    base_direction: Vec3,
    angle: f32,
}

impl DirectionalLight {
    /// Create a light pointing from the origin toward `base_direction`,
    /// rotated by `angle` degrees around +Y.
    ///
    /// # Errors
    ///
    /// `DegenerateLightDirection` if the direction is zero or vertical
    /// (the light view would have no valid up axis at any angle).
    pub fn new(base_direction: Vec3, angle: f32) -> Result<Self> {
        let horizontal = base_direction.cross(Vec3::Y);
        if !base_direction.is_finite() || horizontal.length_squared() < 1e-10 {
            return Err(Error::DegenerateLightDirection);
        }

        Ok(Self {
            base_direction,
            angle,
        })
    }

    /// Unrotated direction toward the light
    pub fn base_direction(&self) -> Vec3 {
        self.base_direction
    }

    /// Rotation around +Y in degrees
    pub fn angle(&self) -> f32 {
        self.angle
    }

    pub fn set_angle(&mut self, angle: f32) {
        self.angle = angle;
    }

    /// Add `delta` degrees to the rotation
    pub fn rotate_by(&mut self, delta: f32) {
        self.angle += delta;
    }

    /// World-space direction toward the light
    pub fn direction(&self) -> Vec3 {
        light_rotation(self.angle) * self.base_direction
    }

    /// Direction toward the light in eye space of `view`,
    /// `inverse_transpose(mat3(view * rotation)) * base`.
    pub fn eye_space_direction(&self, view: &Mat4) -> Vec3 {
        let rotation = Mat4::from_mat3(light_rotation(self.angle));
        let normal_matrix = Mat3::from_mat4(*view * rotation).inverse().transpose();
        normal_matrix * self.base_direction
    }

    /// Light-space transform for the current angle
    pub fn transform(&self, projection: &ShadowProjection) -> LightTransform {
        LightTransform::compute(self.angle, self.base_direction, projection)
    }
}

#[cfg(test)]
#[path = "light_tests.rs"]
mod tests;
