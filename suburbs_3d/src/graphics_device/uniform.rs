/// Uniform values and the per-program uniform location cache

use glam::{Mat3, Mat4, Vec3};
use rustc_hash::FxHashMap;
use crate::graphics_device::{GraphicsDevice, ProgramKey};

/// Backend uniform location
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UniformLocation(pub i32);

/// Value uploaded to a shader uniform
#[derive(Debug, Clone, PartialEq)]
pub enum UniformValue {
    Mat4(Mat4),
    Mat3(Mat3),
    Vec3(Vec3),
    Vec3Array(Vec<Vec3>),
    Float(f32),
    /// Integers, including sampler slots
    Int(i32),
}

impl UniformValue {
    /// Raw column-major bytes as they are sent to the device
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            UniformValue::Mat4(m) => bytemuck::bytes_of(m),
            UniformValue::Mat3(m) => bytemuck::bytes_of(m),
            UniformValue::Vec3(v) => bytemuck::bytes_of(v),
            UniformValue::Vec3Array(values) => bytemuck::cast_slice(values),
            UniformValue::Float(f) => bytemuck::bytes_of(f),
            UniformValue::Int(i) => bytemuck::bytes_of(i),
        }
    }
}

/// Cache of `(program, uniform name) -> location` lookups.
///
/// Missing uniforms are cached too, so a lookup miss is reported once and
/// later uploads to that name are skipped silently.
#[derive(Debug, Default)]
pub struct UniformCache {
    locations: FxHashMap<(ProgramKey, &'static str), Option<UniformLocation>>,
}

impl UniformCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve a uniform location, querying the device on first use
    pub fn location(
        &mut self,
        device: &mut dyn GraphicsDevice,
        program: ProgramKey,
        name: &'static str,
    ) -> Option<UniformLocation> {
        *self.locations.entry((program, name)).or_insert_with(|| {
            let location = device.uniform_location(program, name);
            if location.is_none() {
                crate::engine_debug!("suburbs3d::UniformCache",
                    "Uniform '{}' not found in program {:?}", name, program);
            }
            location
        })
    }

    /// Upload `value` to `name` on `program` (which must be current).
    ///
    /// Returns false if the program has no such uniform.
    pub fn upload(
        &mut self,
        device: &mut dyn GraphicsDevice,
        program: ProgramKey,
        name: &'static str,
        value: &UniformValue,
    ) -> bool {
        match self.location(device, program, name) {
            Some(location) => {
                device.set_uniform(location, value);
                true
            }
            None => false,
        }
    }

    /// Number of cached lookups (hits and misses)
    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    /// Forget all cached locations (after programs are recreated)
    pub fn clear(&mut self) {
        self.locations.clear();
    }
}

#[cfg(test)]
#[path = "uniform_tests.rs"]
mod tests;
