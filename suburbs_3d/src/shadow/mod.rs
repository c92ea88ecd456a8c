//! Shadow module - directional light, shadow map, and the two-pass pipeline

pub mod light;
pub mod shadow_map;
pub mod shadow_pipeline;

pub use light::*;
pub use shadow_map::*;
pub use shadow_pipeline::*;
