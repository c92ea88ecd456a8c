/// Shadow map - square depth target rendered from the light's point of view

use std::sync::Arc;
use crate::error::{Error, Result};
use crate::graphics_device::{
    DepthFormat, DepthTarget, DepthTargetDesc, GraphicsDevice, SamplerDesc, Viewport,
};

/// Default shadow map resolution (texels per side)
pub const DEFAULT_SHADOW_RESOLUTION: u32 = 2048;

/// Depth texture plus the offscreen target that renders into it.
///
/// Sampled with nearest filtering; lookups outside the map read depth 1.0
/// (fully lit). Released when the last handle is dropped.
pub struct ShadowMap {
    target: Arc<dyn DepthTarget>,
}

impl ShadowMap {
    /// Descriptor for a `resolution` x `resolution` shadow map
    pub fn desc(resolution: u32) -> DepthTargetDesc {
        DepthTargetDesc {
            width: resolution,
            height: resolution,
            format: DepthFormat::D32_FLOAT,
            sampler: SamplerDesc::shadow_border(),
        }
    }

    /// Allocate the shadow map on `device`.
    ///
    /// # Errors
    ///
    /// A zero resolution or a target the device cannot complete is fatal.
    pub fn new(device: &mut dyn GraphicsDevice, resolution: u32) -> Result<Self> {
        if resolution == 0 {
            return Err(crate::engine_err!(
                "suburbs3d::ShadowMap",
                Error::InitializationFailed("Shadow map resolution must be non-zero".to_string())
            ));
        }

        let desc = Self::desc(resolution);
        let target = device.create_depth_target(&desc).map_err(|err| {
            crate::engine_err!(
                "suburbs3d::ShadowMap",
                Error::InitializationFailed(format!("Shadow map {}x{}: {}", resolution, resolution, err))
            )
        })?;

        if target.width() != resolution || target.height() != resolution {
            crate::engine_bail!("suburbs3d::ShadowMap",
                "Depth target is {}x{}, requested {}x{}",
                target.width(), target.height(), resolution, resolution);
        }

        crate::engine_info!("suburbs3d::ShadowMap",
            "Shadow map created ({}x{})", resolution, resolution);

        Ok(Self { target })
    }

    /// Wrap an existing depth target
    pub fn from_target(target: Arc<dyn DepthTarget>) -> Self {
        Self { target }
    }

    pub fn target(&self) -> &dyn DepthTarget {
        self.target.as_ref()
    }

    /// Texels per side
    pub fn resolution(&self) -> u32 {
        self.target.width()
    }

    /// Viewport covering the whole map
    pub fn viewport(&self) -> Viewport {
        Viewport::from_size(self.target.width(), self.target.height())
    }
}

#[cfg(test)]
#[path = "shadow_map_tests.rs"]
mod tests;
