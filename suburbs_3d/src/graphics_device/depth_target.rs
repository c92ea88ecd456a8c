/// Depth target trait, descriptor, and sampler description

/// Depth buffer format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(non_camel_case_types)]
pub enum DepthFormat {
    D16_UNORM,
    D24_UNORM,
    D32_FLOAT,
}

/// Texel filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextureFilter {
    Nearest,
    Linear,
}

/// Behavior for texture coordinates outside [0, 1]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressMode {
    Repeat,
    ClampToEdge,
    /// Out-of-range samples return `SamplerDesc::border_color`
    ClampToBorder,
}

/// Sampling state attached to a depth target
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplerDesc {
    pub min_filter: TextureFilter,
    pub mag_filter: TextureFilter,
    pub address_mode: AddressMode,
    pub border_color: [f32; 4],
}

impl SamplerDesc {
    /// Nearest filtering, clamp-to-border with maximum depth as border.
    ///
    /// Samples outside the light frustum read depth 1.0 and are never shadowed.
    pub fn shadow_border() -> Self {
        Self {
            min_filter: TextureFilter::Nearest,
            mag_filter: TextureFilter::Nearest,
            address_mode: AddressMode::ClampToBorder,
            border_color: [1.0; 4],
        }
    }
}

/// Descriptor for creating a depth-only render target
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DepthTargetDesc {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
    /// Depth format
    pub format: DepthFormat,
    /// Sampling state used when the target is read in a later pass
    pub sampler: SamplerDesc,
}

/// Off-screen depth-only render target
///
/// Implemented by backend-specific types. GPU memory is released when the
/// last reference is dropped.
pub trait DepthTarget: Send + Sync {
    /// Width in pixels
    fn width(&self) -> u32;

    /// Height in pixels
    fn height(&self) -> u32;

    /// Sampling state used when the target is bound as a texture
    fn sampler(&self) -> &SamplerDesc;
}
