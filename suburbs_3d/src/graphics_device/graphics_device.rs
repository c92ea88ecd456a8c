/// GraphicsDevice trait - immediate-mode GPU state interface
///
/// The renderer never talks to a graphics API directly. A backend (OpenGL
/// context, Vulkan wrapper, test recorder) implements this trait and is
/// passed by `&mut` into every render call.

use std::fmt;
use std::sync::Arc;
use bitflags::bitflags;
use crate::error::Result;
use crate::graphics_device::{
    DepthTarget, DepthTargetDesc, ProgramDesc, ProgramKey,
    UniformLocation, UniformValue,
};

// ============================================================================
// Common types
// ============================================================================

/// Viewport rectangle in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    /// Viewport covering `width` x `height` from the origin
    pub fn from_size(width: u32, height: u32) -> Self {
        Self { x: 0, y: 0, width, height }
    }

    /// Width / height. Returns 1.0 for an empty viewport.
    pub fn aspect_ratio(&self) -> f32 {
        if self.height == 0 {
            1.0
        } else {
            self.width as f32 / self.height as f32
        }
    }
}

bitflags! {
    /// Buffers cleared by `GraphicsDevice::clear`
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct ClearFlags: u32 {
        const COLOR = 0b01;
        const DEPTH = 0b10;
    }
}

/// Rasterization mode for polygons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PolygonMode {
    /// Solid faces
    #[default]
    Fill,
    /// Wireframe
    Line,
    /// Vertices only
    Point,
}

impl PolygonMode {
    /// Next mode in the Fill -> Line -> Point -> Fill cycle
    pub fn next(self) -> Self {
        match self {
            PolygonMode::Fill => PolygonMode::Line,
            PolygonMode::Line => PolygonMode::Point,
            PolygonMode::Point => PolygonMode::Fill,
        }
    }
}

/// Where subsequent draws are rendered
#[derive(Clone, Copy)]
pub enum RenderTargetBinding<'a> {
    /// The window's default framebuffer
    Window,
    /// An off-screen depth-only target (shadow map)
    Offscreen(&'a dyn DepthTarget),
}

impl fmt::Debug for RenderTargetBinding<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderTargetBinding::Window => write!(f, "Window"),
            RenderTargetBinding::Offscreen(target) => {
                write!(f, "Offscreen({}x{})", target.width(), target.height())
            }
        }
    }
}

/// Error flag reported by the device after a state-changing call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceError {
    InvalidEnum,
    InvalidValue,
    InvalidOperation,
    OutOfMemory,
    InvalidFramebufferOperation,
}

impl fmt::Display for DeviceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DeviceError::InvalidEnum => "INVALID_ENUM",
            DeviceError::InvalidValue => "INVALID_VALUE",
            DeviceError::InvalidOperation => "INVALID_OPERATION",
            DeviceError::OutOfMemory => "OUT_OF_MEMORY",
            DeviceError::InvalidFramebufferOperation => "INVALID_FRAMEBUFFER_OPERATION",
        };
        f.write_str(name)
    }
}

// ============================================================================
// GraphicsDevice trait
// ============================================================================

/// Backend interface used by the render pipeline.
///
/// Resource creation happens once at startup and returns `Result`; a failure
/// there is fatal. Per-frame state calls have no failure branch: errors are
/// queued by the backend and drained through `poll_error()` (see `device_check!`).
pub trait GraphicsDevice {
    /// Compile and link a shader program
    fn create_program(&mut self, desc: &ProgramDesc) -> Result<ProgramKey>;

    /// Create a depth-only render target that can later be sampled
    fn create_depth_target(&mut self, desc: &DepthTargetDesc) -> Result<Arc<dyn DepthTarget>>;

    /// Redirect subsequent draws to `target`
    fn bind_render_target(&mut self, target: RenderTargetBinding<'_>);

    /// Set the viewport rectangle
    fn set_viewport(&mut self, viewport: Viewport);

    /// Clear the selected buffers of the bound target
    fn clear(&mut self, flags: ClearFlags);

    /// Make `program` current for uniform uploads and draws
    fn use_program(&mut self, program: ProgramKey);

    /// Look up a uniform by name. `None` if the program has no such uniform.
    fn uniform_location(&mut self, program: ProgramKey, name: &str) -> Option<UniformLocation>;

    /// Upload a uniform value to the current program
    fn set_uniform(&mut self, location: UniformLocation, value: &UniformValue);

    /// Bind a depth target as a texture on sampler `slot`
    fn bind_texture(&mut self, slot: u32, target: &dyn DepthTarget);

    /// Change the polygon rasterization mode
    fn set_polygon_mode(&mut self, mode: PolygonMode);

    /// Pop the oldest pending device error, if any
    fn poll_error(&mut self) -> Option<DeviceError>;
}
