/// Graphics device module - the seam between the renderer and the GPU backend

// Module declarations
pub mod graphics_device;
pub mod depth_target;
pub mod program;
pub mod uniform;

// Re-export everything from graphics_device.rs
pub use graphics_device::*;

// Re-export from other modules
pub use depth_target::*;
pub use program::*;
pub use uniform::*;

// Mock graphics device for tests (no GPU required)
#[cfg(test)]
pub mod mock_graphics_device;
