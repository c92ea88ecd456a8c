/// Mock GraphicsDevice for unit tests (no GPU required)
///
/// Records every state call so tests can assert on pass ordering,
/// uniform values, and bound targets.

use std::collections::VecDeque;
use std::sync::Arc;
use slotmap::SlotMap;

use crate::error::{Error, Result};
use crate::graphics_device::{
    GraphicsDevice, DepthTarget, DepthTargetDesc, SamplerDesc,
    ProgramDesc, ProgramKey, UniformLocation, UniformValue,
    RenderTargetBinding, Viewport, ClearFlags, PolygonMode, DeviceError,
};

// ============================================================================
// Mock DepthTarget
// ============================================================================

#[derive(Debug)]
pub struct MockDepthTarget {
    pub width: u32,
    pub height: u32,
    pub sampler: SamplerDesc,
}

impl DepthTarget for MockDepthTarget {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn sampler(&self) -> &SamplerDesc {
        &self.sampler
    }
}

// ============================================================================
// Recorded commands
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum MockCommand {
    BindWindow,
    BindOffscreen { width: u32, height: u32 },
    SetViewport(Viewport),
    Clear(ClearFlags),
    UseProgram(ProgramKey),
    SetUniform { program: Option<ProgramKey>, name: String, value: UniformValue },
    BindTexture { slot: u32, width: u32, height: u32 },
    SetPolygonMode(PolygonMode),
}

// ============================================================================
// Mock GraphicsDevice
// ============================================================================

pub struct MockGraphicsDevice {
    pub programs: SlotMap<ProgramKey, ProgramDesc>,
    pub commands: Vec<MockCommand>,
    /// Location index -> uniform name
    pub uniform_names: Vec<String>,
    /// Number of `uniform_location` calls received
    pub lookups: usize,
    /// Uniform names reported as missing
    pub missing_uniforms: Vec<&'static str>,
    /// Program name whose creation fails
    pub failing_program: Option<String>,
    /// Reject depth target creation
    pub fail_depth_target: bool,
    /// Size reported by created depth targets instead of the requested one
    pub depth_target_size: Option<(u32, u32)>,
    pending_errors: VecDeque<DeviceError>,
    current_program: Option<ProgramKey>,
}

impl MockGraphicsDevice {
    pub fn new() -> Self {
        Self {
            programs: SlotMap::with_key(),
            commands: Vec::new(),
            uniform_names: Vec::new(),
            lookups: 0,
            missing_uniforms: Vec::new(),
            failing_program: None,
            fail_depth_target: false,
            depth_target_size: None,
            pending_errors: VecDeque::new(),
            current_program: None,
        }
    }

    /// Queue an error returned by the next `poll_error()`
    pub fn push_error(&mut self, error: DeviceError) {
        self.pending_errors.push_back(error);
    }

    /// All values uploaded to `name`, in order
    pub fn uploads(&self, name: &str) -> Vec<&UniformValue> {
        self.commands
            .iter()
            .filter_map(|cmd| match cmd {
                MockCommand::SetUniform { name: n, value, .. } if n == name => Some(value),
                _ => None,
            })
            .collect()
    }

    /// Index of the first command matching `pred`
    pub fn position<F: Fn(&MockCommand) -> bool>(&self, pred: F) -> Option<usize> {
        self.commands.iter().position(pred)
    }
}

impl GraphicsDevice for MockGraphicsDevice {
    fn create_program(&mut self, desc: &ProgramDesc) -> Result<ProgramKey> {
        if self.failing_program.as_deref() == Some(desc.name.as_str()) {
            return Err(Error::BackendError(format!("link failed for '{}'", desc.name)));
        }
        Ok(self.programs.insert(desc.clone()))
    }

    fn create_depth_target(&mut self, desc: &DepthTargetDesc) -> Result<Arc<dyn DepthTarget>> {
        if self.fail_depth_target {
            return Err(Error::BackendError("framebuffer incomplete".to_string()));
        }
        let (width, height) = self.depth_target_size.unwrap_or((desc.width, desc.height));
        Ok(Arc::new(MockDepthTarget {
            width,
            height,
            sampler: desc.sampler,
        }))
    }

    fn bind_render_target(&mut self, target: RenderTargetBinding<'_>) {
        self.commands.push(match target {
            RenderTargetBinding::Window => MockCommand::BindWindow,
            RenderTargetBinding::Offscreen(t) => MockCommand::BindOffscreen {
                width: t.width(),
                height: t.height(),
            },
        });
    }

    fn set_viewport(&mut self, viewport: Viewport) {
        self.commands.push(MockCommand::SetViewport(viewport));
    }

    fn clear(&mut self, flags: ClearFlags) {
        self.commands.push(MockCommand::Clear(flags));
    }

    fn use_program(&mut self, program: ProgramKey) {
        self.current_program = Some(program);
        self.commands.push(MockCommand::UseProgram(program));
    }

    fn uniform_location(&mut self, _program: ProgramKey, name: &str) -> Option<UniformLocation> {
        self.lookups += 1;
        if self.missing_uniforms.iter().any(|missing| *missing == name) {
            return None;
        }
        self.uniform_names.push(name.to_string());
        Some(UniformLocation(self.uniform_names.len() as i32 - 1))
    }

    fn set_uniform(&mut self, location: UniformLocation, value: &UniformValue) {
        let name = self.uniform_names
            .get(location.0 as usize)
            .cloned()
            .unwrap_or_default();
        self.commands.push(MockCommand::SetUniform {
            program: self.current_program,
            name,
            value: value.clone(),
        });
    }

    fn bind_texture(&mut self, slot: u32, target: &dyn DepthTarget) {
        self.commands.push(MockCommand::BindTexture {
            slot,
            width: target.width(),
            height: target.height(),
        });
    }

    fn set_polygon_mode(&mut self, mode: PolygonMode) {
        self.commands.push(MockCommand::SetPolygonMode(mode));
    }

    fn poll_error(&mut self) -> Option<DeviceError> {
        self.pending_errors.pop_front()
    }
}

#[cfg(test)]
#[path = "mock_graphics_device_tests.rs"]
mod tests;
