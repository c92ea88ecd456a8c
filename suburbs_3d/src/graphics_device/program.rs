/// Shader program handles and the set of programs used by the scene

use slotmap::new_key_type;
use crate::error::{Error, Result};
use crate::graphics_device::GraphicsDevice;

new_key_type! {
    /// Handle to a linked shader program owned by the device
    pub struct ProgramKey;
}

/// Descriptor for creating a shader program
///
/// Compilation and linking belong to the backend; the renderer only keeps
/// the resulting handle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgramDesc {
    /// Debug name
    pub name: String,
    /// Vertex shader source path
    pub vertex_path: String,
    /// Fragment shader source path
    pub fragment_path: String,
}

impl ProgramDesc {
    pub fn new(name: &str, vertex_path: &str, fragment_path: &str) -> Self {
        Self {
            name: name.to_string(),
            vertex_path: vertex_path.to_string(),
            fragment_path: fragment_path.to_string(),
        }
    }

    /// Depth-only program used to fill the shadow map
    pub fn depth_map() -> Self {
        Self::new("depth_map", "shaders/depthMapShader.vert", "shaders/depthMapShader.frag")
    }

    /// Lit and shadowed scene program
    pub fn lit() -> Self {
        Self::new("basic", "shaders/basic.vert", "shaders/basic.frag")
    }

    /// Skybox program
    pub fn skybox() -> Self {
        Self::new("skybox", "shaders/skyboxShader.vert", "shaders/skyboxShader.frag")
    }
}

/// The three programs the scene renders with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScenePrograms {
    /// Depth-only program (shadow pass)
    pub depth: ProgramKey,
    /// Lit/shadowed program (final pass)
    pub lit: ProgramKey,
    /// Skybox program (final pass)
    pub skybox: ProgramKey,
}

impl ScenePrograms {
    /// Create the three standard programs.
    ///
    /// # Errors
    ///
    /// Any program failure is fatal and reported as `InitializationFailed`.
    pub fn create(device: &mut dyn GraphicsDevice) -> Result<Self> {
        Self::create_from(
            device,
            &ProgramDesc::depth_map(),
            &ProgramDesc::lit(),
            &ProgramDesc::skybox(),
        )
    }

    /// Create the programs from explicit descriptors
    pub fn create_from(
        device: &mut dyn GraphicsDevice,
        depth: &ProgramDesc,
        lit: &ProgramDesc,
        skybox: &ProgramDesc,
    ) -> Result<Self> {
        let mut create = |desc: &ProgramDesc| {
            device.create_program(desc).map_err(|err| {
                crate::engine_err!(
                    "suburbs3d::ScenePrograms",
                    Error::InitializationFailed(format!("Program '{}': {}", desc.name, err))
                )
            })
        };

        let programs = Self {
            depth: create(depth)?,
            lit: create(lit)?,
            skybox: create(skybox)?,
        };

        crate::engine_info!("suburbs3d::ScenePrograms", "Scene programs created");
        Ok(programs)
    }
}

#[cfg(test)]
#[path = "program_tests.rs"]
mod tests;
