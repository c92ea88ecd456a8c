/// Two-pass shadow rendering: depth from the light, then the lit scene
/// sampling that depth.
///
/// The light-space transform is computed once per frame and the same
/// matrix is handed to both passes.

use glam::Mat4;
use crate::camera::{Aabb, Camera};
use crate::error::Result;
use crate::graphics_device::{
    ClearFlags, GraphicsDevice, ProgramKey, RenderTargetBinding, ScenePrograms, UniformValue,
};
use crate::scene::{FrameContext, SkyboxVariant};
use crate::shadow::{DirectionalLight, LightTransform, ShadowMap, ShadowProjection};

/// Texture slot the shadow map is bound to during the final pass
pub const SHADOW_MAP_SLOT: u32 = 3;

// Uniform names shared with the shaders
pub const UNIFORM_LIGHT_SPACE: &str = "lightSpaceTrMatrix";
pub const UNIFORM_VIEW: &str = "view";
pub const UNIFORM_PROJECTION: &str = "projection";
pub const UNIFORM_MODEL: &str = "model";
pub const UNIFORM_NORMAL_MATRIX: &str = "normalMatrix";
pub const UNIFORM_SHADOW_MAP: &str = "shadowMap";
pub const UNIFORM_LIGHT_DIR: &str = "lightDir";
pub const UNIFORM_LIGHT_COLOR: &str = "lightColor";
pub const UNIFORM_POINT_LIGHTS: &str = "pointLight";
pub const UNIFORM_POINT_LIGHT_COLOR: &str = "pointLightColor";
pub const UNIFORM_FOG_DENSITY: &str = "fogDensity";

/// Parameters handed to the scene drawer for one pass
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawPass {
    /// Program active for the pass
    pub program: ProgramKey,
    /// Depth pass: only `model` matters, skip normal and lighting uploads
    pub depth_only: bool,
    pub view: Mat4,
    pub projection: Mat4,
    pub light_space: Mat4,
}

/// Parameters handed to the scene drawer for the skybox
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SkyboxPass {
    pub program: ProgramKey,
    pub view: Mat4,
    pub projection: Mat4,
    pub variant: SkyboxVariant,
}

/// Issues the scene's draw calls. Meshes and their model matrices live
/// on the implementor's side.
///
/// Any `FnMut(&mut dyn GraphicsDevice, &DrawPass) -> Result<()>` is a
/// drawer with no skybox or rain.
pub trait SceneDrawer {
    /// Draw every object with the active program
    fn draw(&mut self, device: &mut dyn GraphicsDevice, pass: &DrawPass) -> Result<()>;

    /// Draw the skybox (final pass only, before the scene)
    fn draw_skybox(&mut self, _device: &mut dyn GraphicsDevice, _pass: &SkyboxPass) -> Result<()> {
        Ok(())
    }

    /// Draw one rain drop per model matrix (final pass only, after the scene)
    fn draw_rain(
        &mut self,
        _device: &mut dyn GraphicsDevice,
        _pass: &DrawPass,
        _drops: &[Mat4],
    ) -> Result<()> {
        Ok(())
    }
}

impl<F> SceneDrawer for F
where
    F: FnMut(&mut dyn GraphicsDevice, &DrawPass) -> Result<()>,
{
    fn draw(&mut self, device: &mut dyn GraphicsDevice, pass: &DrawPass) -> Result<()> {
        self(device, pass)
    }
}

/// Shadow-mapping render pipeline
pub struct ShadowRenderPipeline {
    programs: ScenePrograms,
    shadow_map: ShadowMap,
    projection: ShadowProjection,
}

impl ShadowRenderPipeline {
    /// Create the pipeline and allocate a `resolution`² shadow map
    pub fn new(
        device: &mut dyn GraphicsDevice,
        programs: ScenePrograms,
        resolution: u32,
        projection: ShadowProjection,
    ) -> Result<Self> {
        let shadow_map = ShadowMap::new(device, resolution)?;
        Ok(Self::with_shadow_map(programs, shadow_map, projection))
    }

    pub fn with_shadow_map(
        programs: ScenePrograms,
        shadow_map: ShadowMap,
        projection: ShadowProjection,
    ) -> Self {
        Self {
            programs,
            shadow_map,
            projection,
        }
    }

    pub fn programs(&self) -> &ScenePrograms {
        &self.programs
    }

    pub fn shadow_map(&self) -> &ShadowMap {
        &self.shadow_map
    }

    pub fn projection(&self) -> &ShadowProjection {
        &self.projection
    }

    /// Light-space transform for `light` through this pipeline's volume
    pub fn compute_light_space_transform(&self, light: &DirectionalLight) -> LightTransform {
        light.transform(&self.projection)
    }

    /// True if `bounds` lies entirely inside the shadow volume.
    ///
    /// Geometry outside is never shadowed; a warning is logged.
    pub fn covers(&self, light: &DirectionalLight, bounds: &Aabb) -> bool {
        let covered = self.compute_light_space_transform(light).frustum().contains_aabb(bounds);
        if !covered {
            crate::engine_warn!("suburbs3d::ShadowRenderPipeline",
                "Scene bounds {:?}..{:?} exceed the shadow volume (half extent {})",
                bounds.min, bounds.max, self.projection.half_extent);
        }
        covered
    }

    /// Draw pass description for the final (lit) pass
    pub fn final_draw_pass(&self, ctx: &FrameContext, light_space: &Mat4) -> DrawPass {
        DrawPass {
            program: self.programs.lit,
            depth_only: false,
            view: ctx.view,
            projection: ctx.projection,
            light_space: *light_space,
        }
    }

    /// Render scene depth from the light into the shadow map.
    ///
    /// Leaves the window bound on return.
    pub fn render_depth_pass(
        &self,
        device: &mut dyn GraphicsDevice,
        ctx: &mut FrameContext,
        light_space: &Mat4,
        drawer: &mut dyn SceneDrawer,
    ) -> Result<()> {
        let program = self.programs.depth;

        device.bind_render_target(RenderTargetBinding::Offscreen(self.shadow_map.target()));
        device.set_viewport(self.shadow_map.viewport());
        device.clear(ClearFlags::DEPTH);
        crate::device_check!(device);

        device.use_program(program);
        ctx.uniforms.upload(device, program, UNIFORM_LIGHT_SPACE, &UniformValue::Mat4(*light_space));

        let pass = DrawPass {
            program,
            depth_only: true,
            view: ctx.view,
            projection: ctx.projection,
            light_space: *light_space,
        };
        let result = drawer.draw(device, &pass);

        device.bind_render_target(RenderTargetBinding::Window);
        crate::device_check!(device);

        result
    }

    /// Render the lit scene to the window, sampling the shadow map.
    pub fn render_final_pass(
        &self,
        device: &mut dyn GraphicsDevice,
        ctx: &mut FrameContext,
        light_space: &Mat4,
        drawer: &mut dyn SceneDrawer,
    ) -> Result<()> {
        device.bind_render_target(RenderTargetBinding::Window);
        device.set_viewport(ctx.window_viewport);
        device.clear(ClearFlags::COLOR | ClearFlags::DEPTH);
        crate::device_check!(device);

        drawer.draw_skybox(device, &SkyboxPass {
            program: self.programs.skybox,
            view: ctx.view,
            projection: ctx.projection,
            variant: ctx.skybox,
        })?;

        let program = self.programs.lit;
        device.use_program(program);

        let light_dir = ctx.light.eye_space_direction(&ctx.view);
        let lighting = &ctx.lighting;
        let uploads = [
            (UNIFORM_VIEW, UniformValue::Mat4(ctx.view)),
            (UNIFORM_PROJECTION, UniformValue::Mat4(ctx.projection)),
            (UNIFORM_LIGHT_DIR, UniformValue::Vec3(light_dir)),
            (UNIFORM_LIGHT_COLOR, UniformValue::Vec3(lighting.light_color)),
            (UNIFORM_POINT_LIGHTS, UniformValue::Vec3Array(lighting.point_lights.to_vec())),
            (UNIFORM_POINT_LIGHT_COLOR, UniformValue::Vec3(lighting.point_light_color)),
            (UNIFORM_FOG_DENSITY, UniformValue::Float(lighting.fog_density)),
        ];
        for (name, value) in &uploads {
            ctx.uniforms.upload(device, program, *name, value);
        }

        device.bind_texture(SHADOW_MAP_SLOT, self.shadow_map.target());
        ctx.uniforms.upload(device, program, UNIFORM_SHADOW_MAP, &UniformValue::Int(SHADOW_MAP_SLOT as i32));
        ctx.uniforms.upload(device, program, UNIFORM_LIGHT_SPACE, &UniformValue::Mat4(*light_space));
        crate::device_check!(device);

        drawer.draw(device, &self.final_draw_pass(ctx, light_space))
    }

    /// Render one frame: depth pass, then final pass, sharing one
    /// light-space transform.
    ///
    /// Refreshes `ctx.view` from `camera` before drawing.
    pub fn render_frame(
        &self,
        device: &mut dyn GraphicsDevice,
        ctx: &mut FrameContext,
        camera: &Camera,
        drawer: &mut dyn SceneDrawer,
    ) -> Result<LightTransform> {
        ctx.view = camera.view_matrix();
        let transform = self.compute_light_space_transform(&ctx.light);

        crate::engine_trace!("suburbs3d::ShadowRenderPipeline",
            "Frame light angle {}", ctx.light.angle());

        self.render_depth_pass(device, ctx, &transform.light_space, drawer)?;
        self.render_final_pass(device, ctx, &transform.light_space, drawer)?;

        Ok(transform)
    }
}

#[cfg(test)]
#[path = "shadow_pipeline_tests.rs"]
mod tests;
