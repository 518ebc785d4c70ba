//! Global uniforms shared by every pipeline: camera, lighting, and sky.
//!
//! Bound at slot 0 in both the sky and the forward pipeline. The layout
//! must match the `Globals` struct in `forward.wgsl` and `sky.wgsl`.

use crate::{
    gfx::camera::camera_utils::CameraUniform,
    wgpu_utils::{
        binding_builder::{BindGroupBuilder, BindGroupLayoutBuilder, BindGroupLayoutWithDesc},
        binding_types,
        uniform_buffer::UniformBuffer,
    },
};

/// Packed global uniform content. Everything is vec4-shaped so the Rust
/// and WGSL layouts agree without manual padding.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct GlobalUBOContent {
    /// Camera eye position (xyz, w unused).
    view_position: [f32; 4],
    view_proj: [[f32; 4]; 4],
    /// Key light position (xyz) and intensity (w).
    light_position: [f32; 4],
    /// Key light color (rgb, w unused).
    light_color: [f32; 4],
    /// Hemispheric ambient color (rgb) and intensity (w).
    ambient: [f32; 4],
    /// Sky gradient color straight up (rgb, w unused).
    sky_zenith: [f32; 4],
    /// Sky gradient color at the horizon (rgb, w unused).
    sky_horizon: [f32; 4],
}

/// Key light plus hemispheric ambient term.
///
/// The pair mirrors the directional + hemispheric lighting the demo
/// scenes are built around; intensities are blended in the shader.
#[derive(Copy, Clone, Debug)]
pub struct LightConfig {
    pub position: [f32; 3],
    pub color: [f32; 3],
    pub intensity: f32,
    pub ambient_color: [f32; 3],
    pub ambient_intensity: f32,
}

impl Default for LightConfig {
    fn default() -> Self {
        Self {
            position: [5.0, -10.0, 20.0],
            color: [1.0, 1.0, 1.0],
            intensity: 0.6,
            ambient_color: [1.0, 1.0, 1.0],
            ambient_intensity: 0.4,
        }
    }
}

/// Background gradient drawn by the sky pass.
#[derive(Copy, Clone, Debug)]
pub struct SkyConfig {
    pub zenith_color: [f32; 3],
    pub horizon_color: [f32; 3],
}

impl Default for SkyConfig {
    fn default() -> Self {
        Self {
            zenith_color: [0.05, 0.07, 0.12],
            horizon_color: [0.12, 0.14, 0.2],
        }
    }
}

impl SkyConfig {
    /// Near-black sky, the backdrop both demo scenes use.
    pub fn night() -> Self {
        Self {
            zenith_color: [0.01, 0.01, 0.01],
            horizon_color: [0.03, 0.03, 0.04],
        }
    }
}

pub type GlobalUBO = UniformBuffer<GlobalUBOContent>;

/// Writes camera, light, and sky state for this frame.
pub fn update_global_ubo(
    ubo: &mut GlobalUBO,
    queue: &wgpu::Queue,
    camera: CameraUniform,
    light: &LightConfig,
    sky: &SkyConfig,
) {
    let content = GlobalUBOContent {
        view_position: camera.view_position,
        view_proj: camera.view_proj,
        light_position: [
            light.position[0],
            light.position[1],
            light.position[2],
            light.intensity,
        ],
        light_color: [light.color[0], light.color[1], light.color[2], 0.0],
        ambient: [
            light.ambient_color[0],
            light.ambient_color[1],
            light.ambient_color[2],
            light.ambient_intensity,
        ],
        sky_zenith: [
            sky.zenith_color[0],
            sky.zenith_color[1],
            sky.zenith_color[2],
            0.0,
        ],
        sky_horizon: [
            sky.horizon_color[0],
            sky.horizon_color[1],
            sky.horizon_color[2],
            0.0,
        ],
    };

    ubo.update_content(queue, content);
}

/// Layout and bind group for the global uniform buffer (slot 0).
pub struct GlobalBindings {
    bind_group_layout: BindGroupLayoutWithDesc,
    bind_group: Option<wgpu::BindGroup>,
}

impl GlobalBindings {
    pub fn new(device: &wgpu::Device) -> Self {
        let bind_group_layout = BindGroupLayoutBuilder::new()
            .next_binding_rendering(binding_types::uniform())
            .create(device, "Globals Bind Group Layout");

        GlobalBindings {
            bind_group_layout,
            bind_group: None,
        }
    }

    pub fn create_bind_group(&mut self, device: &wgpu::Device, ubo: &GlobalUBO) {
        self.bind_group = Some(
            BindGroupBuilder::new(&self.bind_group_layout)
                .resource(ubo.binding_resource())
                .create(device, "Globals Bind Group"),
        );
    }

    pub fn bind_group_layout(&self) -> &wgpu::BindGroupLayout {
        &self.bind_group_layout.layout
    }

    /// # Panics
    /// Panics if `create_bind_group()` has not been called yet.
    pub fn bind_group(&self) -> &wgpu::BindGroup {
        self.bind_group
            .as_ref()
            .expect("global bind group has not been created yet")
    }
}
