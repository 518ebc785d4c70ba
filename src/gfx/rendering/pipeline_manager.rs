//! Render pipeline registry.
//!
//! Pipelines are registered as configurations and created lazily on
//! first use, so registration order does not have to match resource
//! creation order.

use std::{collections::HashMap, sync::Arc};

use thiserror::Error;
use wgpu::*;

use crate::gfx::scene::vertex::Vertex3D;

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("shader '{0}' is not loaded")]
    ShaderNotFound(String),
    #[error("no pipeline registered under '{0}'")]
    UnknownPipeline(String),
}

/// Everything needed to create one render pipeline.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub label: String,
    pub shader: String,
    pub bind_group_layouts: Vec<BindGroupLayout>,
    pub cull_mode: Option<Face>,
    pub depth_texture: Option<Texture>,
    pub color_targets: Vec<Option<ColorTargetState>>,
    /// Fullscreen passes generate their vertices in the shader.
    pub no_vertex_buffers: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            label: "Pipeline".to_string(),
            shader: String::new(),
            bind_group_layouts: Vec::new(),
            cull_mode: Some(Face::Back),
            depth_texture: None,
            color_targets: vec![Some(ColorTargetState {
                format: TextureFormat::Bgra8Unorm,
                blend: Some(BlendState::REPLACE),
                write_mask: ColorWrites::ALL,
            })],
            no_vertex_buffers: false,
        }
    }
}

impl PipelineConfig {
    pub fn with_label(mut self, label: &str) -> Self {
        self.label = label.to_owned();
        self
    }

    pub fn with_shader(mut self, shader: &str) -> Self {
        self.shader = shader.to_string();
        self
    }

    pub fn with_bind_group_layouts(mut self, layouts: Vec<BindGroupLayout>) -> Self {
        self.bind_group_layouts = layouts;
        self
    }

    pub fn with_cull_mode(mut self, face: Option<Face>) -> Self {
        self.cull_mode = face;
        self
    }

    pub fn with_depth_stencil(mut self, texture: Texture) -> Self {
        self.depth_texture = Some(texture);
        self
    }

    pub fn with_color_targets(mut self, targets: Vec<Option<ColorTargetState>>) -> Self {
        self.color_targets = targets;
        self
    }

    pub fn with_no_vertex_buffers(mut self) -> Self {
        self.no_vertex_buffers = true;
        self
    }
}

/// Named shader and pipeline storage with lazy pipeline creation.
pub struct PipelineManager {
    device: Arc<Device>,
    pipelines: HashMap<String, RenderPipeline>,
    pipeline_configs: HashMap<String, PipelineConfig>,
    shader_modules: HashMap<String, ShaderModule>,
}

impl PipelineManager {
    pub fn new(device: Arc<Device>) -> Self {
        Self {
            device,
            pipelines: HashMap::new(),
            pipeline_configs: HashMap::new(),
            shader_modules: HashMap::new(),
        }
    }

    /// Compiles and stores a WGSL shader under `name`.
    pub fn load_shader(&mut self, name: &str, source: &str) {
        let shader_module = self.device.create_shader_module(ShaderModuleDescriptor {
            label: Some(name),
            source: ShaderSource::Wgsl(source.into()),
        });
        self.shader_modules.insert(name.to_string(), shader_module);
    }

    /// Registers a pipeline configuration. The pipeline itself is built
    /// on the first `get_pipeline` call or by `create_all_pipelines`.
    pub fn register_pipeline(&mut self, name: &str, config: PipelineConfig) {
        self.pipeline_configs.insert(name.to_string(), config);
    }

    /// Gets a pipeline, creating it from its registered config if needed.
    pub fn get_pipeline(&mut self, name: &str) -> Result<&RenderPipeline, PipelineError> {
        if !self.pipelines.contains_key(name) {
            let config = self
                .pipeline_configs
                .get(name)
                .cloned()
                .ok_or_else(|| PipelineError::UnknownPipeline(name.to_string()))?;
            let pipeline = self.create_pipeline_from_config(name, &config)?;
            self.pipelines.insert(name.to_string(), pipeline);
        }
        Ok(&self.pipelines[name])
    }

    /// Eagerly creates every registered pipeline, so shader or layout
    /// problems surface at startup instead of mid-frame.
    pub fn create_all_pipelines(&mut self) -> Result<(), PipelineError> {
        let names: Vec<String> = self.pipeline_configs.keys().cloned().collect();
        for name in names {
            self.get_pipeline(&name)?;
        }
        Ok(())
    }

    fn create_pipeline_from_config(
        &self,
        name: &str,
        config: &PipelineConfig,
    ) -> Result<RenderPipeline, PipelineError> {
        let shader = self
            .shader_modules
            .get(&config.shader)
            .ok_or_else(|| PipelineError::ShaderNotFound(config.shader.clone()))?;

        let bind_group_layout_refs: Vec<&BindGroupLayout> =
            config.bind_group_layouts.iter().collect();
        let pipeline_layout = self
            .device
            .create_pipeline_layout(&PipelineLayoutDescriptor {
                label: Some(&format!("{} Layout", name)),
                bind_group_layouts: &bind_group_layout_refs,
                push_constant_ranges: &[],
            });

        let vertex_buffers: &[VertexBufferLayout] = if config.no_vertex_buffers {
            &[]
        } else {
            &[Vertex3D::desc()]
        };

        let depth_stencil = config
            .depth_texture
            .as_ref()
            .map(|texture| DepthStencilState {
                format: texture.format(),
                depth_write_enabled: true,
                depth_compare: CompareFunction::Less,
                stencil: StencilState::default(),
                bias: DepthBiasState::default(),
            });

        let pipeline = self
            .device
            .create_render_pipeline(&RenderPipelineDescriptor {
                label: Some(&config.label),
                layout: Some(&pipeline_layout),
                vertex: VertexState {
                    module: shader,
                    entry_point: Some("vs_main"),
                    buffers: vertex_buffers,
                    compilation_options: PipelineCompilationOptions::default(),
                },
                fragment: Some(FragmentState {
                    module: shader,
                    entry_point: Some("fs_main"),
                    targets: &config.color_targets,
                    compilation_options: PipelineCompilationOptions::default(),
                }),
                primitive: PrimitiveState {
                    topology: PrimitiveTopology::TriangleList,
                    strip_index_format: None,
                    front_face: FrontFace::Ccw,
                    cull_mode: config.cull_mode,
                    polygon_mode: PolygonMode::Fill,
                    unclipped_depth: false,
                    conservative: false,
                },
                depth_stencil,
                multisample: MultisampleState::default(),
                multiview: None,
                cache: None,
            });

        Ok(pipeline)
    }
}
