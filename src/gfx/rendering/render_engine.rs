//! wgpu render engine for the demo scenes.
//!
//! Owns the surface, device, queue, and depth buffer, and renders each
//! frame in three passes: sky gradient, forward-lit scene objects, and
//! the imgui overlay supplied by the caller.

use std::sync::Arc;

use wgpu::{Device, TextureFormat};

use crate::gfx::{
    camera::camera_utils::CameraUniform,
    resources::{
        global_bindings::{update_global_ubo, GlobalBindings, GlobalUBO, LightConfig, SkyConfig},
        texture_resource::TextureResource,
    },
    scene::{object::DrawObject, object::Object, scene::Scene},
};

use super::pipeline_manager::{PipelineConfig, PipelineManager};

pub struct RenderEngine {
    surface: wgpu::Surface<'static>,
    device: Arc<wgpu::Device>,
    queue: Arc<wgpu::Queue>,
    config: wgpu::SurfaceConfiguration,
    depth_texture: TextureResource,
    format: TextureFormat,
    pub pipeline_manager: PipelineManager,
    global_ubo: GlobalUBO,
    global_bindings: GlobalBindings,
}

impl RenderEngine {
    /// Initializes wgpu for the given window and registers the sky and
    /// forward pipelines.
    ///
    /// # Panics
    /// Panics when no adapter or device can be acquired; there is no
    /// useful way to continue without a GPU.
    pub async fn new(
        window: impl Into<wgpu::SurfaceTarget<'static>>,
        width: u32,
        height: u32,
    ) -> RenderEngine {
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });
        let surface = instance
            .create_surface(window)
            .expect("Failed to create surface!");

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .expect("Failed to request adapter!");

        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("WGPU Device"),
                required_features: wgpu::Features::default(),
                required_limits: wgpu::Limits::downlevel_defaults(),
                memory_hints: wgpu::MemoryHints::default(),
                trace: wgpu::Trace::Off,
            })
            .await
            .expect("Failed to request a device!");

        let surface_capabilities = surface.get_capabilities(&adapter);
        let format = surface_capabilities
            .formats
            .iter()
            .copied()
            .find(|f| !f.is_srgb())
            .unwrap_or(surface_capabilities.formats[0]);

        log::debug!("surface format: {:?}", format);

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: surface_capabilities.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let depth_texture =
            TextureResource::create_depth_texture(&device, &config, "depth_texture");

        let global_ubo = GlobalUBO::new(&device);
        let mut global_bindings = GlobalBindings::new(&device);
        global_bindings.create_bind_group(&device, &global_ubo);

        let transform_bind_group_layout = Object::transform_bind_group_layout(&device);
        let material_bind_group_layout =
            crate::gfx::resources::material::MaterialBindings::new(&device)
                .bind_group_layout()
                .clone();

        let device_handle: Arc<Device> = device.into();
        let queue_handle: Arc<wgpu::Queue> = queue.into();
        let mut pipeline_manager = PipelineManager::new(device_handle.clone());

        pipeline_manager.load_shader("forward", include_str!("forward.wgsl"));
        pipeline_manager.load_shader("sky", include_str!("sky.wgsl"));

        pipeline_manager.register_pipeline(
            "Sky",
            PipelineConfig::default()
                .with_label("SKY")
                .with_shader("sky")
                .with_bind_group_layouts(vec![global_bindings.bind_group_layout().clone()])
                .with_color_targets(vec![Some(wgpu::ColorTargetState {
                    format,
                    blend: None,
                    write_mask: wgpu::ColorWrites::ALL,
                })])
                .with_cull_mode(None)
                .with_no_vertex_buffers(),
        );

        pipeline_manager.register_pipeline(
            "Forward",
            PipelineConfig::default()
                .with_label("FORWARD")
                .with_shader("forward")
                .with_depth_stencil(depth_texture.texture.clone())
                .with_color_targets(vec![Some(wgpu::ColorTargetState {
                    format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })])
                .with_bind_group_layouts(vec![
                    global_bindings.bind_group_layout().clone(),
                    transform_bind_group_layout,
                    material_bind_group_layout,
                ]),
        );

        if let Err(error) = pipeline_manager.create_all_pipelines() {
            log::warn!("deferred pipeline creation: {}", error);
        }

        RenderEngine {
            surface,
            device: device_handle,
            queue: queue_handle,
            config,
            depth_texture,
            format,
            pipeline_manager,
            global_ubo,
            global_bindings,
        }
    }

    /// Writes this frame's camera, light, and sky state to the GPU.
    pub fn update(&mut self, camera_uniform: CameraUniform, light: &LightConfig, sky: &SkyConfig) {
        update_global_ubo(&mut self.global_ubo, &self.queue, camera_uniform, light, sky);
    }

    /// Renders one frame: sky, scene objects, then the UI overlay.
    ///
    /// The overlay callback records its own render pass against the
    /// surface view; pass `None` to skip it.
    pub fn render_frame<F>(&mut self, scene: &Scene, ui_callback: Option<F>)
    where
        F: FnOnce(&wgpu::Device, &wgpu::Queue, &mut wgpu::CommandEncoder, &wgpu::TextureView),
    {
        let surface_texture = match self.surface.get_current_texture() {
            Ok(texture) => texture,
            Err(error) => {
                // Surface contents can be lost on resize; reconfigure and
                // try again next frame.
                log::warn!("dropped frame: {}", error);
                self.surface.configure(&self.device, &self.config);
                return;
            }
        };

        let surface_texture_view = surface_texture
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });

        // PASS 1: sky gradient, no depth.
        {
            let mut sky_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Sky Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &surface_texture_view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color::BLACK),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                occlusion_query_set: None,
                timestamp_writes: None,
            });

            if let Ok(sky_pipeline) = self.pipeline_manager.get_pipeline("Sky") {
                sky_pass.set_pipeline(sky_pipeline);
                sky_pass.set_bind_group(0, self.global_bindings.bind_group(), &[]);
                sky_pass.draw(0..3, 0..1);
            }
        }

        // PASS 2: scene objects with depth testing, on top of the sky.
        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Forward Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &surface_texture_view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Load,
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth_texture.view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                occlusion_query_set: None,
                timestamp_writes: None,
            });

            if let Ok(pipeline) = self.pipeline_manager.get_pipeline("Forward") {
                render_pass.set_pipeline(pipeline);
                render_pass.set_bind_group(0, self.global_bindings.bind_group(), &[]);

                for object in scene.objects.iter() {
                    if !object.visible {
                        continue;
                    }
                    let material = scene.material_for_object(object);
                    if let Some(material_bind_group) = material.bind_group() {
                        render_pass.set_bind_group(2, material_bind_group, &[]);
                        render_pass.draw_object(object);
                    } else {
                        log::debug!(
                            "skipping '{}': material '{}' has no GPU resources yet",
                            object.name,
                            material.name
                        );
                    }
                }
            }
        }

        // PASS 3: UI overlay.
        if let Some(ui_callback) = ui_callback {
            ui_callback(
                &self.device,
                &self.queue,
                &mut encoder,
                &surface_texture_view,
            );
        }

        self.queue.submit(std::iter::once(encoder.finish()));
        surface_texture.present();
    }

    /// Convenience wrapper for rendering with a UI overlay.
    pub fn render_frame_with_ui<F>(&mut self, scene: &Scene, ui_callback: F)
    where
        F: FnOnce(&wgpu::Device, &wgpu::Queue, &mut wgpu::CommandEncoder, &wgpu::TextureView),
    {
        self.render_frame(scene, Some(ui_callback));
    }

    /// Resizes the surface and recreates the depth buffer to match.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }

        self.config.width = width;
        self.config.height = height;
        self.surface.configure(&self.device, &self.config);
        self.depth_texture =
            TextureResource::create_depth_texture(&self.device, &self.config, "depth_texture");
    }

    pub fn surface_size(&self) -> (u32, u32) {
        (self.config.width, self.config.height)
    }

    pub fn device(&self) -> &wgpu::Device {
        &self.device
    }

    pub fn queue(&self) -> &wgpu::Queue {
        &self.queue
    }

    pub fn surface_format(&self) -> wgpu::TextureFormat {
        self.format
    }
}
