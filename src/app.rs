//! Application shell: window, event loop, and the per-frame pipeline
//! connecting demos, UI, and rendering.

use std::sync::Arc;
use std::time::Instant;

use cgmath::Vector3;
use winit::{
    application::ApplicationHandler,
    dpi::PhysicalSize,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowAttributes},
};

use crate::demo::{Demo, DemoManager};
use crate::gfx::{
    camera::{
        camera_controller::CameraController, camera_utils::CameraManager,
        orbit_camera::OrbitCamera,
    },
    rendering::render_engine::RenderEngine,
    resources::global_bindings::{LightConfig, SkyConfig},
    scene::Scene,
};
use crate::ui::UiManager;

/// Extra UI drawn after the demo's own panels. Gets mutable scene access
/// like the demo does.
pub type UiCallback = Box<dyn Fn(&imgui::Ui, &mut Scene)>;

/// The application entry object. Configure the scene and demo, then call
/// [`CairnApp::run`] to hand control to the event loop.
pub struct CairnApp {
    event_loop: Option<EventLoop<()>>,
    pub app_state: AppState,
    ui_callback: Option<UiCallback>,
}

pub struct AppState {
    window: Option<Arc<Window>>,
    render_engine: Option<RenderEngine>,
    ui_manager: Option<UiManager>,
    pub scene: Scene,
    pub demo_manager: DemoManager,
    pub light: LightConfig,
    pub sky: SkyConfig,
    ui_callback: Option<UiCallback>,
    last_frame: Instant,
}

impl CairnApp {
    /// Creates the application with a default orbit camera and empty
    /// scene. GPU resources are created later, when the event loop
    /// delivers the window.
    pub async fn new() -> Self {
        let event_loop = EventLoop::new().expect("Failed to create event loop");

        let camera = OrbitCamera::new(8.0, 0.4, 0.2, Vector3::new(0.0, 0.0, 0.0), 1.5);
        let controller = CameraController::new(0.005, 0.1);
        let camera_manager = CameraManager::new(camera, controller);
        let scene = Scene::new(camera_manager);

        Self {
            event_loop: Some(event_loop),
            app_state: AppState {
                window: None,
                render_engine: None,
                ui_manager: None,
                scene,
                demo_manager: DemoManager::new(),
                light: LightConfig::default(),
                sky: SkyConfig::default(),
                ui_callback: None,
                last_frame: Instant::now(),
            },
            ui_callback: None,
        }
    }

    /// Attaches the demo scene driving this session.
    pub fn attach_demo(&mut self, demo: impl Demo + 'static) {
        self.app_state
            .demo_manager
            .attach(Box::new(demo), &mut self.app_state.scene);
    }

    /// Registers extra UI drawn after the demo's panels.
    pub fn set_ui<F>(&mut self, ui_fn: F)
    where
        F: Fn(&imgui::Ui, &mut Scene) + 'static,
    {
        self.ui_callback = Some(Box::new(ui_fn));
    }

    pub fn set_light(&mut self, light: LightConfig) {
        self.app_state.light = light;
    }

    pub fn set_sky(&mut self, sky: SkyConfig) {
        self.app_state.sky = sky;
    }

    /// Consumes the app and runs the event loop until the window closes.
    pub fn run(mut self) {
        self.app_state.ui_callback = self.ui_callback.take();

        let event_loop = self.event_loop.take().expect("Event loop already consumed");
        event_loop.set_control_flow(ControlFlow::Poll);

        event_loop
            .run_app(&mut self.app_state)
            .expect("Failed to run event loop");
    }
}

impl ApplicationHandler for AppState {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let Ok(window) = event_loop.create_window(
            WindowAttributes::default().with_inner_size(winit::dpi::LogicalSize::new(1200, 800)),
        ) else {
            log::error!("window creation failed");
            return;
        };

        let window_handle = Arc::new(window);
        self.window = Some(window_handle.clone());

        let (width, height) = window_handle.inner_size().into();
        self.scene
            .camera_manager
            .camera
            .resize_projection(width, height);

        let window_clone = window_handle.clone();
        let render_engine =
            pollster::block_on(async move { RenderEngine::new(window_clone, width, height).await });

        let ui_manager = UiManager::new(
            render_engine.device(),
            render_engine.queue(),
            render_engine.surface_format(),
            &window_handle,
        );

        self.ui_manager = Some(ui_manager);
        self.render_engine = Some(render_engine);
        self.last_frame = Instant::now();

        log::info!("render engine ready ({}x{})", width, height);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: winit::window::WindowId,
        event: WindowEvent,
    ) {
        let Some(render_engine) = self.render_engine.as_mut() else {
            return;
        };
        let Some(window) = self.window.as_ref() else {
            return;
        };

        // The UI gets first refusal on every input event.
        if let Some(ui_manager) = self.ui_manager.as_mut() {
            let ui_event: winit::event::Event<()> = winit::event::Event::WindowEvent {
                window_id,
                event: event.clone(),
            };
            if ui_manager.handle_input(window, &ui_event) {
                window.request_redraw();
                return;
            }
        }

        match event {
            WindowEvent::KeyboardInput {
                event: key_event, ..
            } => {
                if matches!(
                    key_event.physical_key,
                    winit::keyboard::PhysicalKey::Code(winit::keyboard::KeyCode::Escape)
                ) {
                    event_loop.exit();
                    return;
                }

                let ui_wants_keyboard = self
                    .ui_manager
                    .as_ref()
                    .is_some_and(|ui_manager| ui_manager.wants_keyboard());
                if !ui_wants_keyboard {
                    self.scene
                        .camera_manager
                        .process_keyboard_event(&key_event);
                }
            }
            WindowEvent::Resized(PhysicalSize { width, height }) => {
                self.scene
                    .camera_manager
                    .camera
                    .resize_projection(width, height);
                render_engine.resize(width, height);
            }
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::RedrawRequested => {
                let now = Instant::now();
                let delta_time = (now - self.last_frame).as_secs_f32();
                self.last_frame = now;

                self.demo_manager.update(delta_time, &mut self.scene);

                // Build the UI. Button handlers run here and may add or
                // remove scene objects; sync_gpu below picks them up.
                if let Some(ui_manager) = self.ui_manager.as_mut() {
                    let demo_manager = &mut self.demo_manager;
                    let scene = &mut self.scene;
                    let ui_callback = self.ui_callback.as_ref();
                    ui_manager.update_logic(window, |ui| {
                        demo_manager.render_ui(ui, scene);
                        if let Some(callback) = ui_callback {
                            callback(ui, scene);
                        }
                    });
                }

                self.scene.update();
                self.scene
                    .sync_gpu(render_engine.device(), render_engine.queue());
                render_engine.update(
                    self.scene.camera_manager.camera.uniform,
                    &self.light,
                    &self.sky,
                );

                if let Some(ui_manager) = self.ui_manager.as_mut() {
                    render_engine.render_frame_with_ui(
                        &self.scene,
                        |device, queue, encoder, color_attachment| {
                            ui_manager.render_display_only(device, queue, encoder, color_attachment);
                        },
                    );
                } else {
                    render_engine.render_frame(
                        &self.scene,
                        None::<
                            fn(
                                &wgpu::Device,
                                &wgpu::Queue,
                                &mut wgpu::CommandEncoder,
                                &wgpu::TextureView,
                            ),
                        >,
                    );
                }
            }
            _ => (),
        }
    }

    fn device_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _device_id: winit::event::DeviceId,
        event: winit::event::DeviceEvent,
    ) {
        let Some(window) = self.window.as_ref() else {
            return;
        };

        // Camera input is suppressed while the UI owns the pointer.
        if let Some(ui_manager) = self.ui_manager.as_ref() {
            let io = ui_manager.context.io();
            if io.want_capture_mouse || io.want_capture_keyboard {
                return;
            }
        }

        self.scene.camera_manager.process_event(&event, window);
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(ref window) = self.window {
            window.request_redraw();
        }
    }
}
