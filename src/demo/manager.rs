use imgui::Ui;

use super::Demo;
use crate::gfx::scene::Scene;

/// Holds the attached demo and forwards lifecycle calls from the app.
#[derive(Default)]
pub struct DemoManager {
    demo: Option<Box<dyn Demo>>,
}

impl DemoManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attaches a demo, replacing any previous one, and initializes it
    /// against the scene.
    pub fn attach(&mut self, mut demo: Box<dyn Demo>, scene: &mut Scene) {
        log::info!("attaching demo '{}'", demo.name());
        demo.initialize(scene);
        self.demo = Some(demo);
    }

    pub fn update(&mut self, delta_time: f32, scene: &mut Scene) {
        if let Some(demo) = &mut self.demo {
            demo.update(delta_time, scene);
        }
    }

    pub fn render_ui(&mut self, ui: &Ui, scene: &mut Scene) {
        if let Some(demo) = &mut self.demo {
            demo.render_ui(ui, scene);
        }
    }
}
