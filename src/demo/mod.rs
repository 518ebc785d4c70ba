//! Demo framework: the trait a demo scene implements and the manager
//! that plugs it into the application loop.
//!
//! Demos are event-driven. State changes happen inside `render_ui` when
//! a button reports a click, each press mapping to one state-transition
//! method; `update` exists for demos that animate between interactions.

pub mod manager;

pub use manager::DemoManager;

use imgui::Ui;

use crate::gfx::scene::Scene;

/// One interactive demo scene.
pub trait Demo {
    /// Called once when the demo is attached. Build scene content here.
    fn initialize(&mut self, scene: &mut Scene);

    /// Called every frame before the UI. Most demos have nothing to do.
    fn update(&mut self, _delta_time: f32, _scene: &mut Scene) {}

    /// Builds this frame's UI. Button handlers may mutate both the demo
    /// state and the scene; changes are picked up before rendering.
    fn render_ui(&mut self, ui: &Ui, scene: &mut Scene);

    /// Name shown in logs.
    fn name(&self) -> &str;
}
