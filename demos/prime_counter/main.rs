//! # Prime Counter
//!
//! A torus centerpiece under a fixed-radius orbit camera, with two
//! overlay buttons that step a counter to the previous or next prime.
//!
//! ```bash
//! cargo run --example prime_counter
//! ```

use anyhow::Result;
use cairn::prelude::*;

struct PrimeCounter {
    counter: u64,
}

impl PrimeCounter {
    fn new() -> Self {
        Self { counter: 2 }
    }

    fn step_down(&mut self) {
        self.counter = prev_prime(self.counter);
    }

    fn step_up(&mut self) {
        self.counter = next_prime(self.counter);
    }
}

impl Demo for PrimeCounter {
    fn initialize(&mut self, scene: &mut Scene) {
        // Matte white ceramic look.
        scene.add_material_rgb("ceramic", 0.9, 0.9, 0.92, 0.0, 1.0);
        scene
            .add_torus("torus", 1.0, 0.5, 128, 64)
            .with_material("ceramic")
            .with_position(0.0, 0.0, 1.2);
    }

    fn render_ui(&mut self, ui: &Ui, _scene: &mut Scene) {
        overlay_window(ui, "counter-display", 0.5, 0.3, || {
            big_label(ui, &self.counter.to_string(), 2.8);
        });

        overlay_window(ui, "counter-controls", 0.5, 0.5, || {
            if ui.button_with_size("-", [96.0, 40.0]) {
                self.step_down();
            }
            ui.same_line();
            if ui.button_with_size("+", [96.0, 40.0]) {
                self.step_up();
            }
        });
    }

    fn name(&self) -> &str {
        "prime_counter"
    }
}

fn main() -> Result<()> {
    env_logger::init();
    log::info!("starting prime counter demo");

    let mut app = cairn::default();

    {
        let camera = &mut app.app_state.scene.camera_manager.camera;
        camera.target = Vector3::new(0.0, 0.0, 1.0);
        camera.set_distance(7.0);
        camera.lock_distance();
    }
    app.app_state
        .scene
        .camera_manager
        .controller
        .set_pan_enabled(false);

    app.set_light(LightConfig {
        position: [0.0, -20.0, 20.0],
        color: [1.0, 1.0, 1.0],
        intensity: 0.2,
        ambient_color: [1.0, 1.0, 1.0],
        ambient_intensity: 0.7,
    });
    app.set_sky(SkyConfig::night());

    app.set_ui(|ui, _scene| {
        text_overlay(
            ui,
            "instructions",
            0.5,
            0.8,
            &[
                "PRIME NUMBER COUNTER",
                "Press - or + to display the previous or the next prime number",
            ],
        );
    });

    app.attach_demo(PrimeCounter::new());
    app.run();

    Ok(())
}
