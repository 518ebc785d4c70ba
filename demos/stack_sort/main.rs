//! # Stack Gen & Sort
//!
//! GENERATE builds a stack of boxes with strictly increasing footprints
//! in a random vertical order; SORT re-stacks them biggest at the
//! bottom.
//!
//! ```bash
//! cargo run --example stack_sort
//! ```

use anyhow::Result;
use cairn::prelude::*;
use rand::rngs::ThreadRng;

const STACK_SIZE: usize = 5;
const BOX_HEIGHT: f32 = 0.5;

struct StackSort {
    stack: Vec<StackEntry>,
    rng: ThreadRng,
}

impl StackSort {
    fn new() -> Self {
        Self {
            stack: Vec::new(),
            rng: rand::rng(),
        }
    }

    /// GENERATE: replace the whole stack with a freshly shuffled one.
    fn regenerate(&mut self, scene: &mut Scene) {
        scene.retain_objects(|object| !object.name.starts_with("box-"));

        self.stack = generate(STACK_SIZE);
        shuffle(&mut self.stack, &mut self.rng);

        for entry in &self.stack {
            scene
                .add_cube(&format!("box-{}", entry.id))
                .with_material("crate")
                .with_scale_xyz(entry.size, entry.size, BOX_HEIGHT);
        }
        self.sync_levels(scene);
    }

    /// SORT: order by footprint, then by id descending with re-slotting,
    /// which leaves the biggest box at the bottom of the stack.
    fn sort(&mut self, scene: &mut Scene) {
        sort_by_size(&mut self.stack);
        sort_by_id(&mut self.stack);
        self.sync_levels(scene);
    }

    fn sync_levels(&self, scene: &mut Scene) {
        for entry in &self.stack {
            if let Some(object) = scene.object_mut(&format!("box-{}", entry.id)) {
                object.position.z = entry.level;
            }
        }
    }
}

impl Demo for StackSort {
    fn initialize(&mut self, scene: &mut Scene) {
        scene.add_material_rgb("crate", 0.67, 0.47, 0.47, 0.1, 0.8);
    }

    fn render_ui(&mut self, ui: &Ui, scene: &mut Scene) {
        overlay_window(ui, "stack-controls", 0.5, 0.65, || {
            if ui.button_with_size("GENERATE", [160.0, 48.0]) {
                self.regenerate(scene);
            }
            ui.same_line_with_spacing(0.0, 50.0);
            if ui.button_with_size("SORT", [160.0, 48.0]) {
                self.sort(scene);
            }
        });
    }

    fn name(&self) -> &str {
        "stack_sort"
    }
}

fn main() -> Result<()> {
    env_logger::init();
    log::info!("starting stack gen & sort demo");

    let mut app = cairn::default();

    {
        let camera = &mut app.app_state.scene.camera_manager.camera;
        camera.target = Vector3::new(0.0, 0.0, 2.0);
        camera.set_pitch(0.1);
        camera.set_yaw(1.25);
        camera.set_distance(15.0);
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
                "STACK GEN AND SORT",
                "Use the buttons to generate a stack of random cubes",
                "and to sort them from the biggest (bottom) to the smallest (top)",
            ],
        );
    });

    app.attach_demo(StackSort::new());
    app.run();

    Ok(())
}
