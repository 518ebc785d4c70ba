//! Convenience re-exports for demo programs.
//!
//! ```no_run
//! use cairn::prelude::*;
//!
//! fn main() {
//!     let app = cairn::default();
//!     app.run();
//! }
//! ```

pub use crate::app::CairnApp;
pub use crate::default;

pub use crate::demo::{Demo, DemoManager};

pub use crate::gfx::camera::{CameraController, CameraManager, OrbitCamera};
pub use crate::gfx::geometry::{
    generate_cube, generate_plane, generate_sphere, generate_torus, GeometryData,
};
pub use crate::gfx::resources::{LightConfig, SkyConfig};
pub use crate::gfx::scene::{Object, Scene};

pub use crate::logic::{
    generate, is_prime, next_prime, prev_prime, shuffle, sort_by_id, sort_by_size, StackEntry,
};

pub use crate::ui::{big_label, overlay_window, text_overlay};

pub use cgmath::Vector3;
pub use imgui::Ui;
