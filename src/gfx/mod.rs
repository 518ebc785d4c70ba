//! Graphics: camera, geometry, rendering, resources, and the scene graph.
//!
//! The render path is deliberately small: a sky gradient pass, a forward
//! pass with one key light plus hemispheric ambient, and the UI overlay.

pub mod camera;
pub mod geometry;
pub mod rendering;
pub mod resources;
pub mod scene;

pub use camera::orbit_camera::OrbitCamera;
pub use rendering::render_engine::RenderEngine;
