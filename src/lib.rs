// src/lib.rs
//! Cairn
//!
//! Interactive 3D demo exercises built on wgpu and winit with an imgui
//! overlay. The library provides a small scene/rendering layer and a
//! demo framework; the exercises themselves live under `demos/`.

pub mod app;
pub mod demo;
pub mod gfx;
pub mod logic;
pub mod prelude;
pub mod ui;
pub mod wgpu_utils;

pub use app::CairnApp;

/// Creates a default application instance.
pub fn default() -> CairnApp {
    pollster::block_on(CairnApp::new())
}
