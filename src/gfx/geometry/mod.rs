//! Procedural geometry for the demo scenes.
//!
//! Every mesh in this crate is generated at runtime; there is no model
//! loading. Shapes come out with outward normals and counter-clockwise
//! winding, ready for [`crate::gfx::scene::Mesh`].

pub mod primitives;

pub use primitives::{generate_cube, generate_plane, generate_sphere, generate_torus};

/// Generated geometry ready for GPU upload.
#[derive(Debug, Clone, Default)]
pub struct GeometryData {
    /// Vertex positions (x, y, z).
    pub positions: Vec<[f32; 3]>,
    /// Per-vertex normals (x, y, z).
    pub normals: Vec<[f32; 3]>,
    /// Triangle indices, counter-clockwise winding.
    pub indices: Vec<u32>,
}

impl GeometryData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}
