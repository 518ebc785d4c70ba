//! Scene management: objects, materials, and the camera that views them.

pub mod object;
pub mod scene;
pub mod vertex;

pub use object::{DrawObject, Mesh, Object};
pub use scene::Scene;
pub use vertex::Vertex3D;
