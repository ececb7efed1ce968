//! Render extraction
//!
//! Turns session state into draw data. Surface setup and shaders belong to
//! the host; this module only produces what they consume.

pub mod extract;
pub mod shapes;
pub mod vertex;

pub use extract::{RenderItem, RenderShape, extract};
pub use shapes::scene_vertices;
pub use vertex::Vertex;
