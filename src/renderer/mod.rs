//! Drawable geometry
//!
//! Produces line-list vertices for a field. No GPU code; any backend that
//! can upload a `Pod` vertex buffer can draw them.

pub mod shapes;
pub mod vertex;

pub use shapes::{
    axis_aligned_box_outline, body_outline, field_vertices, oriented_box_outline, to_pixels,
    world_outline,
};
pub use vertex::{Vertex, colors};
