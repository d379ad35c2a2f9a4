//! Mesh generation for point sprite rendering.
//!
//! Points are drawn as screen-aligned quads expanded in the vertex shader,
//! so each point maps to a fixed block of vertices in a preallocated mesh.

/// Preallocated quad mesh and in-place updates from the point buffer.
pub mod point_sprite_mesh;
