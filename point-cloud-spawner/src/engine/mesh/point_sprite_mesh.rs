use std::ops::Range;

use bevy::prelude::*;
use bevy::render::mesh::{Indices, PrimitiveTopology, VertexAttributeValues};
use bevy::render::render_asset::RenderAssetUsages;

use crate::engine::population::point_buffer::PointBuffer;

pub const VERTICES_PER_POINT: usize = 4;
pub const INDICES_PER_POINT: usize = 6;

/// Unit sprite coordinates of the quad corners, counter-clockwise.
const SPRITE_CORNERS: [[f32; 2]; VERTICES_PER_POINT] = [[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]];

/// Allocate a sprite mesh for `capacity` points.
///
/// Every point owns four vertices that all carry the point centre; the vertex
/// shader pushes each one out to its corner in screen space. The index list
/// starts empty and only ever covers the visible prefix, which makes it the
/// draw range. Kept in the main world so it can be patched in place.
pub fn create_point_sprite_mesh(capacity: usize) -> Mesh {
    let vertex_count = capacity * VERTICES_PER_POINT;
    let mut mesh = Mesh::new(PrimitiveTopology::TriangleList, RenderAssetUsages::default());

    let corners: Vec<[f32; 2]> = (0..capacity).flat_map(|_| SPRITE_CORNERS).collect();

    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, vec![[0.0f32; 3]; vertex_count]);
    mesh.insert_attribute(Mesh::ATTRIBUTE_UV_0, corners);
    mesh.insert_attribute(Mesh::ATTRIBUTE_COLOR, vec![[0.0f32; 4]; vertex_count]);
    mesh.insert_indices(Indices::U32(Vec::new()));
    mesh
}

/// Copy points `written` from the buffer into the mesh and widen the draw
/// range to the buffer's visible range.
pub fn write_sprite_points(mesh: &mut Mesh, buffer: &PointBuffer, written: Range<usize>) {
    let written = written.start..written.end.min(buffer.len());

    if let Some(VertexAttributeValues::Float32x3(positions)) =
        mesh.attribute_mut(Mesh::ATTRIBUTE_POSITION)
    {
        for (index, xyz) in buffer.positions()[written.start * 3..written.end * 3]
            .chunks_exact(3)
            .enumerate()
        {
            let base = (written.start + index) * VERTICES_PER_POINT;
            positions[base..base + VERTICES_PER_POINT].fill([xyz[0], xyz[1], xyz[2]]);
        }
    }

    if let Some(VertexAttributeValues::Float32x4(colours)) =
        mesh.attribute_mut(Mesh::ATTRIBUTE_COLOR)
    {
        for (index, rgb) in buffer.colours()[written.start * 3..written.end * 3]
            .chunks_exact(3)
            .enumerate()
        {
            let base = (written.start + index) * VERTICES_PER_POINT;
            colours[base..base + VERTICES_PER_POINT].fill([rgb[0], rgb[1], rgb[2], 1.0]);
        }
    }

    set_visible_sprites(mesh, buffer.visible_range().end);
}

/// Resize the index list so exactly the first `count` sprites are drawn.
pub fn set_visible_sprites(mesh: &mut Mesh, count: usize) {
    let Some(Indices::U32(indices)) = mesh.indices_mut() else {
        warn!("Point sprite mesh has no u32 index buffer");
        return;
    };

    let current = indices.len() / INDICES_PER_POINT;
    indices.truncate(count.min(current) * INDICES_PER_POINT);
    for sprite in current..count {
        let base = (sprite * VERTICES_PER_POINT) as u32;
        indices.extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }
}

/// Number of sprites covered by the current draw range.
pub fn visible_sprites(mesh: &Mesh) -> usize {
    mesh.indices()
        .map(|indices| indices.len() / INDICES_PER_POINT)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::population::point::Point;

    fn buffer_with(points: &[Point], capacity: usize) -> PointBuffer {
        let mut buffer = PointBuffer::with_capacity(capacity);
        buffer.append(points);
        buffer
    }

    fn point(x: f32) -> Point {
        Point {
            position: [x, 2.0, -3.0],
            colour: [0.25, 0.5, 0.75],
        }
    }

    #[test]
    fn fresh_mesh_draws_nothing() {
        let mesh = create_point_sprite_mesh(8);
        assert_eq!(mesh.count_vertices(), 32);
        assert_eq!(visible_sprites(&mesh), 0);
    }

    #[test]
    fn written_points_expand_to_four_vertices() {
        let buffer = buffer_with(&[point(1.0), point(4.0)], 3);
        let mut mesh = create_point_sprite_mesh(buffer.capacity());
        write_sprite_points(&mut mesh, &buffer, 0..2);

        let Some(VertexAttributeValues::Float32x3(positions)) =
            mesh.attribute(Mesh::ATTRIBUTE_POSITION)
        else {
            panic!("missing positions");
        };
        assert!(positions[0..4].iter().all(|p| *p == [1.0, 2.0, -3.0]));
        assert!(positions[4..8].iter().all(|p| *p == [4.0, 2.0, -3.0]));
        assert!(positions[8..12].iter().all(|p| *p == [0.0, 0.0, 0.0]));

        let Some(VertexAttributeValues::Float32x4(colours)) =
            mesh.attribute(Mesh::ATTRIBUTE_COLOR)
        else {
            panic!("missing colours");
        };
        assert_eq!(colours[5], [0.25, 0.5, 0.75, 1.0]);
        assert_eq!(visible_sprites(&mesh), 2);
    }

    #[test]
    fn draw_range_tracks_buffer_length() {
        let mut buffer = PointBuffer::with_capacity(4);
        let mut mesh = create_point_sprite_mesh(4);

        buffer.append(&[point(1.0)]);
        write_sprite_points(&mut mesh, &buffer, 0..1);
        assert_eq!(visible_sprites(&mesh), 1);

        buffer.append(&[point(2.0), point(3.0)]);
        write_sprite_points(&mut mesh, &buffer, 1..3);
        assert_eq!(visible_sprites(&mesh), 3);

        let Some(Indices::U32(indices)) = mesh.indices() else {
            panic!("missing indices");
        };
        assert_eq!(&indices[12..18], &[8, 9, 10, 8, 10, 11]);
    }
}
