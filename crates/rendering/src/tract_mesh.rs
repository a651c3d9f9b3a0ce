//! Fill meshes for tract polygons.
//!
//! Rings are triangulated by ear clipping. Vertices are stored relative to
//! the ring's centroid and the entity is placed at the centroid, which keeps
//! f32 vertex positions small at continental world coordinates.

use bevy::prelude::*;
use bevy::render::mesh::{Indices, PrimitiveTopology};
use bevy::render::render_asset::RenderAssetUsages;

/// Twice the signed area; positive for counter-clockwise rings.
fn signed_area2(ring: &[Vec2]) -> f32 {
    let n = ring.len();
    (0..n)
        .map(|i| ring[i].perp_dot(ring[(i + 1) % n]))
        .sum()
}

pub fn centroid(ring: &[Vec2]) -> Vec2 {
    if ring.is_empty() {
        return Vec2::ZERO;
    }
    ring.iter().copied().sum::<Vec2>() / ring.len() as f32
}

fn inside_triangle(p: Vec2, a: Vec2, b: Vec2, c: Vec2) -> bool {
    let d1 = (b - a).perp_dot(p - a);
    let d2 = (c - b).perp_dot(p - b);
    let d3 = (a - c).perp_dot(p - c);
    d1 >= 0.0 && d2 >= 0.0 && d3 >= 0.0
}

/// Triangle indices into `ring`, counter-clockwise. Degenerate rings yield
/// no triangles; self-intersecting rings fall back to a fan over what is left.
pub fn triangulate(ring: &[Vec2]) -> Vec<u32> {
    let n = ring.len();
    if n < 3 {
        return Vec::new();
    }
    let mut remaining: Vec<usize> = (0..n).collect();
    if signed_area2(ring) < 0.0 {
        remaining.reverse();
    }

    let mut indices = Vec::with_capacity((n - 2) * 3);
    let mut i = 0;
    let mut stalled = 0;
    while remaining.len() > 3 {
        let len = remaining.len();
        let (prev, cur, next) = (
            remaining[(i + len - 1) % len],
            remaining[i % len],
            remaining[(i + 1) % len],
        );
        let (a, b, c) = (ring[prev], ring[cur], ring[next]);
        let turn = (b - a).perp_dot(c - b);
        let is_ear = turn > 0.0
            && remaining
                .iter()
                .filter(|&&k| k != prev && k != cur && k != next)
                .all(|&k| !inside_triangle(ring[k], a, b, c));

        if turn == 0.0 {
            // Collinear: drop the vertex without emitting a sliver.
            remaining.remove(i % len);
            stalled = 0;
        } else if is_ear {
            indices.extend([prev as u32, cur as u32, next as u32]);
            remaining.remove(i % len);
            stalled = 0;
        } else {
            i += 1;
            stalled += 1;
        }

        if stalled > remaining.len() {
            let first = remaining[0];
            for pair in remaining[1..].windows(2) {
                indices.extend([first as u32, pair[0] as u32, pair[1] as u32]);
            }
            return indices;
        }
        i %= remaining.len();
    }
    indices.extend(remaining.iter().map(|&k| k as u32));
    indices
}

/// Flat mesh for `ring`, with positions relative to [`centroid`].
pub fn polygon_mesh(ring: &[Vec2]) -> Mesh {
    let origin = centroid(ring);
    let positions: Vec<[f32; 3]> = ring
        .iter()
        .map(|p| {
            let local = *p - origin;
            [local.x, local.y, 0.0]
        })
        .collect();
    let normals = vec![[0.0, 0.0, 1.0]; ring.len()];
    let uvs = vec![[0.0, 0.0]; ring.len()];

    Mesh::new(
        PrimitiveTopology::TriangleList,
        RenderAssetUsages::RENDER_WORLD | RenderAssetUsages::MAIN_WORLD,
    )
    .with_inserted_attribute(Mesh::ATTRIBUTE_POSITION, positions)
    .with_inserted_attribute(Mesh::ATTRIBUTE_NORMAL, normals)
    .with_inserted_attribute(Mesh::ATTRIBUTE_UV_0, uvs)
    .with_inserted_indices(Indices::U32(triangulate(ring)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn area_of(ring: &[Vec2], indices: &[u32]) -> f32 {
        indices
            .chunks(3)
            .map(|t| {
                let (a, b, c) = (
                    ring[t[0] as usize],
                    ring[t[1] as usize],
                    ring[t[2] as usize],
                );
                (b - a).perp_dot(c - a) / 2.0
            })
            .sum()
    }

    #[test]
    fn square_becomes_two_triangles() {
        let ring = [
            Vec2::new(0.0, 0.0),
            Vec2::new(1.0, 0.0),
            Vec2::new(1.0, 1.0),
            Vec2::new(0.0, 1.0),
        ];
        let indices = triangulate(&ring);
        assert_eq!(indices.len(), 6);
        assert!((area_of(&ring, &indices) - 1.0).abs() < 1e-5);
    }

    #[test]
    fn clockwise_ring_is_wound_counter_clockwise() {
        let ring = [
            Vec2::new(0.0, 0.0),
            Vec2::new(0.0, 2.0),
            Vec2::new(2.0, 2.0),
            Vec2::new(2.0, 0.0),
        ];
        let indices = triangulate(&ring);
        assert!((area_of(&ring, &indices) - 4.0).abs() < 1e-5);
    }

    #[test]
    fn concave_ring_keeps_its_notch() {
        // L shape: area 3
        let ring = [
            Vec2::new(0.0, 0.0),
            Vec2::new(2.0, 0.0),
            Vec2::new(2.0, 1.0),
            Vec2::new(1.0, 1.0),
            Vec2::new(1.0, 2.0),
            Vec2::new(0.0, 2.0),
        ];
        let indices = triangulate(&ring);
        assert_eq!(indices.len(), 12);
        assert!((area_of(&ring, &indices) - 3.0).abs() < 1e-5);
    }

    #[test]
    fn degenerate_rings_produce_nothing() {
        assert!(triangulate(&[]).is_empty());
        assert!(triangulate(&[Vec2::ZERO, Vec2::X]).is_empty());
    }

    #[test]
    fn mesh_is_centered_on_the_ring() {
        let ring = [
            Vec2::new(100.0, 100.0),
            Vec2::new(102.0, 100.0),
            Vec2::new(102.0, 102.0),
            Vec2::new(100.0, 102.0),
        ];
        assert_eq!(centroid(&ring), Vec2::new(101.0, 101.0));
        let mesh = polygon_mesh(&ring);
        assert_eq!(mesh.count_vertices(), 4);
        assert_eq!(mesh.indices().map(|i| i.len()), Some(6));
    }
}
