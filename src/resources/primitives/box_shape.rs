use glam::DVec3;

use crate::scene::object::{MeshData, ShapeKind};

/// Axis-aligned box centered on the origin: 8 vertices, 6 quads.
#[must_use]
pub fn create_box(width: f64, height: f64, depth: f64) -> MeshData {
    let w = width / 2.0;
    let h = height / 2.0;
    let d = depth / 2.0;

    let vertices = vec![
        DVec3::new(-w, -h, -d),
        DVec3::new(w, -h, -d),
        DVec3::new(w, h, -d),
        DVec3::new(-w, h, -d),
        DVec3::new(-w, -h, d),
        DVec3::new(w, -h, d),
        DVec3::new(w, h, d),
        DVec3::new(-w, h, d),
    ];

    let polygons = vec![
        // Front (+Z)
        vec![4, 5, 6, 7],
        // Back (-Z)
        vec![0, 3, 2, 1],
        // Top (+Y)
        vec![3, 7, 6, 2],
        // Bottom (-Y)
        vec![0, 1, 5, 4],
        // Right (+X)
        vec![1, 2, 6, 5],
        // Left (-X)
        vec![0, 4, 7, 3],
    ];

    MeshData::new(ShapeKind::Cube, vertices, polygons)
}
