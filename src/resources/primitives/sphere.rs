use glam::DVec3;
use std::f64::consts::PI;

use crate::scene::object::{MeshData, ShapeKind};

pub struct SphereOptions {
    pub radius: f64,
    pub width_segments: u32,
    pub height_segments: u32,
}

impl Default for SphereOptions {
    fn default() -> Self {
        Self {
            radius: 1.0,
            width_segments: 32,
            height_segments: 16,
        }
    }
}

/// UV sphere centered on the origin with unique vertices: one vertex per
/// pole and no duplicated seam, so the vertex set is exactly symmetric.
#[must_use]
pub fn create_uv_sphere(options: SphereOptions) -> MeshData {
    let radius = options.radius;
    let width_segments = options.width_segments.max(3);
    let height_segments = options.height_segments.max(2);

    let mut vertices = Vec::new();
    let mut polygons = Vec::new();

    // South pole
    vertices.push(DVec3::new(0.0, -radius, 0.0));

    for y in 1..height_segments {
        // Latitude angle: from 0 to PI (south pole to north pole)
        let theta = f64::from(y) / f64::from(height_segments) * PI;
        let py = -radius * theta.cos();
        let ring_radius = radius * theta.sin();

        for x in 0..width_segments {
            let phi = f64::from(x) / f64::from(width_segments) * 2.0 * PI;
            vertices.push(DVec3::new(-ring_radius * phi.cos(), py, ring_radius * phi.sin()));
        }
    }

    // North pole
    vertices.push(DVec3::new(0.0, radius, 0.0));
    let north = (vertices.len() - 1) as u32;

    let ring = |y: u32, x: u32| 1 + (y - 1) * width_segments + (x % width_segments);

    for x in 0..width_segments {
        polygons.push(vec![0, ring(1, x + 1), ring(1, x)]);
    }
    for y in 1..height_segments - 1 {
        for x in 0..width_segments {
            polygons.push(vec![ring(y, x), ring(y, x + 1), ring(y + 1, x + 1), ring(y + 1, x)]);
        }
    }
    for x in 0..width_segments {
        let top = height_segments - 1;
        polygons.push(vec![ring(top, x), ring(top, x + 1), north]);
    }

    MeshData::new(ShapeKind::Sphere, vertices, polygons)
}
