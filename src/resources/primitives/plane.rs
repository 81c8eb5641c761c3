use glam::DVec3;

use crate::scene::object::{MeshData, ShapeKind};

pub struct PlaneOptions {
    pub width: f64,
    pub height: f64,
    pub width_segments: u32,
    pub height_segments: u32,
}

impl Default for PlaneOptions {
    fn default() -> Self {
        Self {
            width: 2.0,
            height: 2.0,
            width_segments: 1,
            height_segments: 1,
        }
    }
}

/// Grid in the XY plane centered on the origin.
///
/// Vertices are emitted row by row, so the first four vertices of a
/// single-segment plane are *not* in winding order; the quads are.
#[must_use]
pub fn create_plane(options: PlaneOptions) -> MeshData {
    let width_half = options.width / 2.0;
    let height_half = options.height / 2.0;

    let grid_x = options.width_segments.max(1);
    let grid_y = options.height_segments.max(1);

    let grid_x1 = grid_x + 1;
    let grid_y1 = grid_y + 1;

    let segment_width = options.width / f64::from(grid_x);
    let segment_height = options.height / f64::from(grid_y);

    let mut vertices = Vec::new();
    let mut polygons = Vec::new();

    for iy in 0..grid_y1 {
        let y = f64::from(iy) * segment_height - height_half;
        for ix in 0..grid_x1 {
            let x = f64::from(ix) * segment_width - width_half;
            vertices.push(DVec3::new(x, -y, 0.0));
        }
    }

    for iy in 0..grid_y {
        for ix in 0..grid_x {
            let a = ix + grid_x1 * iy;
            let b = ix + grid_x1 * (iy + 1);
            let c = (ix + 1) + grid_x1 * (iy + 1);
            let d = (ix + 1) + grid_x1 * iy;

            polygons.push(vec![a, b, c, d]);
        }
    }

    MeshData::new(ShapeKind::Plane, vertices, polygons)
}
