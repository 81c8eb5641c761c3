//! Planar Quad Orderer
//!
//! Recovers a boundary-tracing (non self-intersecting) order for four points
//! that are nominally coplanar but arrive in arbitrary order.
//!
//! # Algorithm
//!
//! 1. Centroid `C` of the four points.
//! 2. Plane normal `N` from the first vertex triple whose cross product is
//!    longer than [`QUAD_EPSILON`]; `+Z` when every triple is degenerate.
//! 3. In-plane basis `(U, V)`: `U` is the first candidate direction (point
//!    offsets from `C`, then `+X`, then `+Y`) that keeps a non-negligible
//!    component after removing its projection onto `N`. `V = N × U`.
//! 4. Each point's offset from `C` is projected onto `(U, V)` and mapped to
//!    an angle with `atan2`.
//! 5. Points are stably sorted by angle, so ties keep their input order.
//!    `-0.0` and `0.0` compare equal.
//!
//! Every vector that gets normalized is first checked against
//! [`QUAD_EPSILON`], and `atan2(0, 0)` is `0`, so coincident or collinear
//! input never yields NaN angles.

use std::cmp::Ordering;

use glam::DVec3;

/// Length below which a cross product or offset is treated as degenerate.
pub const QUAD_EPSILON: f64 = 1e-12;

const NORMAL_TRIPLES: [(usize, usize, usize); 4] = [(0, 1, 2), (0, 1, 3), (0, 2, 3), (1, 2, 3)];

/// Returns the four points reordered so that consecutive points (wrapping)
/// are edges of the quadrilateral rather than diagonals.
#[must_use]
pub fn order_quad_corners(points: [DVec3; 4]) -> [DVec3; 4] {
    let centroid = points.iter().copied().sum::<DVec3>() / 4.0;
    let normal = plane_normal(&points);
    let u = in_plane_axis(&points, centroid, normal);
    let v = normal.cross(u).normalize_or_zero();

    let mut keyed: Vec<(f64, DVec3)> = points
        .iter()
        .map(|&p| {
            let offset = p - centroid;
            let angle = offset.dot(v).atan2(offset.dot(u));
            (if angle.is_nan() { 0.0 } else { angle }, p)
        })
        .collect();

    // `sort_by` is stable: equal angles (including -0.0 and 0.0) keep input order.
    keyed.sort_by(by_angle);

    [keyed[0].1, keyed[1].1, keyed[2].1, keyed[3].1]
}

fn by_angle(a: &(f64, DVec3), b: &(f64, DVec3)) -> Ordering {
    a.0.partial_cmp(&b.0).unwrap_or(Ordering::Equal)
}

/// Unit normal of the plane through the points, `+Z` if no triple spans a plane.
fn plane_normal(points: &[DVec3; 4]) -> DVec3 {
    NORMAL_TRIPLES
        .iter()
        .map(|&(a, b, c)| (points[b] - points[a]).cross(points[c] - points[a]))
        .find(|n| n.length() > QUAD_EPSILON)
        .map_or(DVec3::Z, DVec3::normalize)
}

/// First candidate direction with a usable component orthogonal to `normal`.
fn in_plane_axis(points: &[DVec3; 4], centroid: DVec3, normal: DVec3) -> DVec3 {
    points
        .iter()
        .map(|&p| p - centroid)
        .chain([DVec3::X, DVec3::Y])
        .map(|d| d - normal * d.dot(normal))
        .find(|d| d.length() > QUAD_EPSILON)
        .map_or(DVec3::X, DVec3::normalize)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normal_falls_back_to_z_for_collinear_points() {
        let pts = [DVec3::ZERO, DVec3::X, DVec3::X * 2.0, DVec3::X * 3.0];
        assert_eq!(plane_normal(&pts), DVec3::Z);
    }

    #[test]
    fn test_signed_zero_angles_are_ties() {
        let mut keyed = vec![(0.0, DVec3::X), (-0.0, DVec3::Y), (-1.0, DVec3::Z)];
        keyed.sort_by(by_angle);
        let order: Vec<DVec3> = keyed.iter().map(|k| k.1).collect();
        assert_eq!(order, [DVec3::Z, DVec3::X, DVec3::Y]);
    }

    #[test]
    fn test_axis_skips_offsets_parallel_to_normal() {
        let pts = [DVec3::Z, -DVec3::Z, DVec3::Z, -DVec3::Z];
        let axis = in_plane_axis(&pts, DVec3::ZERO, DVec3::Z);
        assert!((axis - DVec3::X).length() < 1e-12);
    }
}
