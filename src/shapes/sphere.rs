use glam::DVec3;

use crate::export::bundle::SphereRecord;
use crate::scene::object::MeshData;
use crate::scene::transform::WorldTransform;
use crate::shapes::Estimate;

/// Location and radius of a sphere-shaped mesh.
///
/// With vertex data the location is the world-space centroid and the radius
/// the mean world-space distance of the vertices from it. This is an
/// approximation for near-spherical meshes, not a least-squares fit.
///
/// Without vertices the location is the object translation and the radius
/// the largest axis scale factor (a unit primitive scaled by the transform).
#[must_use]
pub fn estimate_sphere(
    name: &str,
    transform: &WorldTransform,
    mesh: &MeshData,
) -> Estimate<SphereRecord> {
    let (location, radius) = if mesh.vertices.is_empty() {
        let scale = transform.decompose().scale;
        (transform.translation(), scale.max_element())
    } else {
        let world: Vec<DVec3> = mesh
            .vertices
            .iter()
            .map(|&v| transform.transform_point(v))
            .collect();
        let count = world.len() as f64;
        let centroid = world.iter().copied().sum::<DVec3>() / count;
        let radius = world.iter().map(|p| p.distance(centroid)).sum::<f64>() / count;
        (centroid, radius)
    };

    log::debug!("Sphere '{name}': radius {radius}");

    Estimate::new(SphereRecord {
        name: name.to_owned(),
        location: location.to_array(),
        radius,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_mesh_uses_largest_scale() {
        let transform = WorldTransform::from_trs_euler(
            DVec3::new(1.0, 2.0, 3.0),
            DVec3::ZERO,
            DVec3::new(0.5, 2.5, 1.0),
        );
        let est = estimate_sphere("Sphere", &transform, &MeshData::default());
        assert!((est.record.radius - 2.5).abs() < 1e-9);
        assert_eq!(est.record.location, [1.0, 2.0, 3.0]);
        assert!(est.warnings.is_empty());
    }
}
