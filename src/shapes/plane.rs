//! Plane estimator
//!
//! Corner selection falls through these sources, first usable wins:
//! 1. The first polygon with exactly four (valid) vertex indices, in
//!    polygon order. The mesh already defines the winding.
//! 2. The first four vertices, re-ordered by [`order_quad_corners`].
//! 3. The face of the bounding box perpendicular to its thinnest axis,
//!    re-ordered by [`order_quad_corners`].
//! 4. The unit quad `(±1, ±1, 0)`, with a warning.
//!
//! All corners are transformed to world space.

use glam::DVec3;

use crate::export::bundle::{PlaneRecord, SurfaceRecord};
use crate::geometry::quad::order_quad_corners;
use crate::resources::image::ImageHandle;
use crate::resources::resolve::resolve_base_color;
use crate::scene::object::MeshData;
use crate::scene::transform::WorldTransform;
use crate::shapes::Estimate;
use crate::texture::filename::texture_file_name;

/// Object-space quad used when the mesh supplies no usable geometry.
const UNIT_QUAD: [DVec3; 4] = [
    DVec3::new(-1.0, -1.0, 0.0),
    DVec3::new(1.0, -1.0, 0.0),
    DVec3::new(1.0, 1.0, 0.0),
    DVec3::new(-1.0, 1.0, 0.0),
];

/// An image the exporter must encode into the texture directory.
#[derive(Debug, Clone)]
pub struct TextureRequest {
    pub image: ImageHandle,
    /// Sanitized file name, without directory.
    pub file_name: String,
}

/// Plane record plus the texture it references, if any.
#[derive(Debug, Clone)]
pub struct PlaneExport {
    pub record: PlaneRecord,
    pub texture: Option<TextureRequest>,
}

/// Corners and surface of a plane-shaped mesh.
///
/// `texture_dir` is the texture directory relative to the export root; it
/// prefixes the texture reference written into the record.
#[must_use]
pub fn estimate_plane(
    name: &str,
    transform: &WorldTransform,
    mesh: &MeshData,
    texture_dir: &str,
) -> Estimate<PlaneExport> {
    let (corners, warning) = match plane_corners(transform, mesh) {
        Some(corners) => (corners, None),
        None => (
            UNIT_QUAD.map(|p| transform.transform_point(p)),
            Some(format!(
                "Plane '{name}' has no usable geometry; exported unit quad."
            )),
        ),
    };

    let resolved = resolve_base_color(mesh.material.as_ref());
    let (surface, texture) = match resolved.image {
        Some(image) => {
            let file_name = texture_file_name(&image);
            log::debug!("Plane '{name}': texture {file_name}");
            (
                SurfaceRecord::Texture {
                    texture: format!("{texture_dir}/{file_name}"),
                },
                Some(TextureRequest { image, file_name }),
            )
        }
        None => (
            SurfaceRecord::BaseColor {
                base_color: resolved.base_color,
            },
            None,
        ),
    };

    let export = PlaneExport {
        record: PlaneRecord {
            name: name.to_owned(),
            corners: corners.map(|c| c.to_array()),
            surface,
            uv_scale: PlaneRecord::DEFAULT_UV_SCALE,
            uv_offset: PlaneRecord::DEFAULT_UV_OFFSET,
        },
        texture,
    };

    let mut estimate = Estimate::new(export);
    if let Some(warning) = warning {
        estimate = estimate.with_warning(warning);
    }
    estimate
}

/// World-space corners from the mesh, or `None` when nothing usable exists.
fn plane_corners(transform: &WorldTransform, mesh: &MeshData) -> Option<[DVec3; 4]> {
    let to_world = |p: DVec3| transform.transform_point(p);

    if let Some(quad) = first_quad(mesh) {
        return Some(quad.map(to_world));
    }

    if let [a, b, c, d, ..] = mesh.vertices[..] {
        return Some(order_quad_corners([a, b, c, d].map(to_world)));
    }

    mesh.bounds()
        .map(|bounds| order_quad_corners(bounds.flat_face().map(to_world)))
}

/// Object-space vertices of the first four-sided polygon.
fn first_quad(mesh: &MeshData) -> Option<[DVec3; 4]> {
    mesh.polygons
        .iter()
        .filter(|polygon| polygon.len() == 4)
        .find_map(|polygon| {
            let vertex = |i: usize| mesh.vertices.get(polygon[i] as usize).copied();
            Some([vertex(0)?, vertex(1)?, vertex(2)?, vertex(3)?])
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::bounds::BoundingBox;

    #[test]
    fn polygon_order_is_kept() {
        let vertices = vec![
            DVec3::new(-1.0, -1.0, 0.0),
            DVec3::new(1.0, 1.0, 0.0),
            DVec3::new(1.0, -1.0, 0.0),
            DVec3::new(-1.0, 1.0, 0.0),
        ];
        let mesh = MeshData::new(Default::default(), vertices.clone(), vec![vec![0, 2, 1, 3]]);
        let corners = plane_corners(&WorldTransform::IDENTITY, &mesh).unwrap();
        assert_eq!(corners, [vertices[0], vertices[2], vertices[1], vertices[3]]);
    }

    #[test]
    fn polygon_with_bad_index_is_skipped() {
        let vertices = vec![DVec3::ZERO, DVec3::X, DVec3::Y];
        let mesh = MeshData::new(Default::default(), vertices, vec![vec![0, 1, 2, 9]]);
        assert!(first_quad(&mesh).is_none());
        // three vertices still give bounds
        assert!(plane_corners(&WorldTransform::IDENTITY, &mesh).is_some());
    }

    #[test]
    fn bounding_box_face_is_used_without_vertices() {
        let mesh = MeshData::default().with_bounding_box(BoundingBox::new(
            DVec3::new(-2.0, -3.0, 0.0),
            DVec3::new(2.0, 3.0, 0.0),
        ));
        let corners = plane_corners(&WorldTransform::IDENTITY, &mesh).unwrap();
        for c in corners {
            assert!(c.z.abs() < 1e-12);
            assert!((c.x.abs() - 2.0).abs() < 1e-12);
            assert!((c.y.abs() - 3.0).abs() < 1e-12);
        }
    }

    #[test]
    fn empty_mesh_falls_back_to_unit_quad_with_warning() {
        let est = estimate_plane("Plane", &WorldTransform::IDENTITY, &MeshData::default(), "textures");
        assert_eq!(est.warnings.len(), 1);
        assert!(est.warnings[0].contains("Plane"));
        assert_eq!(est.record.record.corners[0], [-1.0, -1.0, 0.0]);
        assert_eq!(est.record.record.base_color(), Some([0.8, 0.8, 0.8]));
        assert!(est.record.texture.is_none());
    }
}
