use crate::export::bundle::CubeRecord;
use crate::scene::transform::WorldTransform;
use crate::shapes::Estimate;
use crate::utils::format::format_significant;

/// Absolute tolerance within which three axis scales count as uniform.
pub const CUBE_SCALE_TOLERANCE: f64 = 1e-6;

/// Translation, XYZ Euler rotation and a single scale factor for a cube.
///
/// The output carries one scalar per cube. Non-uniform scale is averaged and
/// reported as a warning naming the object.
#[must_use]
pub fn estimate_cube(name: &str, transform: &WorldTransform) -> Estimate<CubeRecord> {
    let parts = transform.decompose();
    let scale = parts.scale;

    let (scale_1d, warning) = if parts.is_uniform_scale(CUBE_SCALE_TOLERANCE) {
        (scale.x, None)
    } else {
        let mean = (scale.x + scale.y + scale.z) / 3.0;
        let warning = format!(
            "Cube '{name}' non-uniform scale ({},{},{}); exported average.",
            format_significant(scale.x, 3),
            format_significant(scale.y, 3),
            format_significant(scale.z, 3),
        );
        (mean, Some(warning))
    };

    let mut estimate = Estimate::new(CubeRecord {
        name: name.to_owned(),
        translation: parts.translation.to_array(),
        rotation_euler_xyz_radians: parts.euler_xyz.to_array(),
        scale_1d,
    });
    if let Some(warning) = warning {
        estimate = estimate.with_warning(warning);
    }
    estimate
}
