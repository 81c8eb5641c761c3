use glam::DVec3;

use crate::export::bundle::{CameraRecord, FilmResolution};
use crate::scene::object::{CameraData, RenderSettings};
use crate::scene::transform::WorldTransform;
use crate::shapes::Estimate;

/// Camera-local viewing direction.
const LOCAL_GAZE: DVec3 = DVec3::NEG_Z;
/// Camera-local up direction.
const LOCAL_UP: DVec3 = DVec3::Y;

/// Location, orientation, lens and output resolution of a camera.
///
/// Gaze and up are the camera's local -Z and +Y axes mapped through the
/// linear part of the world transform and normalized. Resolution is the
/// render resolution scaled by its percentage, rounded half to even.
#[must_use]
pub fn estimate_camera(
    name: &str,
    transform: &WorldTransform,
    camera: &CameraData,
    render: &RenderSettings,
) -> Estimate<CameraRecord> {
    let linear = transform.linear();
    let gaze = (linear * LOCAL_GAZE).normalize_or_zero();
    let up = (linear * LOCAL_UP).normalize_or_zero();

    let record = CameraRecord {
        name: name.to_owned(),
        location: transform.translation().to_array(),
        gaze: gaze.to_array(),
        up: up.to_array(),
        focal_length_mm: camera.lens_mm,
        sensor_width_mm: camera.sensor_width_mm,
        sensor_height_mm: camera.sensor_height_mm,
        film_resolution: film_resolution(render),
    };

    if gaze == DVec3::ZERO || up == DVec3::ZERO {
        return Estimate::new(record)
            .with_warning(format!("Camera '{name}' has a singular orientation."));
    }
    Estimate::new(record)
}

/// Render resolution after percentage scaling.
#[must_use]
pub fn film_resolution(render: &RenderSettings) -> FilmResolution {
    let scale = |pixels: u32| {
        (f64::from(pixels) * f64::from(render.resolution_percentage) / 100.0).round_ties_even()
            as u32
    };
    FilmResolution {
        x: scale(render.resolution_x),
        y: scale(render.resolution_y),
    }
}
