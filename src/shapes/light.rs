use crate::export::bundle::PointLightRecord;
use crate::scene::object::{LightData, LightType};
use crate::scene::transform::WorldTransform;
use crate::shapes::Estimate;

/// Record for a point light; `None` for every other light type.
///
/// The light energy is exported unchanged as radiant intensity.
#[must_use]
pub fn estimate_point_light(
    name: &str,
    transform: &WorldTransform,
    light: &LightData,
) -> Option<Estimate<PointLightRecord>> {
    if light.light_type != LightType::Point {
        log::debug!("Skipping {:?} light '{name}'", light.light_type);
        return None;
    }

    Some(Estimate::new(PointLightRecord {
        name: name.to_owned(),
        location: transform.translation().to_array(),
        radiant_intensity: light.energy,
    }))
}
