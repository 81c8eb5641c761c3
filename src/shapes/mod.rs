//! Shape parameter estimators
//!
//! Each estimator turns one scene object into its export record. They are
//! pure: warnings travel back on the returned [`Estimate`] and the caller
//! merges them.
//!
//! - [`sphere`]: center and mean radius from vertices
//! - [`cube`]: translation, XYZ Euler rotation and one scale factor
//! - [`plane`]: four world-space corners in winding order plus surface
//! - [`light`]: point lights
//! - [`camera`]: location, orientation, lens and film resolution

pub mod camera;
pub mod cube;
pub mod light;
pub mod plane;
pub mod sphere;

pub use camera::estimate_camera;
pub use cube::{estimate_cube, CUBE_SCALE_TOLERANCE};
pub use light::estimate_point_light;
pub use plane::{estimate_plane, PlaneExport, TextureRequest};
pub use sphere::estimate_sphere;

/// An export record together with the non-fatal warnings produced while
/// estimating it.
#[derive(Debug, Clone, PartialEq)]
pub struct Estimate<T> {
    pub record: T,
    pub warnings: Vec<String>,
}

impl<T> Estimate<T> {
    #[must_use]
    pub fn new(record: T) -> Self {
        Self {
            record,
            warnings: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_warning(mut self, warning: impl Into<String>) -> Self {
        self.warnings.push(warning.into());
        self
    }

    #[must_use]
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Estimate<U> {
        Estimate {
            record: f(self.record),
            warnings: self.warnings,
        }
    }
}
