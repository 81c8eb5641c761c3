//! Export records and the bundle that collects them.
//!
//! The bundle serializes to the geometry document:
//!
//! ```json
//! {
//!   "planes":       [{ "name", "corners": [[x,y,z] x4], "texture" | "base_color", "uv_scale", "uv_offset" }],
//!   "spheres":      [{ "name", "location", "radius" }],
//!   "cubes":        [{ "name", "translation", "rotation_euler_xyz_radians", "scale_1d" }],
//!   "point_lights": [{ "name", "location", "radiant_intensity" }],
//!   "cameras":      [{ "name", "location", "gaze", "up", "focal_length_mm",
//!                      "sensor_width_mm", "sensor_height_mm", "film_resolution": { "x", "y" } }]
//! }
//! ```

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CameraRecord {
    pub name: String,
    pub location: [f64; 3],
    pub gaze: [f64; 3],
    pub up: [f64; 3],
    pub focal_length_mm: f64,
    pub sensor_width_mm: f64,
    pub sensor_height_mm: f64,
    pub film_resolution: FilmResolution,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilmResolution {
    pub x: u32,
    pub y: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointLightRecord {
    pub name: String,
    pub location: [f64; 3],
    pub radiant_intensity: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SphereRecord {
    pub name: String,
    pub location: [f64; 3],
    pub radius: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CubeRecord {
    pub name: String,
    pub translation: [f64; 3],
    pub rotation_euler_xyz_radians: [f64; 3],
    pub scale_1d: f64,
}

/// Plane appearance: a texture path relative to the export root, or a constant color.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SurfaceRecord {
    Texture { texture: String },
    BaseColor { base_color: [f32; 3] },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaneRecord {
    pub name: String,
    /// World-space corners in winding order.
    pub corners: [[f64; 3]; 4],
    #[serde(flatten)]
    pub surface: SurfaceRecord,
    pub uv_scale: [f64; 2],
    pub uv_offset: [f64; 2],
}

impl PlaneRecord {
    pub const DEFAULT_UV_SCALE: [f64; 2] = [1.0, 1.0];
    pub const DEFAULT_UV_OFFSET: [f64; 2] = [0.0, 0.0];

    #[must_use]
    pub fn texture(&self) -> Option<&str> {
        match &self.surface {
            SurfaceRecord::Texture { texture } => Some(texture),
            SurfaceRecord::BaseColor { .. } => None,
        }
    }

    #[must_use]
    pub fn base_color(&self) -> Option<[f32; 3]> {
        match self.surface {
            SurfaceRecord::BaseColor { base_color } => Some(base_color),
            SurfaceRecord::Texture { .. } => None,
        }
    }
}

/// One exported object.
#[derive(Debug, Clone, PartialEq)]
pub enum ShapeRecord {
    Camera(CameraRecord),
    PointLight(PointLightRecord),
    Sphere(SphereRecord),
    Cube(CubeRecord),
    Plane(PlaneRecord),
}

impl ShapeRecord {
    /// Document key of the category this record is listed under.
    #[must_use]
    pub fn category(&self) -> &'static str {
        match self {
            Self::Camera(_) => "cameras",
            Self::PointLight(_) => "point_lights",
            Self::Sphere(_) => "spheres",
            Self::Cube(_) => "cubes",
            Self::Plane(_) => "planes",
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Camera(r) => &r.name,
            Self::PointLight(r) => &r.name,
            Self::Sphere(r) => &r.name,
            Self::Cube(r) => &r.name,
            Self::Plane(r) => &r.name,
        }
    }
}

/// Everything one export run produces, in provider order per category.
///
/// Warnings are informational and are not part of the serialized document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExportBundle {
    pub planes: Vec<PlaneRecord>,
    pub spheres: Vec<SphereRecord>,
    pub cubes: Vec<CubeRecord>,
    pub point_lights: Vec<PointLightRecord>,
    pub cameras: Vec<CameraRecord>,
    #[serde(skip)]
    pub warnings: Vec<String>,
}

impl ExportBundle {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a record to its category.
    pub fn push(&mut self, record: ShapeRecord) {
        match record {
            ShapeRecord::Camera(r) => self.cameras.push(r),
            ShapeRecord::PointLight(r) => self.point_lights.push(r),
            ShapeRecord::Sphere(r) => self.spheres.push(r),
            ShapeRecord::Cube(r) => self.cubes.push(r),
            ShapeRecord::Plane(r) => self.planes.push(r),
        }
    }

    pub fn extend_warnings(&mut self, warnings: impl IntoIterator<Item = String>) {
        self.warnings.extend(warnings);
    }

    /// Total number of records over all categories.
    #[must_use]
    pub fn len(&self) -> usize {
        self.planes.len()
            + self.spheres.len()
            + self.cubes.len()
            + self.point_lights.len()
            + self.cameras.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
