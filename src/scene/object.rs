//! Scene objects as handed over by a scene provider.
//!
//! Each object carries its capability set as an explicit variant, decided
//! once at ingestion: meshes bring vertex/polygon data and a shape
//! classification, lights their type and energy, cameras their lens.

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::geometry::BoundingBox;
use crate::resources::material::Material;
use crate::scene::transform::WorldTransform;

/// Which canonical shape a mesh object is exported as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeKind {
    Plane,
    Sphere,
    Cube,
    /// Mesh with no canonical representation; skipped by the exporter.
    #[default]
    Other,
}

impl ShapeKind {
    /// Classifies by case-insensitive substring of the object name, checking
    /// `plane`, then `sphere`, then `cube`.
    ///
    /// Only for ingesting sources that encode the shape in object names.
    #[must_use]
    pub fn classify_by_name(name: &str) -> Self {
        let lower = name.to_lowercase();
        if lower.contains("plane") {
            Self::Plane
        } else if lower.contains("sphere") {
            Self::Sphere
        } else if lower.contains("cube") {
            Self::Cube
        } else {
            Self::Other
        }
    }
}

/// Object-space mesh data.
#[derive(Debug, Clone, Default)]
pub struct MeshData {
    pub shape: ShapeKind,
    pub vertices: Vec<DVec3>,
    /// Faces as lists of indices into `vertices`.
    pub polygons: Vec<Vec<u32>>,
    /// Explicit object-space bounds; computed from `vertices` when absent.
    pub bounding_box: Option<BoundingBox>,
    /// Active material, if any slot is assigned.
    pub material: Option<Material>,
}

impl MeshData {
    #[must_use]
    pub fn new(shape: ShapeKind, vertices: Vec<DVec3>, polygons: Vec<Vec<u32>>) -> Self {
        Self {
            shape,
            vertices,
            polygons,
            bounding_box: None,
            material: None,
        }
    }

    #[must_use]
    pub fn with_material(mut self, material: Material) -> Self {
        self.material = Some(material);
        self
    }

    #[must_use]
    pub fn with_bounding_box(mut self, bounding_box: BoundingBox) -> Self {
        self.bounding_box = Some(bounding_box);
        self
    }

    /// Explicit bounds, or the bounds of the vertices.
    #[must_use]
    pub fn bounds(&self) -> Option<BoundingBox> {
        self.bounding_box
            .or_else(|| BoundingBox::from_points(self.vertices.iter().copied()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LightType {
    Point,
    Sun,
    Spot,
    Area,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LightData {
    pub light_type: LightType,
    /// Radiant power as authored (watts for point lights).
    pub energy: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraData {
    pub lens_mm: f64,
    pub sensor_width_mm: f64,
    pub sensor_height_mm: f64,
}

impl Default for CameraData {
    fn default() -> Self {
        Self {
            lens_mm: 50.0,
            sensor_width_mm: 36.0,
            sensor_height_mm: 24.0,
        }
    }
}

/// Output resolution shared by every camera in the scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    pub resolution_x: u32,
    pub resolution_y: u32,
    /// Scale applied to both axes, in percent.
    pub resolution_percentage: u32,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            resolution_x: 1920,
            resolution_y: 1080,
            resolution_percentage: 100,
        }
    }
}

#[derive(Debug, Clone)]
pub enum ObjectKind {
    Mesh(MeshData),
    Light(LightData),
    Camera(CameraData),
}

#[derive(Debug, Clone)]
pub struct SceneObject {
    pub name: String,
    pub transform: WorldTransform,
    pub kind: ObjectKind,
}

impl SceneObject {
    #[must_use]
    pub fn mesh(name: impl Into<String>, transform: WorldTransform, mesh: MeshData) -> Self {
        Self {
            name: name.into(),
            transform,
            kind: ObjectKind::Mesh(mesh),
        }
    }

    #[must_use]
    pub fn light(name: impl Into<String>, transform: WorldTransform, light: LightData) -> Self {
        Self {
            name: name.into(),
            transform,
            kind: ObjectKind::Light(light),
        }
    }

    #[must_use]
    pub fn camera(name: impl Into<String>, transform: WorldTransform, camera: CameraData) -> Self {
        Self {
            name: name.into(),
            transform,
            kind: ObjectKind::Camera(camera),
        }
    }
}
