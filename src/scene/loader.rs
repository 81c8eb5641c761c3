//! JSON scene description loader
//!
//! Reads a scene description file into an in-memory [`Scene`]. The format
//! mirrors what an authoring-tool dump naturally produces:
//!
//! ```json
//! {
//!   "render": { "resolution_x": 1920, "resolution_y": 1080, "resolution_percentage": 50 },
//!   "images": {
//!     "wood": { "path": "textures/wood.png" },
//!     "checker": { "width": 2, "height": 1, "pixels": [1,0,0,1, 0,1,0,1], "origin": "bottom_left" }
//!   },
//!   "objects": [
//!     { "name": "Floor.Plane", "matrix_world": [1,0,0,0, 0,1,0,0, 0,0,1,0, 0,0,0,1],
//!       "data": { "type": "mesh", "vertices": [[-1,-1,0],[1,-1,0],[1,1,0],[-1,1,0]],
//!                 "polygons": [[0,1,2,3]],
//!                 "material": { "name": "Wood",
//!                               "nodes": [ { "type": "principled_bsdf", "base_color": [0.8,0.8,0.8,1] },
//!                                          { "type": "image_texture", "image": "wood" } ],
//!                               "links": [ { "from": 1, "from_socket": "Color", "to": 0, "to_socket": "Base Color" } ] } } },
//!     { "name": "Key", "data": { "type": "light", "light_type": "point", "energy": 1000 } },
//!     { "name": "Camera", "data": { "type": "camera", "lens_mm": 35 } }
//!   ]
//! }
//! ```
//!
//! `matrix_world` is column-major and defaults to identity. Image paths are
//! relative to the description file. A mesh without a `shape` field is
//! classified from its object name, once, here.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use glam::DVec3;
use rustc_hash::FxHashMap;
use serde::Deserialize;

use crate::errors::{ExportError, Result};
use crate::geometry::BoundingBox;
use crate::resources::image::{Image, ImageHandle, RowOrigin};
use crate::resources::material::Material;
use crate::resources::shader_graph::{NodeId, NodeKind, ShaderGraph};
use crate::scene::object::{
    CameraData, LightData, LightType, MeshData, RenderSettings, SceneObject, ShapeKind,
};
use crate::scene::provider::Scene;
use crate::scene::transform::WorldTransform;

// ============================================================================
// Description types
// ============================================================================

#[derive(Deserialize)]
struct SceneDescription {
    #[serde(default)]
    render: RenderSettings,
    #[serde(default)]
    images: FxHashMap<String, ImageDescription>,
    #[serde(default)]
    objects: Vec<ObjectDescription>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ImageDescription {
    File {
        path: String,
    },
    Inline {
        width: u32,
        height: u32,
        pixels: Vec<f32>,
        #[serde(default)]
        origin: RowOrigin,
        #[serde(default)]
        filepath: Option<String>,
    },
}

#[derive(Deserialize)]
struct ObjectDescription {
    name: String,
    #[serde(default = "identity_cols")]
    matrix_world: [f64; 16],
    data: DataDescription,
}

#[derive(Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum DataDescription {
    Mesh(MeshDescription),
    Light(LightDescription),
    Camera(CameraDescription),
}

#[derive(Deserialize)]
struct MeshDescription {
    #[serde(default)]
    shape: Option<ShapeKind>,
    #[serde(default)]
    vertices: Vec<[f64; 3]>,
    #[serde(default)]
    polygons: Vec<Vec<u32>>,
    /// `[min, max]` in object space.
    #[serde(default)]
    bounding_box: Option<[[f64; 3]; 2]>,
    #[serde(default)]
    material: Option<MaterialDescription>,
}

#[derive(Deserialize)]
struct LightDescription {
    light_type: LightType,
    #[serde(default)]
    energy: f64,
}

#[derive(Deserialize)]
#[serde(default)]
struct CameraDescription {
    lens_mm: f64,
    sensor_width_mm: f64,
    sensor_height_mm: f64,
}

impl Default for CameraDescription {
    fn default() -> Self {
        let d = CameraData::default();
        Self {
            lens_mm: d.lens_mm,
            sensor_width_mm: d.sensor_width_mm,
            sensor_height_mm: d.sensor_height_mm,
        }
    }
}

#[derive(Deserialize)]
struct MaterialDescription {
    #[serde(default)]
    name: String,
    #[serde(default = "default_true")]
    use_nodes: bool,
    #[serde(default)]
    nodes: Vec<NodeDescription>,
    #[serde(default)]
    links: Vec<LinkDescription>,
}

#[derive(Deserialize)]
struct NodeDescription {
    #[serde(default)]
    name: String,
    #[serde(rename = "type")]
    node_type: String,
    #[serde(default)]
    base_color: Option<[f32; 4]>,
    #[serde(default)]
    image: Option<String>,
}

#[derive(Deserialize)]
struct LinkDescription {
    from: usize,
    #[serde(default)]
    from_socket: String,
    to: usize,
    to_socket: String,
}

fn identity_cols() -> [f64; 16] {
    WorldTransform::IDENTITY.matrix().to_cols_array()
}

fn default_true() -> bool {
    true
}

// ============================================================================
// Loading
// ============================================================================

/// Reads and converts a scene description file.
pub fn load_scene(path: impl AsRef<Path>) -> Result<Scene> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    let base_dir = path.parent().unwrap_or(Path::new("."));
    parse_scene(&text, base_dir)
}

/// Converts a scene description held in memory; `base_dir` anchors image paths.
pub fn parse_scene(json: &str, base_dir: &Path) -> Result<Scene> {
    let description: SceneDescription = serde_json::from_str(json)?;

    let mut images = FxHashMap::default();
    for (key, image) in description.images {
        let handle = load_image(&key, image, base_dir)?;
        images.insert(key, handle);
    }

    let mut scene = Scene::new().with_render_settings(description.render);
    for object in description.objects {
        scene.add(build_object(object, &images)?);
    }

    log::debug!(
        "Loaded scene description: {} objects, {} images",
        scene.objects.len(),
        images.len()
    );

    Ok(scene)
}

fn load_image(key: &str, description: ImageDescription, base_dir: &Path) -> Result<ImageHandle> {
    let image = match description {
        ImageDescription::File { path } => Image::from_file(base_dir.join(&path))?.with_filepath(path),
        ImageDescription::Inline {
            width,
            height,
            pixels,
            origin,
            filepath,
        } => {
            let image = Image::new(key, width, height, pixels, origin)?;
            match filepath {
                Some(path) => image.with_filepath(path),
                None => image,
            }
        }
    };
    Ok(Arc::new(image))
}

fn build_object(
    object: ObjectDescription,
    images: &FxHashMap<String, ImageHandle>,
) -> Result<SceneObject> {
    let transform = WorldTransform::from_cols_array(&object.matrix_world);

    let scene_object = match object.data {
        DataDescription::Mesh(mesh) => {
            let shape = mesh
                .shape
                .unwrap_or_else(|| ShapeKind::classify_by_name(&object.name));
            let material = mesh
                .material
                .map(|m| build_material(m, images))
                .transpose()?;

            let data = MeshData {
                shape,
                vertices: mesh.vertices.into_iter().map(DVec3::from_array).collect(),
                polygons: mesh.polygons,
                bounding_box: mesh
                    .bounding_box
                    .map(|[min, max]| BoundingBox::new(DVec3::from_array(min), DVec3::from_array(max))),
                material,
            };
            SceneObject::mesh(object.name, transform, data)
        }
        DataDescription::Light(light) => SceneObject::light(
            object.name,
            transform,
            LightData {
                light_type: light.light_type,
                energy: light.energy,
            },
        ),
        DataDescription::Camera(camera) => SceneObject::camera(
            object.name,
            transform,
            CameraData {
                lens_mm: camera.lens_mm,
                sensor_width_mm: camera.sensor_width_mm,
                sensor_height_mm: camera.sensor_height_mm,
            },
        ),
    };

    Ok(scene_object)
}

fn build_material(
    description: MaterialDescription,
    images: &FxHashMap<String, ImageHandle>,
) -> Result<Material> {
    let mut graph = ShaderGraph::new();

    for node in description.nodes {
        let kind = match node.node_type.as_str() {
            "principled_bsdf" | "BSDF_PRINCIPLED" => NodeKind::PrincipledBsdf {
                base_color: node.base_color.unwrap_or([0.8, 0.8, 0.8, 1.0]),
            },
            "image_texture" | "TEX_IMAGE" => {
                let image = match node.image {
                    Some(key) => Some(images.get(&key).cloned().ok_or_else(|| {
                        ExportError::SceneDescription(format!(
                            "material '{}' references unknown image '{key}'",
                            description.name
                        ))
                    })?),
                    None => None,
                };
                NodeKind::ImageTexture { image }
            }
            other => NodeKind::Other {
                type_name: other.to_string(),
            },
        };
        graph.add_node(node.name, kind);
    }

    let node_count = graph.nodes().len();
    for link in description.links {
        if link.from >= node_count || link.to >= node_count {
            return Err(ExportError::SceneDescription(format!(
                "material '{}' links node {} -> {} but has {node_count} nodes",
                description.name, link.from, link.to
            )));
        }
        graph.link(NodeId(link.from), link.from_socket, NodeId(link.to), link.to_socket);
    }

    Ok(Material {
        name: description.name,
        use_nodes: description.use_nodes,
        graph: Some(graph),
    })
}
