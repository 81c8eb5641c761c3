//! Scene input model
//!
//! What the exporter consumes:
//! - [`WorldTransform`]: object-to-world transform and its decomposition
//! - [`SceneObject`]: one object with its capability variant (mesh, light, camera)
//! - [`SceneProvider`]: the source of objects; [`Scene`] is the in-memory one
//! - [`loader`]: JSON scene descriptions

pub mod loader;
pub mod object;
pub mod provider;
pub mod transform;

pub use loader::{load_scene, parse_scene};
pub use object::{
    CameraData, LightData, LightType, MeshData, ObjectKind, RenderSettings, SceneObject, ShapeKind,
};
pub use provider::{Scene, SceneProvider};
pub use transform::{Decomposed, WorldTransform, EXPORT_EULER};
