//! Export assembly
//!
//! - [`settings`]: output configuration
//! - [`bundle`]: export records and the document model
//! - [`exporter`]: runs the estimators over a scene and writes the output
//! - [`writer`]: geometry document serialization

pub mod bundle;
pub mod exporter;
pub mod settings;
pub mod writer;

pub use bundle::{
    CameraRecord, CubeRecord, ExportBundle, FilmResolution, PlaneRecord, PointLightRecord,
    ShapeRecord, SphereRecord, SurfaceRecord,
};
pub use exporter::{export_scene, ExportOutcome, ExportPlan, SceneExporter};
pub use settings::{ExportSettings, DEFAULT_DOCUMENT_NAME, DEFAULT_TEXTURES_DIR};
pub use writer::{document_json, write_document};
