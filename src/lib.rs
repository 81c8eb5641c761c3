#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

//! Scene export
//!
//! Converts an in-memory 3D scene into a renderer-agnostic JSON geometry
//! document plus one ASCII PPM texture per referenced image.
//!
//! ```rust,ignore
//! use scene_export::{export_scene, ExportSettings, scene::load_scene};
//!
//! let scene = load_scene("scene.json")?;
//! let outcome = export_scene(&scene, ExportSettings::new("out").with_srgb(true))?;
//! for warning in outcome.warnings() {
//!     eprintln!("{warning}");
//! }
//! ```

pub mod errors;
pub mod export;
pub mod geometry;
pub mod resources;
pub mod scene;
pub mod shapes;
pub mod texture;
pub mod utils;

pub use errors::{ExportError, Result};
pub use export::{export_scene, ExportBundle, ExportOutcome, ExportSettings, SceneExporter};
pub use geometry::{order_quad_corners, BoundingBox};
pub use resources::primitives::*;
pub use resources::{resolve_base_color, Image, ImageHandle, Material, ShaderGraph};
pub use scene::{Scene, SceneObject, SceneProvider, WorldTransform};
pub use texture::{linear_to_srgb, sanitize_filename, PpmEncoder};
