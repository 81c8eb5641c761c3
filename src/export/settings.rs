//! Export Settings
//!
//! Configuration of one export run: where the output goes and how texture
//! pixels are encoded.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use scene_export::export::{export_scene, ExportSettings};
//!
//! // Defaults: `scene_export.json` and `textures/` under the root, raw pixel values
//! let settings = ExportSettings::new("out");
//!
//! // Treat pixels as linear light and write sRGB-encoded textures
//! let settings = ExportSettings::new("out").with_srgb(true);
//!
//! let outcome = export_scene(&scene, settings)?;
//! ```

use std::path::{Path, PathBuf};

/// Default name of the geometry document.
pub const DEFAULT_DOCUMENT_NAME: &str = "scene_export.json";
/// Default texture directory, relative to the export root.
pub const DEFAULT_TEXTURES_DIR: &str = "textures";

// ---------------------------------------------------------------------------
// ExportSettings
// ---------------------------------------------------------------------------

/// Output configuration for [`SceneExporter`](crate::export::SceneExporter).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSettings {
    /// Directory that receives the document and the texture directory.
    pub export_root: PathBuf,

    /// Apply the linear → sRGB transfer before quantizing texture pixels.
    ///
    /// Leave `false` when pixel buffers already hold display-encoded values.
    pub apply_srgb: bool,

    /// File name of the geometry document inside `export_root`.
    pub document_name: String,

    /// Texture directory name inside `export_root`. Also the prefix of every
    /// texture reference in the document.
    pub textures_dir: String,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            export_root: PathBuf::from("."),
            apply_srgb: false,
            document_name: DEFAULT_DOCUMENT_NAME.to_owned(),
            textures_dir: DEFAULT_TEXTURES_DIR.to_owned(),
        }
    }
}

impl ExportSettings {
    #[must_use]
    pub fn new(export_root: impl Into<PathBuf>) -> Self {
        Self {
            export_root: export_root.into(),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_srgb(mut self, apply_srgb: bool) -> Self {
        self.apply_srgb = apply_srgb;
        self
    }

    #[must_use]
    pub fn with_document_name(mut self, name: impl Into<String>) -> Self {
        self.document_name = name.into();
        self
    }

    #[must_use]
    pub fn with_textures_dir(mut self, dir: impl Into<String>) -> Self {
        self.textures_dir = dir.into();
        self
    }

    /// Full path of the geometry document.
    #[must_use]
    pub fn document_path(&self) -> PathBuf {
        self.export_root.join(&self.document_name)
    }

    /// Full path of the texture directory.
    #[must_use]
    pub fn textures_path(&self) -> PathBuf {
        self.export_root.join(&self.textures_dir)
    }

    #[must_use]
    pub fn export_root(&self) -> &Path {
        &self.export_root
    }
}
