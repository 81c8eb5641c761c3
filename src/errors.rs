//! Error Types
//!
//! This module defines the error types used throughout the exporter.
//!
//! # Overview
//!
//! Only conditions that make an export impossible are errors:
//! - Directory or file creation failures while writing the export root
//! - Malformed scene descriptions and source images during ingestion
//! - Pixel buffers whose length does not match their declared size
//!
//! Degenerate geometry and missing materials are *not* errors. They resolve
//! through fallback chains and at most produce a warning string on the
//! [`ExportBundle`](crate::export::ExportBundle).
//!
//! # Usage
//!
//! All fallible public APIs return [`Result<T>`] which is an alias for
//! `std::result::Result<T, ExportError>`.
//!
//! ```rust,ignore
//! use scene_export::errors::{ExportError, Result};
//!
//! fn run(scene: &Scene) -> Result<()> {
//!     export_scene(scene, ExportSettings::new("out"))?;
//!     Ok(())
//! }
//! ```

use std::path::PathBuf;

use thiserror::Error;

/// The main error type for scene export.
#[derive(Error, Debug)]
pub enum ExportError {
    // ========================================================================
    // Output Errors
    // ========================================================================
    /// An output directory could not be created.
    #[error("Failed to create directory {}: {source}", path.display())]
    CreateDirectory {
        /// Directory that was being created
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// An output file could not be written.
    #[error("Failed to write {}: {source}", path.display())]
    WriteFile {
        /// File that was being written
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    // ========================================================================
    // I/O Errors
    // ========================================================================
    /// File I/O error.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    // ========================================================================
    // Image Errors
    // ========================================================================
    /// Image decoding error.
    #[error("Image decode error: {0}")]
    ImageDecodeError(String),

    /// Pixel buffer does not hold `width * height` RGBA pixels.
    #[error("Image '{name}' has {actual} channel values, expected {expected}")]
    PixelBufferSize {
        /// Image name
        name: String,
        /// `width * height * 4`
        expected: usize,
        /// Length of the supplied buffer
        actual: usize,
    },

    // ========================================================================
    // Format & Parsing Errors
    // ========================================================================
    /// JSON parsing or serialization error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Scene description refers to something that does not exist.
    #[error("Scene description error: {0}")]
    SceneDescription(String),
}

// ============================================================================
// Convenient conversion implementations
// ============================================================================

impl From<image::ImageError> for ExportError {
    fn from(err: image::ImageError) -> Self {
        ExportError::ImageDecodeError(err.to_string())
    }
}

/// Alias for `Result<T, ExportError>`.
pub type Result<T> = std::result::Result<T, ExportError>;
