use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::errors::{ExportError, Result};

/// Shared handle to an [`Image`]; several shading graphs may reference the same image.
pub type ImageHandle = Arc<Image>;

/// Which corner the first row of the pixel buffer belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RowOrigin {
    /// Row 0 is the bottom of the picture (authoring-tool convention).
    #[default]
    BottomLeft,
    /// Row 0 is the top of the picture (file-format convention).
    TopLeft,
}

/// CPU-side RGBA image with floating-point channels.
///
/// Channel values are nominally in `[0, 1]` but may be unclamped (HDR sources).
#[derive(Debug, Clone, PartialEq)]
pub struct Image {
    name: String,
    filepath: Option<String>,
    width: u32,
    height: u32,
    pixels: Vec<f32>,
    origin: RowOrigin,
}

impl Image {
    /// Creates an image from a row-major RGBA buffer of `width * height * 4` values.
    pub fn new(
        name: impl Into<String>,
        width: u32,
        height: u32,
        pixels: Vec<f32>,
        origin: RowOrigin,
    ) -> Result<Self> {
        let name = name.into();
        let expected = width as usize * height as usize * 4;
        if pixels.len() != expected {
            return Err(ExportError::PixelBufferSize {
                name,
                expected,
                actual: pixels.len(),
            });
        }

        Ok(Self {
            name,
            filepath: None,
            width,
            height,
            pixels,
            origin,
        })
    }

    /// Image filled with a single RGBA color.
    #[must_use]
    pub fn solid(name: impl Into<String>, width: u32, height: u32, rgba: [f32; 4]) -> Self {
        let count = width as usize * height as usize;
        Self {
            name: name.into(),
            filepath: None,
            width,
            height,
            pixels: rgba.repeat(count),
            origin: RowOrigin::BottomLeft,
        }
    }

    /// Decodes an image file (PNG, JPEG, HDR, EXR) into float RGBA, top-left origin.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let decoded = image::open(path)?.into_rgba32f();
        let (width, height) = decoded.dimensions();
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("image")
            .to_string();

        let mut image = Self::new(name, width, height, decoded.into_raw(), RowOrigin::TopLeft)?;
        image.filepath = Some(path.to_string_lossy().into_owned());
        Ok(image)
    }

    #[must_use]
    pub fn with_filepath(mut self, filepath: impl Into<String>) -> Self {
        self.filepath = Some(filepath.into());
        self
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn filepath(&self) -> Option<&str> {
        self.filepath.as_deref()
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn origin(&self) -> RowOrigin {
        self.origin
    }

    #[must_use]
    pub fn pixels(&self) -> &[f32] {
        &self.pixels
    }

    /// Identifier used to derive the output file name: the file path when
    /// present, else the image name, else `"image"`.
    #[must_use]
    pub fn source_identifier(&self) -> &str {
        match self.filepath.as_deref() {
            Some(path) if !path.is_empty() => path,
            _ if !self.name.is_empty() => &self.name,
            _ => "image",
        }
    }

    /// RGBA values of the `index`-th row counted from the top of the picture.
    #[must_use]
    pub fn row_from_top(&self, index: u32) -> &[f32] {
        let source_row = match self.origin {
            RowOrigin::TopLeft => index,
            RowOrigin::BottomLeft => self.height - 1 - index,
        };
        let stride = self.width as usize * 4;
        let start = source_row as usize * stride;
        &self.pixels[start..start + stride]
    }
}
