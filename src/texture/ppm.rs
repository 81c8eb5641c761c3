//! ASCII PPM encoding
//!
//! Output layout:
//!
//! ```text
//! P3
//! <width> <height>
//! 255
//! R G B R G B ...      <- one line per pixel row, top row first
//! ```
//!
//! Source buffers with a bottom-left origin are flipped so the file always
//! starts with the top row. Alpha is dropped.

use std::fmt::Write as _;
use std::io::{self, Write};
use std::path::Path;

use crate::errors::Result;
use crate::resources::image::Image;
use crate::texture::color::{linear_to_srgb, quantize_channel};
use crate::utils::fs::write_atomic;

/// Maximum channel value written in the header.
pub const PPM_MAX_VALUE: u32 = 255;

#[derive(Debug, Clone, Copy, Default)]
pub struct PpmEncoder {
    /// Apply the linear → sRGB transfer before quantizing.
    pub apply_srgb: bool,
}

impl PpmEncoder {
    #[must_use]
    pub fn new(apply_srgb: bool) -> Self {
        Self { apply_srgb }
    }

    /// Quantized RGB of one RGBA pixel.
    #[must_use]
    pub fn encode_pixel(&self, rgba: &[f32]) -> [u8; 3] {
        let channel = |x: f32| {
            let x = if self.apply_srgb { linear_to_srgb(x) } else { x };
            quantize_channel(x)
        };
        [channel(rgba[0]), channel(rgba[1]), channel(rgba[2])]
    }

    /// Streams the PPM text of `image` into `out`.
    pub fn encode<W: Write>(&self, image: &Image, mut out: W) -> io::Result<()> {
        let (width, height) = (image.width(), image.height());
        write!(out, "P3\n{width} {height}\n{PPM_MAX_VALUE}\n")?;

        let mut line = String::with_capacity(width as usize * 12);
        for row in 0..height {
            line.clear();
            for (i, rgba) in image.row_from_top(row).chunks_exact(4).enumerate() {
                if i > 0 {
                    line.push(' ');
                }
                let [r, g, b] = self.encode_pixel(rgba);
                let _ = write!(line, "{r} {g} {b}");
            }
            line.push('\n');
            out.write_all(line.as_bytes())?;
        }

        Ok(())
    }

    /// PPM text of `image` as bytes.
    #[must_use]
    pub fn encode_to_vec(&self, image: &Image) -> Vec<u8> {
        let mut buf = Vec::new();
        // Writing into a Vec cannot fail.
        let _ = self.encode(image, &mut buf);
        buf
    }

    /// Encodes `image` to `path`, creating the parent directory if needed.
    pub fn write_file(&self, image: &Image, path: &Path) -> Result<()> {
        write_atomic(path, &self.encode_to_vec(image))?;
        log::debug!(
            "Wrote texture {} ({}x{})",
            path.display(),
            image.width(),
            image.height()
        );
        Ok(())
    }
}

/// Encodes `image` into `out`; see [`PpmEncoder::encode`].
pub fn encode_ppm<W: Write>(image: &Image, out: W, apply_srgb: bool) -> io::Result<()> {
    PpmEncoder::new(apply_srgb).encode(image, out)
}

/// Encodes `image` to `path`; see [`PpmEncoder::write_file`].
pub fn write_ppm(image: &Image, path: &Path, apply_srgb: bool) -> Result<()> {
    PpmEncoder::new(apply_srgb).write_file(image, path)
}
