//! Texture output
//!
//! - [`filename`]: deterministic, filesystem-safe texture file names
//! - [`color`]: linear → sRGB transfer and 8-bit quantization
//! - [`ppm`]: ASCII PPM (`P3`) encoding

pub mod color;
pub mod filename;
pub mod ppm;

pub use color::{linear_to_srgb, quantize_channel};
pub use filename::{sanitize_filename, texture_file_name, TEXTURE_EXTENSION};
pub use ppm::{encode_ppm, write_ppm, PpmEncoder, PPM_MAX_VALUE};
