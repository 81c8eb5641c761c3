//! Texture encoding tests
//!
//! Tests for:
//! - Linear → sRGB transfer curve
//! - Channel quantization (rounding, clamping, NaN)
//! - PPM layout and row flipping
//! - Writing to disk

use std::path::PathBuf;

use scene_export::resources::{Image, RowOrigin};
use scene_export::texture::color::SRGB_LINEAR_THRESHOLD;
use scene_export::texture::{encode_ppm, linear_to_srgb, quantize_channel, write_ppm, PpmEncoder};
use uuid::Uuid;

// ============================================================================
// Helper
// ============================================================================

fn temp_root() -> PathBuf {
    std::env::temp_dir().join(format!("scene_export_texture_{}", Uuid::new_v4()))
}

fn encode(image: &Image, apply_srgb: bool) -> String {
    let mut buf = Vec::new();
    encode_ppm(image, &mut buf, apply_srgb).unwrap();
    String::from_utf8(buf).unwrap()
}

// ============================================================================
// Transfer Curve
// ============================================================================

#[test]
fn transfer_end_points() {
    assert_eq!(linear_to_srgb(0.0), 0.0);
    assert!((linear_to_srgb(1.0) - 1.0).abs() < 1e-6);
}

#[test]
fn transfer_is_continuous_at_breakpoint() {
    let below = linear_to_srgb(SRGB_LINEAR_THRESHOLD);
    let above = linear_to_srgb(SRGB_LINEAR_THRESHOLD + 1e-7);
    assert!((below - above).abs() < 1e-4);
}

#[test]
fn transfer_is_monotonic() {
    let mut previous = linear_to_srgb(0.0);
    for i in 1..=1000 {
        let value = linear_to_srgb(i as f32 / 1000.0);
        assert!(value >= previous);
        previous = value;
    }
}

#[test]
fn transfer_mid_grey() {
    // 18% grey encodes to roughly 46%
    assert!((linear_to_srgb(0.18) - 0.4614).abs() < 1e-3);
}

// ============================================================================
// Quantization
// ============================================================================

#[test]
fn quantize_clamps_and_rounds() {
    assert_eq!(quantize_channel(0.0), 0);
    assert_eq!(quantize_channel(1.0), 255);
    assert_eq!(quantize_channel(1.5), 255);
    assert_eq!(quantize_channel(-0.25), 0);
    assert_eq!(quantize_channel(f32::NAN), 0);
    assert_eq!(quantize_channel(f32::INFINITY), 255);
    // 127.5 is a tie and rounds to even
    assert_eq!(quantize_channel(0.5), 128);
}

#[test]
fn encode_pixel_drops_alpha() {
    let encoder = PpmEncoder::new(false);
    assert_eq!(encoder.encode_pixel(&[1.0, 0.0, 0.2, 0.0]), [255, 0, 51]);
}

#[test]
fn encode_pixel_with_srgb() {
    let encoder = PpmEncoder::new(true);
    assert_eq!(encoder.encode_pixel(&[1.0, 0.0, SRGB_LINEAR_THRESHOLD, 1.0]), [255, 0, 10]);
}

// ============================================================================
// PPM Layout
// ============================================================================

#[test]
fn bottom_left_origin_is_flipped() {
    // Bottom row red, top row green
    let image = Image::new(
        "flip",
        1,
        2,
        vec![1.0, 0.0, 0.0, 1.0, 0.0, 1.0, 0.0, 1.0],
        RowOrigin::BottomLeft,
    )
    .unwrap();

    assert_eq!(encode(&image, false), "P3\n1 2\n255\n0 255 0\n255 0 0\n");
}

#[test]
fn top_left_origin_is_kept() {
    let image = Image::new(
        "keep",
        1,
        2,
        vec![1.0, 0.0, 0.0, 1.0, 0.0, 1.0, 0.0, 1.0],
        RowOrigin::TopLeft,
    )
    .unwrap();

    assert_eq!(encode(&image, false), "P3\n1 2\n255\n255 0 0\n0 255 0\n");
}

#[test]
fn one_line_per_row() {
    let image = Image::solid("grey", 3, 2, [0.5, 0.5, 0.5, 1.0]);
    let text = encode(&image, false);
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines[0], "P3");
    assert_eq!(lines[1], "3 2");
    assert_eq!(lines[2], "255");
    assert_eq!(lines.len(), 5);
    assert_eq!(lines[3], "128 128 128 128 128 128 128 128 128");
}

#[test]
fn pixel_buffer_size_is_validated() {
    let result = Image::new("bad", 2, 2, vec![0.0; 12], RowOrigin::BottomLeft);
    assert!(result.is_err());
}

// ============================================================================
// Files
// ============================================================================

#[test]
fn write_creates_parent_directory() {
    let root = temp_root();
    let path = root.join("textures").join("red.ppm");
    let image = Image::solid("red", 2, 1, [1.0, 0.0, 0.0, 1.0]);

    write_ppm(&image, &path, false).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    assert_eq!(text, "P3\n2 1\n255\n255 0 0 255 0 0\n");
    assert!(!root.join("textures").join("red.ppm.tmp").exists());

    std::fs::remove_dir_all(&root).unwrap();
}

#[test]
fn write_overwrites_existing_file() {
    let root = temp_root();
    let path = root.join("t.ppm");
    write_ppm(&Image::solid("a", 1, 1, [1.0; 4]), &path, false).unwrap();
    write_ppm(&Image::solid("b", 1, 1, [0.0; 4]), &path, false).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.ends_with("0 0 0\n"));

    std::fs::remove_dir_all(&root).unwrap();
}
