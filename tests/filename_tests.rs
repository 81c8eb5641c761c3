//! Texture file naming tests
//!
//! Tests for:
//! - Path segment, extension and duplicate-suffix stripping
//! - Placeholder removal and character replacement
//! - Idempotence
//! - Source identifier selection from an image

use scene_export::resources::Image;
use scene_export::texture::{sanitize_filename, texture_file_name, TEXTURE_EXTENSION};

fn ppm(source: &str) -> String {
    sanitize_filename(source, TEXTURE_EXTENSION)
}

// ============================================================================
// Stripping
// ============================================================================

#[test]
fn keeps_last_path_segment() {
    assert_eq!(ppm("/home/user/textures/wood.png"), "wood.ppm");
    assert_eq!(ppm("C:\\assets\\Wood.jpg"), "Wood.ppm");
    assert_eq!(ppm("//textures/mixed\\sep/stone.exr"), "stone.ppm");
}

#[test]
fn strips_three_digit_duplicate_suffix() {
    assert_eq!(ppm("tex.001.png"), "tex.ppm");
    assert_eq!(ppm("tex.001"), "tex.ppm");
    assert_eq!(ppm("tex.001.002.png"), "tex.ppm");
}

#[test]
fn other_numeric_suffixes_are_kept() {
    assert_eq!(ppm("tex.0012.png"), "tex.0012.ppm");
    assert_eq!(ppm("tex.12.png"), "tex.12.ppm");
    assert_eq!(ppm("tex_001.png"), "tex_001.ppm");
}

#[test]
fn removes_tile_placeholders() {
    assert_eq!(ppm("//maps/albedo.<UDIM>.png"), "albedo..ppm");
    assert_eq!(ppm("rock_<UVTILE>.tif"), "rock_.ppm");
}

#[test]
fn replaces_disallowed_characters() {
    assert_eq!(ppm("my texture (final).png"), "my_texture_final_.ppm");
    assert_eq!(ppm("a&b=c.png"), "a_b_c.ppm");
    assert_eq!(ppm("ok-name_1.2.png"), "ok-name_1.2.ppm");
}

#[test]
fn empty_and_dot_only_fall_back() {
    assert_eq!(ppm(""), "image.ppm");
    assert_eq!(ppm("textures/"), "image.ppm");
    assert_eq!(ppm(".."), "image.ppm");
}

#[test]
fn hidden_style_names_keep_their_dot() {
    assert_eq!(ppm(".png"), ".png.ppm");
}

#[test]
fn custom_extension() {
    assert_eq!(sanitize_filename("wood.png", ".txt"), "wood.txt");
    assert_eq!(sanitize_filename("wood.png", ""), "wood");
}

// ============================================================================
// Idempotence
// ============================================================================

#[test]
fn sanitizing_twice_changes_nothing() {
    let sources = [
        "wood.png",
        "tex.001.png",
        "tex.0012.png",
        "my texture (final).png",
        "C:\\a\\b\\c.d.e",
        "//maps/albedo.<UDIM>.png",
        "",
        "...",
        ".hidden",
        "a..png",
        "木材.jpg",
        "noext",
    ];
    for source in sources {
        let once = ppm(source);
        assert_eq!(ppm(&once), once, "not idempotent for {source:?}");
    }
}

// ============================================================================
// Image Source Identifier
// ============================================================================

#[test]
fn file_path_is_preferred_over_name() {
    let image = Image::solid("Wood Image", 1, 1, [1.0; 4]).with_filepath("//tex/oak.001.jpg");
    assert_eq!(texture_file_name(&image), "oak.ppm");
}

#[test]
fn name_is_used_without_path() {
    let image = Image::solid("Generated Noise", 1, 1, [1.0; 4]);
    assert_eq!(texture_file_name(&image), "Generated_Noise.ppm");
}

#[test]
fn nameless_image_falls_back() {
    let image = Image::solid("", 1, 1, [1.0; 4]);
    assert_eq!(texture_file_name(&image), "image.ppm");
}
