//! Texture file naming
//!
//! Maps an image's source identifier (a file path or an image name) to a
//! safe output file name. The mapping is a pure function, so the same
//! source always lands on the same file across runs.
//!
//! Steps, in order:
//! 1. keep the last path segment (`/` or `\` separated)
//! 2. remove `<UDIM>` / `<UVTILE>` tile placeholders
//! 3. drop the extension (last dot that follows a non-dot character)
//! 4. drop trailing `.NNN` duplicate suffixes (exactly three digits)
//! 5. collapse each run of characters outside `[A-Za-z0-9._-]` into `_`
//! 6. fall back to `image` when nothing usable remains
//! 7. append the target extension
//!
//! Sanitizing an already sanitized name returns it unchanged.
//!
//! Distinct sources can map to the same name (`a b.png` and `a_b.png`).
//! Collisions are not detected: the exporter writes both in object order
//! and the later texture overwrites the earlier one on disk.

use crate::resources::image::Image;

/// Extension of every exported texture.
pub const TEXTURE_EXTENSION: &str = ".ppm";

const PLACEHOLDER_TOKENS: [&str; 2] = ["<UDIM>", "<UVTILE>"];

const FALLBACK_NAME: &str = "image";

/// Sanitizes `source` and appends `extension` (including its dot).
#[must_use]
pub fn sanitize_filename(source: &str, extension: &str) -> String {
    let segment = source.rsplit(['/', '\\']).next().unwrap_or(source);

    let mut name = segment.to_string();
    for token in PLACEHOLDER_TOKENS {
        name = name.replace(token, "");
    }

    let stem = strip_duplicate_suffixes(strip_extension(&name));
    let mut sanitized = replace_disallowed(stem);

    // "", "." and ".." are not usable file names
    if sanitized.chars().all(|c| c == '.') {
        sanitized = FALLBACK_NAME.to_string();
    }

    sanitized.push_str(extension);
    sanitized
}

/// Output file name for an image's texture.
#[must_use]
pub fn texture_file_name(image: &Image) -> String {
    sanitize_filename(image.source_identifier(), TEXTURE_EXTENSION)
}

fn strip_extension(name: &str) -> &str {
    match name.rfind('.') {
        Some(dot) if name[..dot].chars().any(|c| c != '.') => &name[..dot],
        _ => name,
    }
}

fn strip_duplicate_suffixes(mut stem: &str) -> &str {
    while let Some(rest) = duplicate_suffix_base(stem) {
        stem = rest;
    }
    stem
}

fn duplicate_suffix_base(stem: &str) -> Option<&str> {
    let bytes = stem.as_bytes();
    let n = bytes.len();
    if n >= 4 && bytes[n - 4] == b'.' && bytes[n - 3..].iter().all(u8::is_ascii_digit) {
        Some(&stem[..n - 4])
    } else {
        None
    }
}

fn replace_disallowed(stem: &str) -> String {
    let mut out = String::with_capacity(stem.len());
    let mut in_run = false;
    for c in stem.chars() {
        if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
            out.push(c);
            in_run = false;
        } else if !in_run {
            out.push('_');
            in_run = true;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_extension_ignores_leading_dots() {
        assert_eq!(strip_extension("wood.png"), "wood");
        assert_eq!(strip_extension("a.b.c"), "a.b");
        assert_eq!(strip_extension(".hidden"), ".hidden");
        assert_eq!(strip_extension("..."), "...");
        assert_eq!(strip_extension("noext"), "noext");
    }

    #[test]
    fn test_duplicate_suffix_requires_three_digits() {
        assert_eq!(duplicate_suffix_base("tex.001"), Some("tex"));
        assert_eq!(duplicate_suffix_base("tex.0012"), None);
        assert_eq!(duplicate_suffix_base("tex.01"), None);
        assert_eq!(duplicate_suffix_base("tex001"), None);
    }

    #[test]
    fn test_replace_collapses_runs() {
        assert_eq!(replace_disallowed("a  b"), "a_b");
        assert_eq!(replace_disallowed("wood (rough)"), "wood_rough_");
        assert_eq!(replace_disallowed("木材"), "_");
    }
}
