/// Linear value at which the sRGB curve switches from the linear toe to the power segment.
pub const SRGB_LINEAR_THRESHOLD: f32 = 0.003_130_8;

/// Linear → sRGB opto-electronic transfer (IEC 61966-2-1 piecewise curve).
///
/// Not clamped: values above 1 stay above 1 and negative values stay
/// negative; quantization clamps afterwards.
#[inline]
#[must_use]
pub fn linear_to_srgb(x: f32) -> f32 {
    if x <= SRGB_LINEAR_THRESHOLD {
        12.92 * x
    } else {
        1.055 * x.powf(1.0 / 2.4) - 0.055
    }
}

/// Scales a channel to `[0, 255]`, rounding half to even. NaN maps to 0.
#[inline]
#[must_use]
pub fn quantize_channel(x: f32) -> u8 {
    if x.is_nan() {
        return 0;
    }
    (x * 255.0).round_ties_even().clamp(0.0, 255.0) as u8
}
