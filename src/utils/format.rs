//! Number formatting in the style of C's `%.<N>g`.

/// Formats `value` with `precision` significant digits the way `printf("%.*g")` does.
///
/// Fixed notation is used when the decimal exponent lies in `[-4, precision)`,
/// scientific notation (`1.5e+07`) otherwise. Trailing zeros are removed in both.
#[must_use]
pub fn format_significant(value: f64, precision: usize) -> String {
    let precision = precision.max(1);

    if value == 0.0 {
        return if value.is_sign_negative() { "-0".to_string() } else { "0".to_string() };
    }
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf".to_string() } else { "-inf".to_string() };
    }

    // Round once in scientific form so the exponent reflects carries (9.996 -> 1.00e1).
    let scientific = format!("{:.*e}", precision - 1, value);
    let (mantissa, exponent) = scientific
        .split_once('e')
        .map_or((scientific.as_str(), 0), |(m, e)| (m, e.parse::<i32>().unwrap_or(0)));

    if exponent < -4 || exponent >= precision as i32 {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", trim_fraction(mantissa), sign, exponent.abs())
    } else {
        let decimals = (precision as i32 - 1 - exponent).max(0) as usize;
        trim_fraction(&format!("{value:.decimals$}")).to_string()
    }
}

fn trim_fraction(text: &str) -> &str {
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.')
    } else {
        text
    }
}
