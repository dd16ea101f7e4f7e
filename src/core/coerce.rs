//! Per-tag value coercion
//!
//! A handful of XMP properties are numeric. Their text is read the lenient
//! way most metadata producers expect: leading whitespace is skipped, the
//! longest numeric prefix is used and trailing garbage is ignored. Text with
//! no numeric prefix becomes [`XmpValue::NotANumber`] instead of failing the
//! whole packet.

use crate::types::value::XmpValue;

/// Coerce trimmed text according to the tag it was found in.
///
/// | Tag | Result |
/// |---|---|
/// | `stArea:x`, `stArea:y`, `stArea:w`, `stArea:h` | [`XmpValue::Float`] |
/// | `xmp:Rating` | [`XmpValue::Integer`] |
/// | `MicrosoftPhoto:Rating` | [`XmpValue::Integer`] star rating, see [`star_rating`] |
/// | anything else | [`XmpValue::String`] |
pub fn coerce_value(tag: &str, text: &str) -> XmpValue {
    match tag {
        "stArea:x" | "stArea:y" | "stArea:w" | "stArea:h" => {
            parse_float_prefix(text).map_or(XmpValue::NotANumber, XmpValue::Float)
        }
        "xmp:Rating" => parse_int_prefix(text).map_or(XmpValue::NotANumber, XmpValue::Integer),
        "MicrosoftPhoto:Rating" => parse_int_prefix(text)
            .map(star_rating)
            .map_or(XmpValue::NotANumber, XmpValue::Integer),
        _ => XmpValue::String(text.to_string()),
    }
}

/// Map a 0-100 percentage rating onto 1-5 stars: `floor((n + 12) / 25) + 1`.
pub fn star_rating(percent: i64) -> i64 {
    percent.saturating_add(12).div_euclid(25) + 1
}

/// Parse the leading integer of `text`.
///
/// Accepts an optional sign and a `0x`/`0X` hexadecimal prefix. Parsing stops
/// at the first non-digit, so `"4.5"` reads as 4. Values beyond the `i64`
/// range saturate.
pub fn parse_int_prefix(text: &str) -> Option<i64> {
    let (negative, rest) = split_sign(text.trim_start());
    let (radix, digits) = match rest.get(..2) {
        Some("0x" | "0X") => (16, &rest[2..]),
        _ => (10, rest),
    };

    let mut value: i64 = 0;
    let mut seen_digit = false;
    for digit in digits.chars().map_while(|c| c.to_digit(radix)) {
        seen_digit = true;
        let scaled = value.saturating_mul(i64::from(radix));
        value = if negative {
            scaled.saturating_sub(i64::from(digit))
        } else {
            scaled.saturating_add(i64::from(digit))
        };
    }

    seen_digit.then_some(value)
}

/// Parse the leading decimal floating-point number of `text`.
///
/// Accepts an optional sign, digits with an optional fraction, an optional
/// exponent, and `Infinity`. Trailing text is ignored.
pub fn parse_float_prefix(text: &str) -> Option<f64> {
    let text = text.trim_start();
    let (negative, rest) = split_sign(text);

    if rest.starts_with("Infinity") {
        return Some(if negative {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        });
    }

    let bytes = rest.as_bytes();
    let mut end = count_digits(bytes);
    let mut mantissa_digits = end;
    if bytes.get(end) == Some(&b'.') {
        let fraction = count_digits(&bytes[end + 1..]);
        mantissa_digits += fraction;
        end += 1 + fraction;
    }
    if mantissa_digits == 0 {
        return None;
    }

    // Exponent only counts when at least one digit follows it
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_start = end + 1;
        if matches!(bytes.get(exp_start), Some(b'+' | b'-')) {
            exp_start += 1;
        }
        let exp_digits = count_digits(&bytes[exp_start.min(bytes.len())..]);
        if exp_digits > 0 {
            end = exp_start + exp_digits;
        }
    }

    let sign_len = text.len() - rest.len();
    text[..sign_len + end].parse::<f64>().ok()
}

fn split_sign(text: &str) -> (bool, &str) {
    if let Some(rest) = text.strip_prefix('-') {
        (true, rest)
    } else {
        (false, text.strip_prefix('+').unwrap_or(text))
    }
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}
