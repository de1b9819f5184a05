//! Color string parser
//!
//! Accepts `#rgb`, `#rrggbb`, `rgb(r, g, b)` and `rgba(r, g, b, a)`.
//! Whitespace is insignificant everywhere except inside a number, and both
//! hex digits and function names are case-insensitive.

use super::error::{ParseColorError, ParseColorReason};
use super::rgba::Color;

/// Parse a color string. Parsing is all-or-nothing.
pub(super) fn parse_color(input: &str) -> Result<Color, ParseColorError> {
    parse_trimmed(input.trim()).map_err(|reason| ParseColorError::new(input, reason))
}

fn parse_trimmed(s: &str) -> Result<Color, ParseColorReason> {
    if let Some(hex) = s.strip_prefix('#') {
        return parse_hex(hex);
    }

    let (name, body) = split_function(s).ok_or(ParseColorReason::UnsupportedFormat)?;
    let expected = match name.to_ascii_lowercase().as_str() {
        "rgb" => 3,
        "rgba" => 4,
        _ => return Err(ParseColorReason::UnsupportedFormat),
    };

    let components: Vec<&str> = if body.trim().is_empty() {
        Vec::new()
    } else {
        body.split(',').map(str::trim).collect()
    };
    if components.len() != expected {
        return Err(ParseColorReason::ComponentCount {
            expected,
            found: components.len(),
        });
    }

    let r = parse_channel(components[0])?;
    let g = parse_channel(components[1])?;
    let b = parse_channel(components[2])?;
    let a = match components.get(3) {
        Some(alpha) => parse_alpha(alpha)?,
        None => 1.0,
    };

    Ok(Color::rgba(r, g, b, a))
}

/// Split `name(body)` into its name and body.
fn split_function(s: &str) -> Option<(&str, &str)> {
    let open = s.find('(')?;
    let body = s[open + 1..].strip_suffix(')')?;
    Some((s[..open].trim_end(), body))
}

fn parse_hex(hex: &str) -> Result<Color, ParseColorReason> {
    let digits: Vec<u8> = hex
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| {
            c.to_digit(16)
                .map(|d| d as u8)
                .ok_or(ParseColorReason::InvalidHexDigit)
        })
        .collect::<Result<_, _>>()?;

    match digits.as_slice() {
        // Shorthand: each digit is repeated (0xF -> 0xFF)
        [r, g, b] => Ok(Color::rgb(r * 17, g * 17, b * 17)),
        [r1, r2, g1, g2, b1, b2] => Ok(Color::rgb(
            r1 * 16 + r2,
            g1 * 16 + g2,
            b1 * 16 + b2,
        )),
        other => Err(ParseColorReason::InvalidHexLength(other.len())),
    }
}

fn parse_channel(s: &str) -> Result<u8, ParseColorReason> {
    let valid = !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    valid
        .then(|| s.parse::<u8>().ok())
        .flatten()
        .ok_or_else(|| ParseColorReason::InvalidChannel(s.to_string()))
}

fn parse_alpha(s: &str) -> Result<f64, ParseColorReason> {
    s.parse::<f64>()
        .ok()
        .filter(|a| a.is_finite() && (0.0..=1.0).contains(a))
        .ok_or_else(|| ParseColorReason::InvalidAlpha(s.to_string()))
}
