//! Color serialization
//!
//! Opaque colors are written as `rgb(r,g,b)`, translucent ones as
//! `rgba(r,g,b,a)`. Alpha is rounded to four decimal places and
//! written in its shortest form, so output is stable across platforms and
//! re-parses to the same string. A translucent alpha never rounds up to
//! opaque: it is capped at `0.9999`.

use std::fmt;

use super::rgba::Color;

/// Decimal places kept when writing alpha.
const ALPHA_DECIMALS: i32 = 4;

/// Largest alpha written for a translucent color.
const MAX_TRANSLUCENT_ALPHA: f64 = 0.9999;

/// Round alpha to the precision used for output.
fn rounded_alpha(a: f64) -> f64 {
    let scale = 10f64.powi(ALPHA_DECIMALS);
    // `+ 0.0` folds -0.0 into 0.0
    (a * scale).round() / scale + 0.0
}

pub(super) fn write_color(f: &mut fmt::Formatter<'_>, color: &Color) -> fmt::Result {
    if color.is_opaque() {
        write!(f, "rgb({},{},{})", color.r, color.g, color.b)
    } else {
        let a = rounded_alpha(color.a).min(MAX_TRANSLUCENT_ALPHA);
        write!(f, "rgba({},{},{},{})", color.r, color.g, color.b, a)
    }
}
