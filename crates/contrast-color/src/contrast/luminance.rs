//! WCAG relative luminance and contrast ratio
//!
//! Relative luminance is computed from linearized sRGB channels
//! (IEC 61966-2-1) weighted by the Rec. 709 luminance coefficients.
//! The contrast ratio is `(L_lighter + 0.05) / (L_darker + 0.05)`, from
//! 1:1 (identical luminance) to 21:1 (black on white).

use crate::color::Color;

/// Rec. 709 luminance weights for linear R, G and B. Green dominates.
pub const LUMINANCE_WEIGHTS: [f64; 3] = [0.2126, 0.7152, 0.0722];

/// Flare term added to both luminances in the contrast ratio.
const FLARE: f64 = 0.05;

/// IEC 61966-2-1 exact formula: gamma-encoded sRGB (0.0..=1.0) to linear.
#[inline]
pub fn srgb_to_linear(srgb: f64) -> f64 {
    if srgb <= 0.04045 {
        srgb / 12.92
    } else {
        ((srgb + 0.055) / 1.055).powf(2.4)
    }
}

/// Relative luminance of float channels in the 0..=255 range.
fn channel_luminance(channels: [f64; 3]) -> f64 {
    channels
        .iter()
        .zip(LUMINANCE_WEIGHTS)
        .map(|(&c, weight)| weight * srgb_to_linear(c.clamp(0.0, 255.0) / 255.0))
        .sum()
}

/// Relative luminance of a color, in 0.0..=1.0. Alpha is ignored.
///
/// # Example
/// ```
/// use contrast_color::{relative_luminance, Color};
///
/// assert_eq!(relative_luminance(&Color::BLACK), 0.0);
/// assert!((relative_luminance(&Color::WHITE) - 1.0).abs() < 1e-12);
/// ```
pub fn relative_luminance(color: &Color) -> f64 {
    channel_luminance(color.channels())
}

/// WCAG contrast ratio between two relative luminances.
///
/// Symmetric in its arguments and always at least 1.0.
///
/// # Example
/// ```
/// use contrast_color::contrast_ratio;
///
/// assert!((contrast_ratio(0.0, 1.0) - 21.0).abs() < 1e-12);
/// assert_eq!(contrast_ratio(0.3, 0.3), 1.0);
/// ```
pub fn contrast_ratio(l1: f64, l2: f64) -> f64 {
    let (lighter, darker) = if l1 >= l2 { (l1, l2) } else { (l2, l1) };
    (lighter + FLARE) / (darker + FLARE)
}
