//! RGBA color value type

use std::fmt;
use std::str::FromStr;

use super::error::ParseColorError;
use super::format::write_color;
use super::parse::parse_color;

/// An 8-bit sRGB color with an alpha channel.
///
/// Channels are gamma-encoded (the values found in CSS color strings).
/// Alpha is in the range 0.0..=1.0, where 1.0 is fully opaque.
///
/// `Color` is a plain value: every transformation returns a new color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    /// Red channel (0..=255)
    pub r: u8,
    /// Green channel (0..=255)
    pub g: u8,
    /// Blue channel (0..=255)
    pub b: u8,
    /// Alpha (0.0..=1.0)
    pub a: f64,
}

impl Color {
    /// Pure black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    /// Pure white.
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Create an opaque color.
    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Create a color with alpha. Alpha is clamped to 0.0..=1.0; NaN becomes 1.0.
    ///
    /// # Example
    /// ```
    /// use contrast_color::Color;
    /// assert_eq!(Color::rgba(0, 0, 0, 1.5).a, 1.0);
    /// assert_eq!(Color::rgba(0, 0, 0, -0.5).a, 0.0);
    /// ```
    #[inline]
    pub fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self::rgb(r, g, b).with_alpha(a)
    }

    /// Create an opaque color from float channels in the 0..=255 range.
    ///
    /// Rounds half away from zero and clamps to 0..=255.
    #[inline]
    pub fn from_channels(channels: [f64; 3]) -> Self {
        let [r, g, b] = channels.map(|c| c.round().clamp(0.0, 255.0) as u8);
        Self::rgb(r, g, b)
    }

    /// Return the same color with a different alpha (clamped to 0.0..=1.0).
    #[inline]
    pub fn with_alpha(self, a: f64) -> Self {
        let a = if a.is_nan() { 1.0 } else { a.clamp(0.0, 1.0) };
        Self { a, ..self }
    }

    /// Return the same color, fully opaque.
    #[inline]
    pub fn opaque(self) -> Self {
        Self { a: 1.0, ..self }
    }

    /// Whether the color carries no transparency.
    #[inline]
    pub fn is_opaque(&self) -> bool {
        self.a >= 1.0
    }

    /// The color channels as a byte array [R, G, B].
    #[inline]
    pub fn to_bytes(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// The color channels as floats in the 0..=255 range.
    #[inline]
    pub fn channels(self) -> [f64; 3] {
        self.to_bytes().map(f64::from)
    }
}

impl FromStr for Color {
    type Err = ParseColorError;

    /// Parse a color from `#rgb`, `#rrggbb`, `rgb(r, g, b)` or `rgba(r, g, b, a)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use contrast_color::Color;
    ///
    /// let magenta: Color = "#F0F".parse().unwrap();
    /// assert_eq!(magenta, Color::rgb(255, 0, 255));
    ///
    /// let veil: Color = "rgba( 0 , 0 , 0 , .25 )".parse().unwrap();
    /// assert_eq!(veil.a, 0.25);
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_color(s)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_color(f, self)
    }
}
