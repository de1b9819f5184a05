//! Error types for color parsing

use thiserror::Error;

/// Error returned when a color string cannot be parsed.
///
/// Carries the offending input verbatim so callers can report it.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("invalid color {input:?}: {reason}")]
pub struct ParseColorError {
    input: String,
    reason: ParseColorReason,
}

impl ParseColorError {
    pub(crate) fn new(input: &str, reason: ParseColorReason) -> Self {
        Self {
            input: input.to_string(),
            reason,
        }
    }

    /// The string that failed to parse.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Why parsing failed.
    pub fn reason(&self) -> &ParseColorReason {
        &self.reason
    }
}

/// The specific way a color string is malformed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseColorReason {
    /// Not a hex, `rgb()` or `rgba()` color
    #[error("unsupported color format (expected #rgb, #rrggbb, rgb() or rgba())")]
    UnsupportedFormat,
    /// Hex color with a digit count other than 3 or 6
    #[error("invalid hex color length {0} (expected 3 or 6 digits)")]
    InvalidHexLength(usize),
    /// Hex color containing a non-hex character
    #[error("invalid hex digit")]
    InvalidHexDigit,
    /// Functional notation with the wrong number of components
    #[error("expected {expected} components, found {found}")]
    ComponentCount {
        /// Components required by the function name
        expected: usize,
        /// Components present in the input
        found: usize,
    },
    /// Channel that is not an integer in 0..=255
    #[error("invalid channel {0:?} (expected an integer from 0 to 255)")]
    InvalidChannel(String),
    /// Alpha that is not a number in 0..=1
    #[error("invalid alpha {0:?} (expected a number from 0 to 1)")]
    InvalidAlpha(String),
}
