//! ContrastOptions -- the validated input to the contrast pipeline.
//!
//! [`ContrastOptions`] parses and validates the color and level once, at
//! construction, so resolving never fails.

use crate::color::Color;
use crate::contrast::{lift_alpha, solve, ContrastLevel, Solution};

use super::error::ContrastError;

/// Validated input for deriving a contrasting color.
///
/// # Design
///
/// - Constructor parses the color (no invalid states)
/// - Level setters consume and return `self` (standard builder pattern)
/// - [`resolve()`](Self::resolve) takes `&self` and cannot fail
///
/// # Example
///
/// ```
/// use contrast_color::{Color, ContrastLevel, ContrastOptions};
///
/// let options = ContrastOptions::new("#000")
///     .unwrap()
///     .with_level(ContrastLevel::AA);
///
/// assert_eq!(options.resolve(), Color::rgb(128, 128, 128));
/// assert_eq!(options.to_string(), "rgb(128,128,128)");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContrastOptions {
    color: Color,
    level: ContrastLevel,
}

impl ContrastOptions {
    /// Parse `color` and use the default level.
    pub fn new(color: &str) -> Result<Self, ContrastError> {
        Ok(Self::from_color(color.parse::<Color>()?))
    }

    /// Build options from an already parsed color.
    pub fn from_color(color: Color) -> Self {
        Self {
            color,
            level: ContrastLevel::default(),
        }
    }

    /// Set the contrast level.
    #[inline]
    pub fn with_level(mut self, level: ContrastLevel) -> Self {
        self.level = level;
        self
    }

    /// Set the contrast level by name. Unknown names are rejected.
    pub fn parse_level(self, level: &str) -> Result<Self, ContrastError> {
        Ok(self.with_level(level.parse::<ContrastLevel>()?))
    }

    /// The parsed source color.
    pub fn color(&self) -> Color {
        self.color
    }

    /// The selected level.
    pub fn level(&self) -> ContrastLevel {
        self.level
    }

    /// Run the solver without applying the alpha floor.
    pub fn solve(&self) -> Solution {
        solve(&self.color, self.level.target_ratio())
    }

    /// Derive the contrasting color.
    ///
    /// Opaque sources give an opaque result. Translucent sources keep a
    /// translucent result whose alpha is lifted to the visibility floor.
    pub fn resolve(&self) -> Color {
        let solved = self.solve().color;
        if self.color.is_opaque() {
            solved
        } else {
            solved.with_alpha(lift_alpha(self.color.a))
        }
    }
}

impl std::fmt::Display for ContrastOptions {
    /// Writes the resolved color.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.resolve(), f)
    }
}

/// Derive a color that stays legible on top of `color`.
///
/// `level` is `None` for the default level, or a level name (`"default"`,
/// `"AA"`).
///
/// # Errors
///
/// [`ContrastError::Parse`] for a malformed color and
/// [`ContrastError::UnknownLevel`] for an unrecognized level name.
///
/// # Example
///
/// ```
/// use contrast_color::contrasting_color;
///
/// assert_eq!(contrasting_color("#fff", None).unwrap(), "rgb(81,81,81)");
/// assert!(contrasting_color("#fff", Some("AAAA")).is_err());
/// assert!(contrasting_color("white", None).is_err());
/// ```
pub fn contrasting_color(color: &str, level: Option<&str>) -> Result<String, ContrastError> {
    let options = ContrastOptions::new(color)?;
    let options = match level {
        Some(level) => options.parse_level(level)?,
        None => options,
    };
    Ok(options.to_string())
}
