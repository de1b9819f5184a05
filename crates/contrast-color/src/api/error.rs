//! Unified error type for the contrast-color public API.

use thiserror::Error;

use crate::color::ParseColorError;
use crate::contrast::UnknownLevelError;

/// Unified error type for the contrast-color public API.
///
/// # Example
///
/// ```
/// use contrast_color::{ContrastError, ContrastOptions};
///
/// fn options() -> Result<ContrastOptions, ContrastError> {
///     ContrastOptions::new("#336699")?.parse_level("AA")
/// }
/// # assert!(options().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ContrastError {
    /// The color string is not a supported format
    #[error(transparent)]
    Parse(#[from] ParseColorError),
    /// The level name is not in the level table
    #[error(transparent)]
    UnknownLevel(#[from] UnknownLevelError),
}
