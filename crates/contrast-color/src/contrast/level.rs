//! Contrast levels
//!
//! A [`ContrastLevel`] names a minimum contrast policy. Each level maps to
//! a fixed target ratio through a static table.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Named minimum-contrast policy.
///
/// | Level | Ratio | Reference |
/// |-------|-------|-----------|
/// | `default` | 7.0 | WCAG 2.1 enhanced contrast (AAA) |
/// | `AA` | 4.5 | WCAG 2.1 minimum contrast, normal text |
///
/// Callers that do not pick a level get the stricter policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum ContrastLevel {
    /// AAA-grade target, used when no level is given
    #[default]
    Default,
    /// WCAG AA for normal text
    AA,
}

impl ContrastLevel {
    /// Every level, in table order.
    pub const ALL: [ContrastLevel; 2] = [ContrastLevel::Default, ContrastLevel::AA];

    /// Minimum contrast ratio this level requires.
    #[inline]
    pub const fn target_ratio(self) -> f64 {
        match self {
            ContrastLevel::Default => 7.0,
            ContrastLevel::AA => 4.5,
        }
    }

    /// Canonical spelling, as accepted by [`FromStr`].
    pub const fn as_str(self) -> &'static str {
        match self {
            ContrastLevel::Default => "default",
            ContrastLevel::AA => "AA",
        }
    }
}

/// Error returned for a level name that is not in the table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown contrast level {0:?} (expected one of: default, AA)")]
pub struct UnknownLevelError(pub String);

impl FromStr for ContrastLevel {
    type Err = UnknownLevelError;

    /// Parse a level name. Matching ignores ASCII case and surrounding
    /// whitespace; anything else is rejected rather than defaulted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        ContrastLevel::ALL
            .into_iter()
            .find(|level| level.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| UnknownLevelError(s.to_string()))
    }
}

impl TryFrom<String> for ContrastLevel {
    type Error = UnknownLevelError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ContrastLevel> for &'static str {
    fn from(level: ContrastLevel) -> Self {
        level.as_str()
    }
}

impl fmt::Display for ContrastLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
