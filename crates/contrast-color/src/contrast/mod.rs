//! Contrast computation
//!
//! - [`luminance`]: WCAG relative luminance and contrast ratio
//! - [`level`]: named contrast policies and their target ratios
//! - [`solver`]: the mix search producing a contrasting color
//! - [`alpha`]: the visibility floor applied to translucent results

pub mod alpha;
pub mod level;
pub mod luminance;
pub mod solver;

pub use alpha::{lift_alpha, ALPHA_FLOOR};
pub use level::{ContrastLevel, UnknownLevelError};
pub use luminance::{contrast_ratio, relative_luminance};
pub use solver::{solve, Direction, Solution};
