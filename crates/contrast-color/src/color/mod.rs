//! Color type, parsing and formatting
//!
//! [`Color`] is an 8-bit sRGB triple with a floating-point alpha. It is
//! produced by the parser ([`str::parse`]) and serialized by its
//! [`Display`](std::fmt::Display) implementation.
//!
//! # Example
//!
//! ```
//! use contrast_color::Color;
//!
//! let color: Color = "rgba(0, 0, 0, 0.5)".parse().unwrap();
//! assert_eq!(color.a, 0.5);
//! assert_eq!(color.to_string(), "rgba(0,0,0,0.5)");
//! ```

mod error;
mod format;
mod parse;
mod rgba;

pub use error::{ParseColorError, ParseColorReason};
pub use rgba::Color;
