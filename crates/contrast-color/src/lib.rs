//! contrast-color: legible foreground colors for arbitrary backgrounds
//!
//! Given a background color (opaque or translucent), this crate derives a
//! color that stays readable on top of it, following the WCAG
//! contrast-ratio model.
//!
//! # Quick Start
//!
//! ```
//! use contrast_color::contrasting_color;
//!
//! assert_eq!(contrasting_color("#000", None).unwrap(), "rgb(151,151,151)");
//! assert_eq!(contrasting_color("#000", Some("AA")).unwrap(), "rgb(128,128,128)");
//! assert_eq!(
//!     contrasting_color("rgba(0, 0, 0, 0.5)", None).unwrap(),
//!     "rgba(151,151,151,0.675)"
//! );
//! ```
//!
//! For repeated use, validate the input once with [`ContrastOptions`]:
//!
//! ```
//! use contrast_color::{ContrastLevel, ContrastOptions};
//!
//! let options = ContrastOptions::new("#fff")
//!     .unwrap()
//!     .with_level(ContrastLevel::AA);
//! let color = options.resolve();
//! assert!(color.is_opaque());
//! ```
//!
//! # Pipeline
//!
//! ```text
//! "#rrggbb" / "rgb()" / "rgba()"
//!     |
//!     v
//! Color parser            (color::parse)
//!     |
//!     v
//! Relative luminance L0   (contrast::luminance)
//!     |
//!     v
//! Direction               (L0 < 0.5 -> white, else black)
//!     |
//!     v
//! Mix search              (linear-light mix on a 0.05 grid,
//!     |                    minimal step reaching the target ratio)
//!     v
//! Alpha floor             (only when the input alpha is below 1)
//!     |
//!     v
//! Formatter               ("rgb(r,g,b)" / "rgba(r,g,b,a)")
//! ```
//!
//! # Contrast Levels
//!
//! | Level | Target ratio | Notes |
//! |-------|--------------|-------|
//! | [`ContrastLevel::Default`] | 7.0 | AAA-grade, used when no level is given |
//! | [`ContrastLevel::AA`] | 4.5 | WCAG 2.1 AA, normal text |
//!
//! ## Why the mix happens in linear light
//!
//! Mixing is done on squared channel values (`sqrt(c1² (1-t) + c2² t)`),
//! which approximates blending physical light rather than gamma-encoded
//! numbers. Mixing gamma-encoded values directly makes the first steps
//! toward white far too dark, so more of the grid would be spent before
//! the target ratio is reached and the results would drift away from
//! established output.
//!
//! Channels that already sit at the chosen extreme (0 or 255) are fixed
//! points of the mix: saturated inputs keep their saturated channels and
//! only the distant channels move. Hue is preserved; the result is not a
//! grey collapse.

pub mod api;
pub mod color;
pub mod contrast;

#[cfg(test)]
mod domain_tests;

pub use api::{contrasting_color, ContrastError, ContrastOptions};
pub use color::{Color, ParseColorError, ParseColorReason};
pub use contrast::{
    contrast_ratio, relative_luminance, solve, ContrastLevel, Direction, Solution,
    UnknownLevelError, ALPHA_FLOOR,
};
