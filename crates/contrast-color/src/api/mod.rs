//! Public API for the contrast-color crate.
//!
//! This module provides the high-level API: the [`contrasting_color`]
//! entry point, the validated [`ContrastOptions`] input and the unified
//! [`ContrastError`] type.

mod error;
mod options;

pub use error::ContrastError;
pub use options::{contrasting_color, ContrastOptions};
