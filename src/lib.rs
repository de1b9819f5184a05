//! Legible - contrasting colors for arbitrary backgrounds
//!
//! Command-line front end for the `contrast-color` crate.
//! This library exposes modules for integration testing.

pub mod error;
pub mod models;
pub mod services;
