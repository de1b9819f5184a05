//! Common test infrastructure for Legible integration tests.
//!
//! Each test file compiles its own copy of this module, so items may appear
//! unused from the perspective of a single test file even though they're
//! used elsewhere.

#![allow(dead_code)]
#![allow(unused_imports)]

pub mod config;
pub mod fixtures;

pub use config::TempConfig;
