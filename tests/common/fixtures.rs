//! Test fixtures and constants.

/// Background colors with known results at the default level
pub mod backgrounds {
    pub const BLACK: &str = "#000";
    pub const WHITE: &str = "#fff";
    pub const MAGENTA: &str = "#f0f";
    pub const HALF_BLACK: &str = "rgba(0, 0, 0, 0.5)";
}

/// A configuration exercising bare and detailed swatches
pub const PALETTE_YAML: &str = r##"
default_level: default
swatches:
  ink: "#000"
  paper: "#fff"
  accent: "#f0f"
  overlay:
    color: "rgba(0, 0, 0, 0.5)"
  muted:
    color: "#000"
    level: AA
"##;
