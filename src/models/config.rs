use contrast_color::ContrastLevel;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::error::AppError;

/// Default config file looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "legible.yaml";

/// Environment variable overriding the config file location
pub const CONFIG_ENV_VAR: &str = "LEGIBLE_CONFIG";

/// Application configuration loaded from legible.yaml
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct AppConfig {
    /// Level used for swatches that don't set one
    #[serde(default)]
    pub default_level: ContrastLevel,

    /// Named background colors, resolved in name order
    #[serde(default)]
    pub swatches: BTreeMap<String, SwatchConfig>,
}

/// A background color to resolve.
///
/// Either a bare color string or a table with `color` and optional `level`.
/// Colors are kept as strings here and validated when the report is built,
/// so errors can name the swatch.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(untagged)]
pub enum SwatchConfig {
    Color(String),
    Detailed {
        color: String,
        #[serde(default)]
        level: Option<ContrastLevel>,
    },
}

impl SwatchConfig {
    pub fn color(&self) -> &str {
        match self {
            SwatchConfig::Color(color) => color,
            SwatchConfig::Detailed { color, .. } => color,
        }
    }

    pub fn level(&self) -> Option<ContrastLevel> {
        match self {
            SwatchConfig::Color(_) => None,
            SwatchConfig::Detailed { level, .. } => *level,
        }
    }
}

impl AppConfig {
    /// Parse configuration from a YAML string
    pub fn from_yaml(yaml: &str, path: &Path) -> Result<Self, AppError> {
        serde_yaml::from_str(yaml).map_err(|e| AppError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, AppError> {
        let content = std::fs::read_to_string(path).map_err(|source| AppError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_yaml(&content, path)?;
        tracing::info!(
            path = %path.display(),
            swatches = config.swatches.len(),
            default_level = %config.default_level,
            "Loaded configuration"
        );
        Ok(config)
    }

    /// Resolve the config path: explicit argument, then env var, then default file
    pub fn resolve_path(explicit: Option<PathBuf>) -> PathBuf {
        explicit
            .or_else(|| std::env::var(CONFIG_ENV_VAR).ok().map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE))
    }

    /// Level for a swatch, falling back to the configured default
    pub fn level_for(&self, swatch: &SwatchConfig) -> ContrastLevel {
        swatch.level().unwrap_or(self.default_level)
    }
}
