pub mod config;

pub use config::{AppConfig, SwatchConfig, CONFIG_ENV_VAR, DEFAULT_CONFIG_FILE};
