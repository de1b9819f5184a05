use std::path::PathBuf;

use contrast_color::ContrastError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Contrast(#[from] ContrastError),

    #[error("Swatch '{name}': {source}")]
    Swatch {
        name: String,
        #[source]
        source: ContrastError,
    },

    #[error("Config error in {path}: {message}")]
    Config { path: PathBuf, message: String },

    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
