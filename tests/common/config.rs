//! Temporary configuration files.

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

/// A YAML config written to a temporary file, deleted on drop
pub struct TempConfig {
    file: NamedTempFile,
}

impl TempConfig {
    pub fn new(yaml: &str) -> Self {
        let mut file = tempfile::Builder::new()
            .suffix(".yaml")
            .tempfile()
            .expect("Failed to create temp config");
        file.write_all(yaml.as_bytes())
            .expect("Failed to write temp config");
        Self { file }
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }
}
