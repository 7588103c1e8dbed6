//! Export configuration

use std::path::PathBuf;

/// Output file used when none is configured
pub const DEFAULT_OUTPUT: &str = "output.txt";

/// Configuration for the export process
#[derive(Debug, Clone)]
pub struct ExportConfig {
    /// Bundle destination, truncated on every run
    pub output_path: PathBuf,
}

impl ExportConfig {
    /// Create a new export configuration
    pub fn new(output_path: impl Into<PathBuf>) -> Self {
        Self {
            output_path: output_path.into(),
        }
    }

    /// Set the output file
    pub fn with_output(mut self, output_path: impl Into<PathBuf>) -> Self {
        self.output_path = output_path.into();
        self
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self::new(DEFAULT_OUTPUT)
    }
}
