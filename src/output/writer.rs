//! JSON schema file writer

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{Error, Result};
use crate::scan::ScanReport;
use crate::types::JsonValue;

/// Configuration for the schema writer
#[derive(Debug, Clone)]
pub struct SchemaWriterConfig {
    pretty: bool,
}

impl Default for SchemaWriterConfig {
    fn default() -> Self {
        Self { pretty: true }
    }
}

impl SchemaWriterConfig {
    /// Create a new config with default settings
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable pretty-printing
    #[must_use]
    pub fn with_pretty(mut self, enabled: bool) -> Self {
        self.pretty = enabled;
        self
    }

    /// Get pretty-printing enabled
    #[must_use]
    pub fn is_pretty(&self) -> bool {
        self.pretty
    }
}

/// Writes serialized schemas to disk
#[derive(Debug, Clone, Default)]
pub struct SchemaWriter {
    config: SchemaWriterConfig,
}

impl SchemaWriter {
    /// Create a writer with the given config
    pub fn new(config: SchemaWriterConfig) -> Self {
        Self { config }
    }

    /// Write a scan report's schema mapping to a file
    pub fn write_report(&self, report: &ScanReport, path: impl AsRef<Path>) -> Result<()> {
        self.write_json(&report.schema_json(), path)
    }

    /// Write any JSON value to a file, creating parent directories
    pub fn write_json(&self, value: &JsonValue, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| {
                    Error::output(format!(
                        "Failed to create directory '{}': {}",
                        parent.display(),
                        e
                    ))
                })?;
            }
        }

        let body = if self.config.pretty {
            serde_json::to_string_pretty(value)?
        } else {
            serde_json::to_string(value)?
        };

        fs::write(path, body).map_err(|e| {
            Error::output(format!("Failed to write '{}': {}", path.display(), e))
        })?;

        info!(path = %path.display(), "schema written");
        Ok(())
    }
}
