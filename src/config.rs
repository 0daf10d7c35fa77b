//! Scan configuration
//!
//! This module contains the configuration structures for a scan, loadable
//! from a YAML file. The CLI layer applies environment and flag overrides
//! on top of the loaded values.

use crate::error::{Error, Result};
use crate::types::OptionStringExt;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

// ============================================================================
// Top-Level Scan Config
// ============================================================================

/// Complete scan configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScanConfig {
    /// Document store connection settings
    #[serde(default)]
    pub store: StoreConfig,

    /// Collection name filter
    #[serde(default)]
    pub collections: CollectionFilter,

    /// Sampling knobs applied before documents reach the engine
    #[serde(default)]
    pub sampling: Sampling,

    /// Schema file output settings
    #[serde(default)]
    pub output: OutputConfig,
}

impl ScanConfig {
    /// Load a scan configuration from a YAML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::FileNotFound {
                    path: path.display().to_string(),
                }
            } else {
                Error::config(format!(
                    "Failed to read config file '{}': {}",
                    path.display(),
                    e
                ))
            }
        })?;
        Self::from_str(&content)
    }

    /// Parse a scan configuration from a YAML string
    ///
    /// Parsing does not validate: the database name and other fields may
    /// still arrive from the environment or CLI layers. Call [`validate`]
    /// once all layers are merged.
    ///
    /// [`validate`]: ScanConfig::validate
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(yaml: &str) -> Result<Self> {
        let config: ScanConfig = serde_yaml::from_str(yaml)
            .map_err(|e| Error::config(format!("Failed to parse config YAML: {e}")))?;
        Ok(config)
    }

    /// Validate the fully merged configuration
    pub fn validate(&self) -> Result<()> {
        if self.store.database.is_empty() {
            return Err(Error::missing_field("database"));
        }
        if self.store.port == 0 {
            return Err(Error::invalid_value("port", "must be non-zero"));
        }
        self.sampling.validate()?;
        self.collections.matcher()?;
        Ok(())
    }
}

// ============================================================================
// Store Connection
// ============================================================================

/// Document store connection settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Full connection URI; takes precedence over host/port when set
    #[serde(default)]
    pub uri: Option<String>,

    /// Store hostname
    #[serde(default = "default_host")]
    pub host: String,

    /// Store port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Database to scan
    #[serde(default)]
    pub database: String,

    /// Connection timeout in seconds
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,
}

fn default_host() -> String {
    "localhost".to_string()
}

fn default_port() -> u16 {
    27017
}

fn default_connect_timeout() -> u64 {
    10
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            uri: None,
            host: default_host(),
            port: default_port(),
            database: String::new(),
            connect_timeout_secs: default_connect_timeout(),
        }
    }
}

impl StoreConfig {
    /// The connection string to dial: the explicit URI when present,
    /// otherwise assembled from host and port
    pub fn connection_string(&self) -> String {
        self.uri
            .clone()
            .none_if_empty()
            .unwrap_or_else(|| format!("mongodb://{}:{}", self.host, self.port))
    }
}

// ============================================================================
// Sampling
// ============================================================================

/// Sampling knobs, applied on the collaborator side
///
/// The engine itself has no notion of skip or limit; it merges every
/// document it is handed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Sampling {
    /// Maximum documents pulled per collection; 0 means unlimited
    #[serde(default)]
    pub sample_size: u64,

    /// Keep every Nth pulled document; 1 keeps everything
    #[serde(default = "default_stride")]
    pub stride: usize,
}

fn default_stride() -> usize {
    1
}

impl Default for Sampling {
    fn default() -> Self {
        Self {
            sample_size: 0,
            stride: default_stride(),
        }
    }
}

impl Sampling {
    /// True when no cap is placed on pulled documents
    pub fn is_unlimited(&self) -> bool {
        self.sample_size == 0
    }

    /// Validate the sampling knobs
    pub fn validate(&self) -> Result<()> {
        if self.stride == 0 {
            return Err(Error::invalid_value("stride", "must be at least 1"));
        }
        Ok(())
    }
}

// ============================================================================
// Collection Filter
// ============================================================================

/// Include/exclude patterns for collection names
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CollectionFilter {
    /// Regular expressions a name must match (empty = match all)
    #[serde(default)]
    pub include: Vec<String>,

    /// Regular expressions that reject a name
    #[serde(default)]
    pub exclude: Vec<String>,
}

impl CollectionFilter {
    /// Compile the patterns into a matcher
    pub fn matcher(&self) -> Result<CollectionMatcher> {
        let compile = |patterns: &[String]| -> Result<Vec<Regex>> {
            patterns
                .iter()
                .map(|p| Regex::new(p).map_err(|e| Error::invalid_pattern(p, e.to_string())))
                .collect()
        };

        Ok(CollectionMatcher {
            include: compile(&self.include)?,
            exclude: compile(&self.exclude)?,
        })
    }
}

/// Compiled collection name matcher
#[derive(Debug, Clone)]
pub struct CollectionMatcher {
    include: Vec<Regex>,
    exclude: Vec<Regex>,
}

impl CollectionMatcher {
    /// True if the collection name passes the filter
    pub fn matches(&self, name: &str) -> bool {
        let included =
            self.include.is_empty() || self.include.iter().any(|re| re.is_match(name));
        let excluded = self.exclude.iter().any(|re| re.is_match(name));
        included && !excluded
    }
}

// ============================================================================
// Output
// ============================================================================

/// Schema file output settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Destination path for the schema file
    #[serde(default = "default_output_path")]
    pub path: PathBuf,

    /// Pretty-print the JSON output
    #[serde(default = "default_pretty")]
    pub pretty: bool,
}

fn default_output_path() -> PathBuf {
    PathBuf::from("data/schema.json")
}

fn default_pretty() -> bool {
    true
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: default_output_path(),
            pretty: default_pretty(),
        }
    }
}
