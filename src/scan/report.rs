//! Scan reports and counters

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::types::{JsonValue, SchemaJson};

/// Counters accumulated over one database scan
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ScanStats {
    /// Collections that produced a schema tree
    pub collections_scanned: usize,
    /// Collections skipped because they yielded no documents
    pub collections_skipped: usize,
    /// Total documents folded into trees across all collections
    pub documents_merged: u64,
}

/// Result of scanning one database
#[derive(Debug, Clone, Serialize)]
pub struct ScanReport {
    /// Name of the scanned database
    pub database: String,

    /// When the scan finished assembling this report
    pub generated_at: DateTime<Utc>,

    /// Serialized schema tree per scanned collection
    pub collections: SchemaJson,

    /// Scan counters
    pub stats: ScanStats,
}

impl ScanReport {
    /// Create an empty report for a database
    pub fn new(database: impl Into<String>) -> Self {
        Self {
            database: database.into(),
            generated_at: Utc::now(),
            collections: SchemaJson::new(),
            stats: ScanStats::default(),
        }
    }

    /// The schema mapping that goes into the output file:
    /// collection name to serialized tree
    pub fn schema_json(&self) -> JsonValue {
        JsonValue::Object(
            self.collections
                .iter()
                .map(|(name, tree)| (name.clone(), tree.clone()))
                .collect(),
        )
    }

    /// One-line human summary for logs and CLI output
    pub fn summary(&self) -> String {
        format!(
            "scanned {} collection(s) in '{}', merged {} document(s), skipped {} empty",
            self.stats.collections_scanned,
            self.database,
            self.stats.documents_merged,
            self.stats.collections_skipped,
        )
    }
}
