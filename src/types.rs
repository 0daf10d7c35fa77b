//! Common types used throughout docprobe
//!
//! This module contains shared type definitions, type aliases,
//! and utility types used across multiple modules.

use std::collections::BTreeMap;

// ============================================================================
// Type Aliases
// ============================================================================

/// A document as delivered by the store: string field names to BSON values
pub type Document = mongodb::bson::Document;

/// A single BSON value (re-exported from the driver)
pub type BsonValue = mongodb::bson::Bson;

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

/// The serialized per-database schema: collection name to schema tree
pub type SchemaJson = BTreeMap<String, JsonValue>;

// ============================================================================
// Utilities
// ============================================================================

/// Extension trait for Option<String> to handle empty strings
pub trait OptionStringExt {
    /// Returns None if the string is empty
    fn none_if_empty(self) -> Option<String>;
}

impl OptionStringExt for Option<String> {
    fn none_if_empty(self) -> Option<String> {
        self.filter(|s| !s.is_empty())
    }
}

impl OptionStringExt for String {
    fn none_if_empty(self) -> Option<String> {
        if self.is_empty() {
            None
        } else {
            Some(self)
        }
    }
}
