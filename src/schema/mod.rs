//! The schema-merge engine
//!
//! Incrementally unifies the shapes seen across many documents into one
//! tree describing, per field path, which structural categories occur and
//! which concrete scalar types were observed.
//!
//! # Components
//!
//! - **Classifier**: total mapping from any BSON value to Record / Array /
//!   Scalar ([`classify`], [`Category`])
//! - **Nodes**: the closed sum type accumulating observations per field
//!   path ([`SchemaNode`], [`CategoryMap`])
//! - **Merger**: recursive fold of a new value into existing state
//!   ([`SchemaTree::merge_document`])
//! - **Serializer**: renders the tree as plain nested JSON
//!   ([`SchemaTree::to_json`])

mod merge;
mod serialize;
mod types;

pub use types::{
    classify, ArrayNode, Category, CategoryMap, Classified, RecordNode, ScalarNode, ScalarType,
    SchemaNode, SchemaTree,
};

#[cfg(test)]
mod tests;
