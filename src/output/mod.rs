//! Schema file output
//!
//! Writes the final collection-to-tree mapping to a JSON file. The scan
//! itself performs no I/O; this module is the only place a schema touches
//! disk.

mod writer;

pub use writer::{SchemaWriter, SchemaWriterConfig};

#[cfg(test)]
mod tests;
