// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::unused_self)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::unnecessary_wraps)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::unused_async)]

//! # docprobe
//!
//! Structural schema inference for document-store collections.
//!
//! docprobe connects to a MongoDB database, samples documents from each
//! collection, and incrementally unifies the shapes it sees into one tree
//! per collection describing, for every field path, which structural
//! categories (record / array / scalar) occur and which concrete scalar
//! types were observed. Polymorphic fields are reported, not coerced.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use docprobe::config::ScanConfig;
//! use docprobe::scan::Scanner;
//! use docprobe::store::MongoStore;
//!
//! #[tokio::main]
//! async fn main() -> docprobe::Result<()> {
//!     let config = ScanConfig::load("scan.yaml")?;
//!     let store = MongoStore::connect(&config.store).await?;
//!
//!     let report = Scanner::new(&store, &config).scan_database().await?;
//!     println!("{}", serde_json::to_string_pretty(&report.schema_json())?);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                         Scanner                             │
//! │  collection_names() → filter → documents() → fold → report  │
//! └─────────────────────────────────────────────────────────────┘
//!          │                                   │
//! ┌────────┴──────────┐              ┌─────────┴────────────────┐
//! │  DocumentSource   │              │      Schema engine       │
//! ├───────────────────┤              ├──────────────────────────┤
//! │ MongoStore        │              │ classify → Category      │
//! │ MemorySource      │              │ merge    → SchemaTree    │
//! │ sampling (stride) │              │ serialize→ JSON mapping  │
//! └───────────────────┘              └──────────────────────────┘
//! ```
//!
//! The schema engine is synchronous, pure, and infallible: classification
//! is total over every BSON value and a merge always has a defined action.
//! All I/O lives in the store and output collaborators.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]
#![allow(missing_docs)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for docprobe
pub mod error;

/// Common types and type aliases
pub mod types;

/// Scan configuration (YAML file, env, CLI layers)
pub mod config;

/// The schema-merge engine: classifier, nodes, merger, serializer
pub mod schema;

/// Document-store collaborators and sampling
pub mod store;

/// Scan orchestration and reports
pub mod scan;

/// Schema file output
pub mod output;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::*;

// Re-export commonly used types
pub use schema::{Category, ScalarType, SchemaNode, SchemaTree};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
