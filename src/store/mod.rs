//! Document-store collaborators
//!
//! The scanner talks to a store through the [`DocumentSource`] seam: it
//! asks for collection names and for a finite, ordered, already-sampled
//! stream of documents per collection. Failures on this seam are fatal to
//! the scan of the collection in progress; nothing here is retried.

mod client;
mod memory;
pub mod sampling;

pub use client::MongoStore;
pub use memory::MemorySource;

use async_trait::async_trait;
use futures::stream::BoxStream;

use crate::config::Sampling;
use crate::error::Result;
use crate::types::Document;

/// A finite, ordered stream of documents from one collection
pub type DocumentStream = BoxStream<'static, Result<Document>>;

/// Seam between the scanner and a concrete document store
#[async_trait]
pub trait DocumentSource: Send + Sync {
    /// Names of the collections available for scanning
    async fn collection_names(&self) -> Result<Vec<String>>;

    /// Stream the sampled documents of one collection, in delivery order
    ///
    /// Sampling (pull cap and stride) is applied here, before documents
    /// reach the schema engine.
    async fn documents(&self, collection: &str, sampling: Sampling) -> Result<DocumentStream>;
}
