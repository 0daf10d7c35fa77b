//! In-memory document source
//!
//! Vector-backed [`DocumentSource`] used by the test suite and by callers
//! that already hold their documents and only want the schema engine.

use std::collections::BTreeMap;

use async_trait::async_trait;
use futures::StreamExt;

use super::{sampling, DocumentSource, DocumentStream};
use crate::config::Sampling;
use crate::error::{Error, Result};
use crate::types::Document;

/// Document source backed by in-memory vectors
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    collections: BTreeMap<String, Vec<Document>>,
}

impl MemorySource {
    /// Create an empty source
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a collection, builder style
    #[must_use]
    pub fn with_collection(mut self, name: impl Into<String>, documents: Vec<Document>) -> Self {
        self.collections.insert(name.into(), documents);
        self
    }

    /// Add or replace a collection
    pub fn insert(&mut self, name: impl Into<String>, documents: Vec<Document>) {
        self.collections.insert(name.into(), documents);
    }
}

#[async_trait]
impl DocumentSource for MemorySource {
    async fn collection_names(&self) -> Result<Vec<String>> {
        Ok(self.collections.keys().cloned().collect())
    }

    async fn documents(&self, collection: &str, sampling: Sampling) -> Result<DocumentStream> {
        let documents = self
            .collections
            .get(collection)
            .ok_or_else(|| Error::collection_not_found(collection))?
            .clone();

        let stream = futures::stream::iter(documents.into_iter().map(Ok)).boxed();
        Ok(sampling::apply(stream, sampling))
    }
}
