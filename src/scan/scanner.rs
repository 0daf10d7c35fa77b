//! Scan orchestration
//!
//! Drives one database scan: list collections, filter, stream each
//! collection's sampled documents, and fold them into a schema tree one at
//! a time. Document absorption is strictly sequential; each merge mutates
//! state the next merge depends on.

use futures::TryStreamExt;
use tracing::{debug, info, trace, warn};

use crate::config::ScanConfig;
use crate::error::Result;
use crate::scan::{ScanReport, ScanStats};
use crate::schema::SchemaTree;
use crate::store::DocumentSource;

/// Outcome of scanning a single collection
#[derive(Debug, Clone, PartialEq)]
pub struct CollectionScan {
    /// The accumulated schema tree
    pub tree: SchemaTree,
    /// How many documents were folded into the tree
    pub documents_merged: u64,
}

/// Drives a scan of one database through a document source
pub struct Scanner<'a, S: DocumentSource> {
    source: &'a S,
    config: &'a ScanConfig,
}

impl<'a, S: DocumentSource> Scanner<'a, S> {
    /// Create a scanner over a source with the given configuration
    pub fn new(source: &'a S, config: &'a ScanConfig) -> Self {
        Self { source, config }
    }

    /// Scan every collection that passes the filter
    ///
    /// A store failure aborts the whole scan; partially merged trees are
    /// dropped, never serialized, since a schema derived from an
    /// arbitrarily truncated sample would be misleading.
    pub async fn scan_database(&self) -> Result<ScanReport> {
        let matcher = self.config.collections.matcher()?;
        let names = self.source.collection_names().await?;

        let mut report = ScanReport::new(self.config.store.database.clone());
        let mut stats = ScanStats::default();

        for name in names {
            if !matcher.matches(&name) {
                debug!(collection = %name, "collection filtered out");
                continue;
            }

            match self.scan_collection(&name).await? {
                Some(scan) => {
                    stats.collections_scanned += 1;
                    stats.documents_merged += scan.documents_merged;
                    report.collections.insert(name, scan.tree.to_json());
                }
                None => stats.collections_skipped += 1,
            }
        }

        report.stats = stats;
        info!("{}", report.summary());
        Ok(report)
    }

    /// Scan a single collection into a schema tree
    ///
    /// Returns `None` when the collection yields no documents; an empty
    /// sample produces no schema rather than an error.
    pub async fn scan_collection(&self, name: &str) -> Result<Option<CollectionScan>> {
        info!(collection = %name, "scanning collection");

        let mut documents = self.source.documents(name, self.config.sampling).await?;
        let mut tree = SchemaTree::new();
        let mut merged: u64 = 0;

        while let Some(document) = documents.try_next().await? {
            tree.merge_document(&document);
            merged += 1;
            trace!(collection = %name, merged, "merged document");
        }

        if merged == 0 {
            warn!(collection = %name, "collection yielded no documents, skipping");
            return Ok(None);
        }

        debug!(collection = %name, merged, "collection scanned");
        Ok(Some(CollectionScan {
            tree,
            documents_merged: merged,
        }))
    }
}
