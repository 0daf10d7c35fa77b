//! Scan orchestration and reports
//!
//! One [`Scanner`] owns the merge session for a database: it pulls
//! already-sampled documents from a [`DocumentSource`], folds them into a
//! [`SchemaTree`](crate::schema::SchemaTree) per collection, and assembles
//! the final [`ScanReport`].
//!
//! [`DocumentSource`]: crate::store::DocumentSource

mod report;
mod scanner;

pub use report::{ScanReport, ScanStats};
pub use scanner::{CollectionScan, Scanner};
