//! Storage module for persisting page documents
//!
//! This module handles the persistence side of the crawl: a document-style
//! store keyed by address, with point lookup and full-replacement upsert.
//! The crawl loop never inspects where or how documents are stored; it
//! receives an opened store and issues finds and writes.

mod schema;
mod sqlite;
mod traits;

pub use sqlite::SqliteStore;
pub use traits::{PageStore, StoreError, StoreResult};

use crate::DriftError;
use std::path::Path;

/// Opens a page store at the given path
///
/// # Arguments
///
/// * `path` - Path to the SQLite database file
/// * `collection` - Name of the page table
///
/// # Returns
///
/// * `Ok(SqliteStore)` - Successfully opened store
/// * `Err(DriftError)` - Failed to open or probe the store
pub fn open_store(path: &Path, collection: &str) -> Result<SqliteStore, DriftError> {
    SqliteStore::new(path, collection)
}

/// A page document: the persisted record for one visited address
///
/// The address is the identity key. `links` holds the resolved,
/// fragment-free, deduplicated anchor targets of the page; `content` is
/// either the whitespace-collapsed body text or, for media-classified
/// addresses, the base file name of the path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRecord {
    pub url: String,
    pub links: Vec<String>,
    pub content: String,
}
