//! Page store trait and error types
//!
//! This module defines the document-store contract the crawl loop writes
//! through, together with the associated error types.

use crate::storage::PageRecord;
use thiserror::Error;

/// Errors that can occur during page store operations
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for page store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Trait for page store backends
///
/// The crawl loop needs exactly three data operations — point lookup by
/// address, insert, and full-replacement update — plus a row count for
/// reporting. Each visited address results in exactly one of insert or
/// update, driven by the lookup.
pub trait PageStore {
    /// Looks up a page document by its address
    ///
    /// # Arguments
    ///
    /// * `url` - The address key
    ///
    /// # Returns
    ///
    /// * `Ok(Some(PageRecord))` - The stored document
    /// * `Ok(None)` - No document exists for this address
    fn find_page(&self, url: &str) -> StoreResult<Option<PageRecord>>;

    /// Inserts a new page document
    ///
    /// Fails if a document already exists for the address; callers decide
    /// between insert and update via `find_page`.
    fn insert_page(&mut self, page: &PageRecord) -> StoreResult<()>;

    /// Replaces the links and content of an existing page document
    ///
    /// Both fields are overwritten wholesale; there is no partial merge.
    fn update_page(&mut self, url: &str, links: &[String], content: &str) -> StoreResult<()>;

    /// Counts stored page documents
    fn count_pages(&self) -> StoreResult<u64>;
}
