//! SQLite page store implementation
//!
//! This module provides a SQLite-based implementation of the PageStore
//! trait. Page documents live in a single table named after the configured
//! collection; the `links` field is stored as a JSON array column.

use crate::storage::schema::initialize_schema;
use crate::storage::traits::{PageStore, StoreError, StoreResult};
use crate::storage::PageRecord;
use crate::DriftError;
use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;

/// SQLite page store backend
pub struct SqliteStore {
    conn: Connection,
    collection: String,
}

impl SqliteStore {
    /// Opens or creates a page store database
    ///
    /// Opening doubles as the startup connectivity probe: the schema is
    /// initialized and the collection is queried once before the store is
    /// handed to the caller. A failure here must abort initialization.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the SQLite database file
    /// * `collection` - Name of the page table (validated upstream)
    ///
    /// # Returns
    ///
    /// * `Ok(SqliteStore)` - Successfully opened and probed
    /// * `Err(DriftError)` - Failed to open, migrate, or probe
    pub fn new(path: &Path, collection: &str) -> Result<Self, DriftError> {
        let conn = Connection::open(path)?;

        conn.execute_batch(
            "
            PRAGMA journal_mode = WAL;
            PRAGMA synchronous = NORMAL;
            PRAGMA temp_store = MEMORY;
        ",
        )?;

        initialize_schema(&conn, collection)?;

        let store = Self {
            conn,
            collection: collection.to_string(),
        };

        store.count_pages()?;

        Ok(store)
    }

    /// Creates an in-memory store (for testing)
    #[cfg(test)]
    pub fn new_in_memory(collection: &str) -> Result<Self, DriftError> {
        let conn = Connection::open_in_memory()?;
        initialize_schema(&conn, collection)?;
        Ok(Self {
            conn,
            collection: collection.to_string(),
        })
    }
}

impl PageStore for SqliteStore {
    fn find_page(&self, url: &str) -> StoreResult<Option<PageRecord>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT url, links, content FROM {} WHERE url = ?1",
            self.collection
        ))?;

        let row = stmt
            .query_row(params![url], |row| {
                Ok((
                    row.get::<_, String>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, String>(2)?,
                ))
            })
            .optional()?;

        match row {
            Some((url, links_json, content)) => {
                let links: Vec<String> = serde_json::from_str(&links_json)
                    .map_err(|e| StoreError::Serialization(e.to_string()))?;
                Ok(Some(PageRecord {
                    url,
                    links,
                    content,
                }))
            }
            None => Ok(None),
        }
    }

    fn insert_page(&mut self, page: &PageRecord) -> StoreResult<()> {
        let links_json = serde_json::to_string(&page.links)
            .map_err(|e| StoreError::Serialization(e.to_string()))?;
        let now = Utc::now().to_rfc3339();

        self.conn.execute(
            &format!(
                "INSERT INTO {} (url, links, content, first_seen, last_updated)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                self.collection
            ),
            params![page.url, links_json, page.content, now, now],
        )?;

        Ok(())
    }

    fn update_page(&mut self, url: &str, links: &[String], content: &str) -> StoreResult<()> {
        let links_json = serde_json::to_string(links)
            .map_err(|e| StoreError::Serialization(e.to_string()))?;
        let now = Utc::now().to_rfc3339();

        self.conn.execute(
            &format!(
                "UPDATE {} SET links = ?1, content = ?2, last_updated = ?3 WHERE url = ?4",
                self.collection
            ),
            params![links_json, content, now, url],
        )?;

        Ok(())
    }

    fn count_pages(&self) -> StoreResult<u64> {
        let count: i64 = self.conn.query_row(
            &format!("SELECT COUNT(*) FROM {}", self.collection),
            [],
            |row| row.get(0),
        )?;

        Ok(count as u64)
    }
}
