//! Database schema definitions
//!
//! The page table is named after the configured collection, so the schema
//! is templated rather than a fixed constant. Collection names are
//! restricted to bare identifiers by config validation before they reach
//! this module.

use rusqlite::Connection;

/// Builds the SQL schema for a given collection name
pub fn schema_sql(collection: &str) -> String {
    format!(
        r#"
-- Page documents, keyed by address
CREATE TABLE IF NOT EXISTS {c} (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    url TEXT NOT NULL UNIQUE,
    links TEXT NOT NULL,
    content TEXT NOT NULL,
    first_seen TEXT NOT NULL,
    last_updated TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_{c}_url ON {c}(url);
"#,
        c = collection
    )
}

/// Initializes the schema on an open connection
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `collection` - Name of the page table
pub fn initialize_schema(conn: &Connection, collection: &str) -> rusqlite::Result<()> {
    conn.execute_batch(&schema_sql(collection))
}
