//! DDL for the bookmark table.
//!
//! One table holds everything: `bookmarks(alias TEXT PRIMARY KEY NOT NULL,
//! uri TEXT NOT NULL)`. The primary key on `alias` is what enforces the
//! one-bookmark-per-alias invariant; inserts that collide surface as
//! constraint violations.

use rusqlite::Connection;

use crate::error::{Result, StoreError};

/// DDL applied during connection bootstrap. Idempotent.
pub(crate) const CREATE_BOOKMARKS_TABLE: &str = "
CREATE TABLE IF NOT EXISTS bookmarks (
    alias TEXT PRIMARY KEY NOT NULL,
    uri TEXT NOT NULL
);
";

/// Creates the bookmarks table if it does not exist yet.
pub(crate) fn ensure_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(CREATE_BOOKMARKS_TABLE)
        .map_err(StoreError::Schema)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_applies_in_memory() {
        let conn = Connection::open_in_memory().unwrap();
        ensure_schema(&conn).unwrap();

        let exists: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = 'bookmarks'",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(exists, 1);
    }

    #[test]
    fn test_schema_is_idempotent() {
        let conn = Connection::open_in_memory().unwrap();
        ensure_schema(&conn).unwrap();
        ensure_schema(&conn).unwrap();
    }

    #[test]
    fn test_alias_primary_key_rejects_duplicates() {
        let conn = Connection::open_in_memory().unwrap();
        ensure_schema(&conn).unwrap();

        conn.execute(
            "INSERT INTO bookmarks (alias, uri) VALUES ('home', 'https://example.com')",
            [],
        )
        .unwrap();
        let dup = conn.execute(
            "INSERT INTO bookmarks (alias, uri) VALUES ('home', 'https://example.org')",
            [],
        );
        assert!(dup.is_err());
    }
}
