//! Durable CRUD against the bookmarks table.
//!
//! [`BookmarkStore`] wraps a single [`rusqlite::Connection`]. Every
//! statement is parameterized; the one variable identifier — the column an
//! update targets — comes from the closed [`BookmarkField`] enum, never
//! from user text. Statements and the connection are released on every
//! exit path by rusqlite's drop handling.

use std::path::Path;

use rusqlite::{Connection, params};
use tracing::{debug, info};

use crate::error::{Result, StoreError};
use crate::model::{Bookmark, BookmarkField};
use crate::schema::ensure_schema;

/// Storage adapter for the `bookmarks` table.
///
/// # Examples
///
/// ```no_run
/// use lynx_store::BookmarkStore;
///
/// let store = BookmarkStore::open("lynx.db").unwrap();
/// store.insert("home", "https://example.com").unwrap();
/// for bm in store.select_all().unwrap() {
///     println!("{bm}");
/// }
/// ```
pub struct BookmarkStore {
    conn: Connection,
}

impl BookmarkStore {
    /// Opens (or creates) the database file and ensures the schema.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Connection`] if the file cannot be opened and
    /// [`StoreError::Schema`] if the table cannot be created. Both are
    /// fatal to the caller.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "opening bookmark store");
        let conn = Connection::open(path).map_err(StoreError::Connection)?;
        ensure_schema(&conn)?;
        Ok(Self { conn })
    }

    /// Opens an in-memory database with the schema applied. Test helper.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().map_err(StoreError::Connection)?;
        ensure_schema(&conn)?;
        Ok(Self { conn })
    }

    /// Inserts a new bookmark.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::AliasExists`] when the alias collides with an
    /// existing row (primary-key constraint); other statement failures
    /// surface as [`StoreError::Database`].
    pub fn insert(&self, alias: &str, uri: &str) -> Result<()> {
        self.conn
            .execute(
                "INSERT INTO bookmarks (alias, uri) VALUES (?1, ?2)",
                params![alias, uri],
            )
            .map_err(|err| classify_constraint(err, alias))?;
        info!(alias, uri, "bookmark added");
        Ok(())
    }

    /// Loads every bookmark in the engine's natural scan order.
    ///
    /// Partial results are discarded on failure: the first row error aborts
    /// the scan and nothing is returned.
    pub fn select_all(&self) -> Result<Vec<Bookmark>> {
        let mut stmt = self.conn.prepare("SELECT alias, uri FROM bookmarks")?;
        let bookmarks = stmt
            .query_map([], |row| {
                Ok(Bookmark {
                    alias: row.get(0)?,
                    uri: row.get(1)?,
                })
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        debug!(count = bookmarks.len(), "loaded bookmarks");
        Ok(bookmarks)
    }

    /// Sets one field of the bookmark identified by `alias`.
    ///
    /// The target column is fixed by [`BookmarkField`]; the new value and
    /// the alias are bound as parameters.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] when no row matches the alias, and
    /// [`StoreError::AliasExists`] when a rename collides with an existing
    /// alias.
    pub fn update_field(&self, alias: &str, field: BookmarkField, new_value: &str) -> Result<()> {
        let sql = match field {
            BookmarkField::Alias => "UPDATE bookmarks SET alias = ?1 WHERE alias = ?2",
            BookmarkField::Uri => "UPDATE bookmarks SET uri = ?1 WHERE alias = ?2",
        };
        let changed = self
            .conn
            .execute(sql, params![new_value, alias])
            .map_err(|err| classify_constraint(err, new_value))?;

        if changed == 0 {
            return Err(StoreError::NotFound(alias.to_string()));
        }
        info!(alias, field = %field, new_value, "bookmark updated");
        Ok(())
    }

    /// Deletes the bookmark identified by `alias`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] when no row matches.
    pub fn delete(&self, alias: &str) -> Result<()> {
        let changed = self
            .conn
            .execute("DELETE FROM bookmarks WHERE alias = ?1", params![alias])?;

        if changed == 0 {
            return Err(StoreError::NotFound(alias.to_string()));
        }
        info!(alias, "bookmark removed");
        Ok(())
    }

    /// Returns a reference to the underlying connection.
    pub fn connection(&self) -> &Connection {
        &self.conn
    }
}

/// Maps a primary-key conflict to [`StoreError::AliasExists`], leaving other
/// engine failures as [`StoreError::Database`] with their diagnostic text.
fn classify_constraint(err: rusqlite::Error, alias: &str) -> StoreError {
    match err {
        rusqlite::Error::SqliteFailure(e, _)
            if e.code == rusqlite::ErrorCode::ConstraintViolation =>
        {
            StoreError::AliasExists(alias.to_string())
        }
        other => StoreError::Database(other),
    }
}
