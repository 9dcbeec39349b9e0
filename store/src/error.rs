//! Error types for bookmark storage operations.
//!
//! Distinguishes fatal bootstrap failures (cannot open the database or
//! create the table) from per-operation failures (duplicate alias, unknown
//! update field, missing row). Generic engine failures carry the SQLite
//! diagnostic text.

use thiserror::Error;

/// Errors that can occur while operating on the bookmark store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The database file could not be opened or created.
    #[error("cannot open database: {0}")]
    Connection(#[source] rusqlite::Error),

    /// The bookmarks table could not be created.
    #[error("cannot create bookmarks table: {0}")]
    Schema(#[source] rusqlite::Error),

    /// An insert collided with an existing alias (primary-key constraint).
    #[error("a bookmark with alias '{0}' already exists")]
    AliasExists(String),

    /// An update named a column outside the `alias`/`uri` whitelist.
    #[error("'{0}' isn't a valid field: expected 'alias' or 'uri'")]
    InvalidField(String),

    /// A delete or update matched no row.
    #[error("no bookmark found with alias '{0}'")]
    NotFound(String),

    /// Generic prepare/bind/step failure with the engine diagnostic.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),
}

/// Convenience alias for results with [`StoreError`].
pub type Result<T> = std::result::Result<T, StoreError>;
