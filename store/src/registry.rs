//! In-memory mirror of the persisted bookmarks for one process run.
//!
//! The registry is an explicit value owned by the caller, populated once
//! from the store and discarded at process exit. It exists so listing does
//! not re-query storage mid-command. Only `add` appends to it; removals and
//! updates mutate storage directly and the mirror is allowed to diverge for
//! the remainder of the run.

use crate::error::Result;
use crate::model::Bookmark;
use crate::store::BookmarkStore;

/// Ordered collection of bookmarks mirroring the backing store.
///
/// Insertion order matches the store's natural scan order at load time.
#[derive(Debug, Default)]
pub struct Registry {
    bookmarks: Vec<Bookmark>,
}

impl Registry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a registry from a full scan of the store.
    pub fn load_from(store: &BookmarkStore) -> Result<Self> {
        Ok(Self {
            bookmarks: store.select_all()?,
        })
    }

    /// Appends a bookmark after a successful durable insert.
    pub fn append(&mut self, bookmark: Bookmark) {
        self.bookmarks.push(bookmark);
    }

    /// Returns the ordered bookmark sequence as-is.
    pub fn list(&self) -> &[Bookmark] {
        &self.bookmarks
    }

    /// Looks up one bookmark by exact alias.
    pub fn find(&self, alias: &str) -> Option<&Bookmark> {
        self.bookmarks.iter().find(|bm| bm.alias == alias)
    }

    /// Number of mirrored bookmarks.
    pub fn len(&self) -> usize {
        self.bookmarks.len()
    }

    /// True when nothing is mirrored.
    pub fn is_empty(&self) -> bool {
        self.bookmarks.is_empty()
    }
}
