//! SQLite-backed bookmark storage.
//!
//! This crate persists named aliases mapped to URIs in a single `bookmarks`
//! table and keeps an in-memory mirror of the persisted rows for the
//! duration of one process run.
//!
//! # Architecture
//!
//! - **`schema`** — DDL for the single `bookmarks` table
//! - **`store`** — [`BookmarkStore`], parameterized CRUD over one connection
//! - **`registry`** — [`Registry`], the ordered in-memory mirror
//! - **`model`** — [`Bookmark`] and the closed [`BookmarkField`] enum
//! - **`error`** — [`StoreError`] taxonomy
//!
//! # Quick start
//!
//! ```no_run
//! use lynx_store::{BookmarkStore, Registry};
//!
//! let store = BookmarkStore::open("lynx.db").unwrap();
//! store.insert("home", "https://example.com").unwrap();
//!
//! let registry = Registry::load_from(&store).unwrap();
//! for bm in registry.list() {
//!     println!("{} - {}", bm.alias, bm.uri);
//! }
//! ```

mod error;
mod model;
mod registry;
mod schema;
mod store;

pub use error::{Result, StoreError};
pub use model::{Bookmark, BookmarkField};
pub use registry::Registry;
pub use store::BookmarkStore;
