//! Integration tests for the lynx-store crate.

use lynx_store::{Bookmark, BookmarkField, BookmarkStore, Registry, StoreError};

#[test]
fn add_then_list_round_trips_the_pair() {
    let store = BookmarkStore::open_in_memory().unwrap();
    store.insert("home", "https://example.com").unwrap();

    let all = store.select_all().unwrap();
    assert_eq!(all, vec![Bookmark::new("home", "https://example.com")]);
}

#[test]
fn duplicate_alias_fails_and_leaves_existing_row_untouched() {
    let store = BookmarkStore::open_in_memory().unwrap();
    store.insert("home", "https://example.com").unwrap();

    let err = store.insert("home", "https://example.org").unwrap_err();
    assert!(matches!(err, StoreError::AliasExists(ref a) if a == "home"));

    // The original uri must survive the failed insert.
    let all = store.select_all().unwrap();
    assert_eq!(all, vec![Bookmark::new("home", "https://example.com")]);
}

#[test]
fn field_whitelist_rejects_unknown_columns_before_any_statement() {
    let store = BookmarkStore::open_in_memory().unwrap();
    store.insert("home", "https://example.com").unwrap();

    // Parsing fails at the boundary; storage is never reached.
    let err = "created_at".parse::<BookmarkField>().unwrap_err();
    assert!(matches!(err, StoreError::InvalidField(_)));

    let all = store.select_all().unwrap();
    assert_eq!(all, vec![Bookmark::new("home", "https://example.com")]);
}

#[test]
fn delete_removes_exactly_one_row() {
    let store = BookmarkStore::open_in_memory().unwrap();
    store.insert("home", "https://example.com").unwrap();
    store.insert("work", "https://example.org").unwrap();

    store.delete("home").unwrap();

    let all = store.select_all().unwrap();
    assert_eq!(all, vec![Bookmark::new("work", "https://example.org")]);
}

#[test]
fn delete_missing_alias_reports_not_found() {
    let store = BookmarkStore::open_in_memory().unwrap();
    let err = store.delete("ghost").unwrap_err();
    assert!(matches!(err, StoreError::NotFound(ref a) if a == "ghost"));
}

#[test]
fn registry_appends_only_after_successful_insert() {
    let store = BookmarkStore::open_in_memory().unwrap();
    store.insert("home", "https://example.com").unwrap();
    let mut registry = Registry::load_from(&store).unwrap();

    // A failed insert must not reach the mirror.
    let result = store.insert("home", "https://example.org");
    assert!(result.is_err());
    if result.is_ok() {
        registry.append(Bookmark::new("home", "https://example.org"));
    }

    assert_eq!(registry.len(), 1);
    assert_eq!(registry.find("home").unwrap().uri, "https://example.com");
}

#[test]
fn reopening_the_file_store_preserves_bookmarks() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("lynx.db");

    {
        let store = BookmarkStore::open(&db_path).unwrap();
        store.insert("home", "https://example.com").unwrap();
        store.insert("work", "https://example.org").unwrap();
    }

    // Fresh process run: a new connection sees exactly the persisted rows.
    let store = BookmarkStore::open(&db_path).unwrap();
    let registry = Registry::load_from(&store).unwrap();
    assert_eq!(registry.len(), 2);
    assert_eq!(registry.find("home").unwrap().uri, "https://example.com");
    assert_eq!(registry.find("work").unwrap().uri, "https://example.org");
}

#[test]
fn update_then_reopen_sees_the_new_value() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("lynx.db");

    {
        let store = BookmarkStore::open(&db_path).unwrap();
        store.insert("home", "https://example.com").unwrap();
        store
            .update_field("home", BookmarkField::Uri, "https://example.org")
            .unwrap();
    }

    let store = BookmarkStore::open(&db_path).unwrap();
    let all = store.select_all().unwrap();
    assert_eq!(all, vec![Bookmark::new("home", "https://example.org")]);
}

#[test]
fn full_crud_scenario() {
    let store = BookmarkStore::open_in_memory().unwrap();

    store.insert("home", "https://example.com").unwrap();
    assert_eq!(
        store.select_all().unwrap(),
        vec![Bookmark::new("home", "https://example.com")]
    );

    store
        .update_field("home", BookmarkField::Uri, "https://example.org")
        .unwrap();
    assert_eq!(
        store.select_all().unwrap(),
        vec![Bookmark::new("home", "https://example.org")]
    );

    store.delete("home").unwrap();
    assert!(store.select_all().unwrap().is_empty());
    assert!(Registry::load_from(&store).unwrap().is_empty());
}
