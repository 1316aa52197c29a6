use super::*;
use crate::error::StoreError;
use crate::storage::medium::MemoryMedium;

// =========================================================
// Helpers
// =========================================================

/// Medium whose writes always fail, for checking that the in-memory map
/// is still updated
struct BrokenMedium;

impl Medium for BrokenMedium {
    fn read(&self) -> StoreResult<Option<String>> {
        Err(StoreError::medium("cookies disabled"))
    }

    fn write(&self, _data: &str) -> StoreResult<()> {
        Err(StoreError::medium("cookies disabled"))
    }
}

fn store() -> (FallbackStore<MemoryMedium>, MemoryMedium) {
    let medium = MemoryMedium::new();
    (FallbackStore::new(medium.clone()), medium)
}

// =========================================================
// Loading
// =========================================================

#[test]
fn test_loads_existing_medium_content() {
    let medium = MemoryMedium::with_content(r#"{"a":"1","b":"2"}"#);
    let store = FallbackStore::new(medium);

    assert_eq!(store.length(), 2);
    assert_eq!(store.get_item("a", false).unwrap().as_deref(), Some("1"));
}

#[test]
fn test_empty_or_missing_medium_is_empty_map() {
    assert_eq!(FallbackStore::new(MemoryMedium::new()).length(), 0);
    assert_eq!(FallbackStore::new(MemoryMedium::with_content("")).length(), 0);
}

#[test]
fn test_malformed_medium_is_empty_map() {
    let store = FallbackStore::new(MemoryMedium::with_content("{broken"));
    assert_eq!(store.length(), 0);
    assert_eq!(store.get_item("a", true).unwrap(), None);
}

#[test]
fn test_unreadable_medium_is_empty_map() {
    let store = FallbackStore::new(BrokenMedium);
    assert_eq!(store.length(), 0);
}

// =========================================================
// Writes
// =========================================================

#[test]
fn test_set_item_rewrites_whole_map() {
    let (store, medium) = store();
    store.set_item("b", "2").unwrap();
    store.set_item("a", "1").unwrap();

    assert_eq!(medium.content().as_deref(), Some(r#"{"a":"1","b":"2"}"#));
}

#[test]
fn test_remove_item_rewrites_whole_map() {
    let (store, medium) = store();
    store.set_item("a", "1").unwrap();
    store.set_item("b", "2").unwrap();
    store.remove_item("a").unwrap();

    assert_eq!(medium.content().as_deref(), Some(r#"{"b":"2"}"#));
    assert_eq!(store.get_item("a", false).unwrap(), None);
}

#[test]
fn test_clear_empties_map_and_medium() {
    let (store, medium) = store();
    store.set_item("a", "1").unwrap();
    store.clear().unwrap();

    assert_eq!(store.length(), 0);
    assert_eq!(medium.content().as_deref(), Some(""));
}

#[test]
fn test_failed_write_still_updates_memory() {
    let store = FallbackStore::new(BrokenMedium);
    assert!(store.set_item("a", "1").is_err());
    assert_eq!(store.get_item("a", false).unwrap().as_deref(), Some("1"));
}

// =========================================================
// length / key
// =========================================================

#[test]
fn test_length_tracks_actual_size() {
    let (store, _) = store();
    store.set_item("a", "1").unwrap();
    // Overwriting an existing key must not grow the count
    store.set_item("a", "2").unwrap();
    assert_eq!(store.length(), 1);

    // Removing an unknown key must not shrink it
    store.remove_item("missing").unwrap();
    assert_eq!(store.length(), 1);

    store.clear().unwrap();
    assert_eq!(store.length(), 0);
}

#[test]
fn test_key_by_index() {
    let (store, _) = store();
    store.set_item("b", "2").unwrap();
    store.set_item("a", "1").unwrap();

    assert_eq!(store.key(0).as_deref(), Some("a"));
    assert_eq!(store.key(1).as_deref(), Some("b"));
    assert_eq!(store.key(2), None);
    assert_eq!(store.keys(), vec!["a".to_string(), "b".to_string()]);
}

// =========================================================
// Cache bypass
// =========================================================

#[test]
fn test_bypass_cache_sees_external_write() {
    let (store, medium) = store();
    store.set_item("k", "old").unwrap();

    // Another browsing context rewrites the cookie
    medium.overwrite(r#"{"k":"new"}"#);

    assert_eq!(store.get_item("k", false).unwrap().as_deref(), Some("old"));
    assert_eq!(store.get_item("k", true).unwrap().as_deref(), Some("new"));
}

#[test]
fn test_bypass_cache_does_not_refresh_memory() {
    let (store, medium) = store();
    medium.overwrite(r#"{"k":"external"}"#);

    assert_eq!(store.get_item("k", true).unwrap().as_deref(), Some("external"));
    assert_eq!(store.get_item("k", false).unwrap(), None);
}
