use super::*;

#[test]
fn memory_store_returns_none_for_absent_key() {
    let store = MemoryStore::new();
    assert_eq!(store.get("theme"), None);
}

#[test]
fn memory_store_round_trips_a_value() {
    let store = MemoryStore::new();
    store.set("theme", "light");
    assert_eq!(store.get("theme").as_deref(), Some("light"));
}

#[test]
fn memory_store_overwrites_existing_value() {
    let store = MemoryStore::new();
    store.set("theme", "light");
    store.set("theme", "dark");
    assert_eq!(store.get("theme").as_deref(), Some("dark"));
}

#[test]
fn memory_store_seed_prepopulates() {
    let store = MemoryStore::new().seed("theme", "light");
    assert_eq!(store.get("theme").as_deref(), Some("light"));
}

#[test]
fn reference_to_store_is_also_a_store() {
    let store = MemoryStore::new();
    let by_ref = &store;
    by_ref.set("theme", "dark");
    assert_eq!(store.get("theme").as_deref(), Some("dark"));
}
