use seriesgrid::io::storage::{KeyValueStore, MemoryKeyValueStore};
use seriesgrid::state::selection::{SelectionSet, SelectionStore, SELECTION_KEY};

fn store_with(raw: &str) -> SelectionStore<MemoryKeyValueStore> {
    SelectionStore::load(MemoryKeyValueStore::with_entry(SELECTION_KEY, raw))
}

#[test]
fn test_load_absent_key_is_empty() {
    let store = SelectionStore::load(MemoryKeyValueStore::new());
    assert!(store.selection().is_empty());
}

#[test]
fn test_load_malformed_is_empty() {
    for raw in ["not json", "{\"a\":1}", "[1,2]", "null", ""] {
        let store = store_with(raw);
        assert!(store.selection().is_empty(), "expected empty for {raw:?}");
    }
}

#[test]
fn test_load_deduplicates_names() {
    let store = store_with(r#"["GT3 Fixed","GT3 Fixed","Skip Barber"]"#);
    assert_eq!(store.selection().len(), 2);
    assert!(store.contains("GT3 Fixed"));
    assert!(store.contains("Skip Barber"));
}

#[test]
fn test_toggle_sets_checkbox_state_rather_than_flipping() {
    // A stale render can report the pre-click state; the control value must still win.
    let mut store = store_with(r#"["A"]"#);

    assert!(!store.toggle("A", true));
    assert!(store.contains("A"));
    assert!(!store.toggle("B", false));
    assert!(!store.contains("B"));

    let persisted = store.storage().get(SELECTION_KEY).expect("selection persisted");
    assert_eq!(SelectionSet::from_json(&persisted), Some(store.selection().clone()));
}

#[test]
fn test_toggle_include_then_exclude_restores_state() {
    let mut store = store_with(r#"["A"]"#);
    let before = store.selection().clone();

    assert!(store.toggle("B", true));
    assert!(store.contains("B"));
    assert!(store.toggle("B", false));

    assert_eq!(store.selection(), &before);
}

#[test]
fn test_toggle_matching_state_is_noop() {
    let mut store = store_with(r#"["A"]"#);
    assert!(!store.toggle("A", true));
    assert!(!store.toggle("Z", false));
    assert_eq!(store.selection().len(), 1);
}

#[test]
fn test_membership_is_exact() {
    let store = store_with(r#"["IMSA Sportscar"]"#);
    assert!(!store.contains("imsa sportscar"));
    assert!(!store.contains("IMSA Sportscar "));
}

#[test]
fn test_toggle_writes_full_set() {
    let mut store = SelectionStore::load(MemoryKeyValueStore::new());
    store.toggle("B", true);
    store.toggle("A", true);

    let raw = store.storage().get(SELECTION_KEY).unwrap();
    let persisted = SelectionSet::from_json(&raw).unwrap();
    assert_eq!(persisted, SelectionSet::from_iter(["A", "B"]));
}

#[test]
fn test_noop_toggle_still_persists() {
    let mut store = SelectionStore::load(MemoryKeyValueStore::new());
    store.toggle("A", false);
    assert_eq!(store.storage().get(SELECTION_KEY).as_deref(), Some("[]"));
}

#[test]
fn test_clear_empties_and_persists() {
    let mut store = store_with(r#"["A","B"]"#);
    store.clear();
    assert!(store.selection().is_empty());
    assert_eq!(store.storage().get(SELECTION_KEY).as_deref(), Some("[]"));
}

#[test]
fn test_reload_sees_previous_toggles() {
    let mut store = SelectionStore::load(MemoryKeyValueStore::new());
    store.toggle("Formula Vee", true);

    let reloaded = SelectionStore::load(store.storage().clone());
    assert!(reloaded.contains("Formula Vee"));
}
