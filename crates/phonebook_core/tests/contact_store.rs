use phonebook_core::{ContactStore, StoreError};
use uuid::Uuid;

#[test]
fn add_prepends_newest_contact() {
    let mut store = ContactStore::new();
    store.add("Zoe", "111").unwrap();
    store.add("Amy", "222").unwrap();

    let names: Vec<&str> = store.contacts().iter().map(|c| c.name()).collect();
    assert_eq!(names, vec!["Amy", "Zoe"]);
}

#[test]
fn add_rejects_duplicate_name_in_any_casing() {
    let mut store = ContactStore::new();
    let original = store.add("Apple", "12349999").unwrap();

    for candidate in ["Apple", "apple", "APPLE", "aPpLe"] {
        let err = store.add(candidate, "000").unwrap_err();
        assert_eq!(
            err,
            StoreError::DuplicateName {
                name: candidate.to_string()
            }
        );
    }

    assert_eq!(store.len(), 1);
    assert_eq!(store.contacts()[0], original);
}

#[test]
fn add_rejects_duplicate_cyrillic_name_ignoring_case() {
    let mut store = ContactStore::new();
    store.add("Олена", "1").unwrap();
    assert!(store.add("ОЛЕНА", "2").is_err());
    assert_eq!(store.len(), 1);
}

#[test]
fn add_allows_shared_numbers_under_different_names() {
    let mut store = ContactStore::new();
    store.add("Apple", "12349999").unwrap();
    store.add("Android", "12349999").unwrap();
    assert_eq!(store.len(), 2);
}

#[test]
fn uniqueness_holds_across_mixed_add_sequence() {
    let mut store = ContactStore::new();
    let inputs = ["Ann", "Bob", "ann", "Cid", "BOB", "bob", "Dee", "cid"];
    for name in inputs {
        let _ = store.add(name, "123");
    }

    let mut normalized: Vec<String> = store
        .contacts()
        .iter()
        .map(|c| c.normalized_name().to_string())
        .collect();
    normalized.sort();
    normalized.dedup();
    assert_eq!(normalized.len(), store.len());
    assert_eq!(store.len(), 4);
}

#[test]
fn remove_is_idempotent_and_preserves_order() {
    let mut store = ContactStore::new();
    let first = store.add("First", "1").unwrap();
    let middle = store.add("Middle", "2").unwrap();
    let last = store.add("Last", "3").unwrap();

    let removed = store.remove(middle.id()).expect("middle should be removed");
    assert_eq!(removed, middle);
    assert!(store.remove(middle.id()).is_none());

    let ids: Vec<_> = store.contacts().iter().map(|c| c.id()).collect();
    assert_eq!(ids, vec![last.id(), first.id()]);
}

#[test]
fn remove_unknown_id_is_noop() {
    let mut store = ContactStore::new();
    store.add("Apple", "1").unwrap();
    let before = store.clone();

    assert!(store.remove(Uuid::new_v4()).is_none());
    assert_eq!(store, before);
}

#[test]
fn removed_name_can_be_added_again_with_new_id() {
    let mut store = ContactStore::new();
    let first = store.add("Apple", "1").unwrap();
    store.remove(first.id());

    let second = store.add("apple", "2").unwrap();
    assert_ne!(first.id(), second.id());
    assert!(store.get(first.id()).is_none());
    assert_eq!(store.get(second.id()), Some(&second));
}
