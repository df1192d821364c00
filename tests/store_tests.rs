// ============================================================================
// Element store tests
// ============================================================================
//
// Covers the snapshot/replace contract:
// - seed fidelity and order after initialize()
// - initialize() idempotence (no second publish)
// - replace_at() atomicity properties: length preserved, other positions
//   untouched, out-of-range rejected with the store unchanged
// - subscribe/unsubscribe notification lifecycle
//
// ============================================================================

use elementdb::{ElementStore, ElementRecord, TableError, seed_elements};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

#[test]
fn get_all_after_initialize_returns_seed_in_order() {
    let store = ElementStore::new();
    store.initialize().unwrap();

    let snapshot = store.get_all().unwrap();
    let seed = seed_elements();
    assert_eq!(snapshot.as_ref(), &seed);
    assert_eq!(snapshot[0].name, "Hydrogen");
    assert_eq!(snapshot[9].name, "Neon");
}

#[test]
fn initialize_is_idempotent_and_publishes_once() {
    let store = ElementStore::new();
    let publishes = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&publishes);
    store
        .subscribe(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        })
        .unwrap();

    store.initialize().unwrap();
    store.initialize().unwrap();
    store.initialize().unwrap();

    assert_eq!(publishes.load(Ordering::SeqCst), 1);
    assert_eq!(store.len().unwrap(), 10);
}

#[test]
fn replace_at_changes_exactly_one_position() {
    let store = ElementStore::new();
    store.initialize().unwrap();
    let before = store.get_all().unwrap();

    let edited = ElementRecord::new(2, "Helium", 4.5, "He");
    store.replace_at(1, edited.clone()).unwrap();

    let after = store.get_all().unwrap();
    assert_eq!(after.len(), before.len());
    assert_eq!(after[1], edited);
    for index in (0..before.len()).filter(|&i| i != 1) {
        assert_eq!(after[index], before[index]);
    }
}

#[test]
fn replace_at_out_of_range_fails_and_leaves_store_unchanged() {
    let store = ElementStore::new();
    store.initialize().unwrap();
    let before = store.get_all().unwrap();

    let record = ElementRecord::new(99, "Nope", 1.0, "No");
    let err = store.replace_at(10, record).unwrap_err();
    assert!(matches!(err, TableError::IndexOutOfRange(_)));
    assert_eq!(store.get_all().unwrap(), before);
}

#[test]
fn replace_at_before_initialize_is_out_of_range() {
    let store = ElementStore::new();
    let record = ElementRecord::new(1, "Hydrogen", 1.0079, "H");
    let err = store.replace_at(0, record).unwrap_err();
    assert!(matches!(err, TableError::IndexOutOfRange(_)));
    assert!(store.is_empty().unwrap());
}

#[test]
fn subscribers_see_each_published_snapshot() {
    let store = ElementStore::new();
    store.initialize().unwrap();

    let seen = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&seen);
    let id = store
        .subscribe(move |snapshot| {
            counter.store(snapshot.len(), Ordering::SeqCst);
        })
        .unwrap();

    store
        .replace_at(0, ElementRecord::new(1, "Hydrogen", 2.0, "H"))
        .unwrap();
    assert_eq!(seen.load(Ordering::SeqCst), 10);

    assert!(store.unsubscribe(id).unwrap());
    assert!(!store.unsubscribe(id).unwrap());

    seen.store(0, Ordering::SeqCst);
    store
        .replace_at(0, ElementRecord::new(1, "Hydrogen", 3.0, "H"))
        .unwrap();
    assert_eq!(seen.load(Ordering::SeqCst), 0, "unsubscribed callback must not fire");
}

#[test]
fn index_of_locates_records_by_identity() {
    let store = ElementStore::new();
    store.initialize().unwrap();

    let helium = store.get_all().unwrap()[1].clone();
    assert_eq!(store.index_of(&helium).unwrap(), Some(1));

    let stranger = ElementRecord::new(2, "Helium", 4.5, "He");
    assert_eq!(store.index_of(&stranger).unwrap(), None);
}
