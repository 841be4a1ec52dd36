//! Integration tests for the record store.
//!
//! Exercises the full contract against in-memory stores plus an on-disk
//! database to cover reopen/persistence behavior.

use assert_matches::assert_matches;
use sproutbook::{Error, RecordStore, StudentId};

#[test]
fn add_then_roster_contains_new_record() {
    let store = RecordStore::open_in_memory().unwrap();

    let a = store.add_student("Alice", 4, "Bob", "555-1234", 100.0).unwrap();
    let b = store.add_student("Ben", 5, "Cara", "555-5678", 0.0).unwrap();
    assert!(b.id > a.id);

    let roster = store.roster().unwrap();
    assert_eq!(roster.len(), 2);

    let alice = roster.iter().find(|e| e.id == a.id).unwrap();
    assert_eq!(alice.name, "Alice");
    assert_eq!(alice.age, 4);
    assert_eq!(alice.guardian, "Bob");
    assert_eq!(alice.contact, "555-1234");
    assert_eq!(alice.fees_paid, 100.0);
}

#[test]
fn balance_scenario_from_the_ledger() {
    let store = RecordStore::open_in_memory().unwrap();
    store.add_student("Alice", 4, "Bob", "555-1234", 100.0).unwrap();

    // default tuition fee is 300.0
    let roster = store.roster().unwrap();
    assert_eq!(roster[0].balance, 200.0);

    store.set_tuition_fee(250.0).unwrap();
    let roster = store.roster().unwrap();
    assert_eq!(roster[0].balance, 150.0);
}

#[test]
fn update_overwrites_all_fields_and_spares_others() {
    let store = RecordStore::open_in_memory().unwrap();
    let a = store.add_student("Alice", 4, "Bob", "555-1234", 100.0).unwrap();
    let b = store.add_student("Ben", 5, "Cara", "555-5678", 50.0).unwrap();

    store
        .update_student(a.id, "Alice May", 5, "Robert", "555-4321", 180.0)
        .unwrap();

    let roster = store.roster().unwrap();
    let alice = roster.iter().find(|e| e.id == a.id).unwrap();
    assert_eq!(alice.name, "Alice May");
    assert_eq!(alice.age, 5);
    assert_eq!(alice.guardian, "Robert");
    assert_eq!(alice.contact, "555-4321");
    assert_eq!(alice.fees_paid, 180.0);

    let ben = roster.iter().find(|e| e.id == b.id).unwrap();
    assert_eq!(ben.name, "Ben");
    assert_eq!(ben.fees_paid, 50.0);
}

#[test]
fn update_unknown_id_is_not_found() {
    let store = RecordStore::open_in_memory().unwrap();

    let err = store
        .update_student(StudentId::from(404), "X", 1, "Y", "Z", 0.0)
        .unwrap_err();
    assert_matches!(err, Error::NotFound { .. });
}

#[test]
fn delete_removes_row_and_tolerates_absence() {
    let store = RecordStore::open_in_memory().unwrap();
    let a = store.add_student("Alice", 4, "Bob", "555-1234", 100.0).unwrap();

    assert!(store.delete_student(a.id).unwrap());
    assert!(store.roster().unwrap().is_empty());

    // deleting again is not an error
    assert!(!store.delete_student(a.id).unwrap());
}

#[test]
fn tuition_fee_defaults_to_300_on_fresh_store() {
    let store = RecordStore::open_in_memory().unwrap();
    assert_eq!(store.tuition_fee().unwrap(), 300.0);
}

#[test]
fn reopen_preserves_records_and_saved_fee() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("roster.db");
    let path = path.to_str().unwrap();

    let alice_id;
    {
        let store = RecordStore::open(path).unwrap();
        alice_id = store
            .add_student("Alice", 4, "Bob", "555-1234", 100.0)
            .unwrap()
            .id;
        store.set_tuition_fee(275.0).unwrap();
    }

    // reopening re-runs initialize(); nothing is re-seeded or lost
    let store = RecordStore::open(path).unwrap();
    assert_eq!(store.tuition_fee().unwrap(), 275.0);

    let roster = store.roster().unwrap();
    assert_eq!(roster.len(), 1);
    assert_eq!(roster[0].id, alice_id);
    assert_eq!(roster[0].balance, 175.0);
}

#[test]
fn fractional_fees_round_to_two_places() {
    let store = RecordStore::open_in_memory().unwrap();
    store.add_student("Mia", 3, "Ana", "555-0000", 99.99).unwrap();

    let roster = store.roster().unwrap();
    assert_eq!(roster[0].balance, 200.01);
}
