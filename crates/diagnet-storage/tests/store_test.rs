//! Relationship store tests: schema, merge semantics, fact loading.

use diagnet_core::{Fact, FactBundle, FactSource};
use diagnet_storage::migrations::LATEST_VERSION;
use diagnet_storage::{FactStore, StoreStats};
use tempfile::TempDir;

fn bundle(cause: &str, effects: &[&str]) -> FactBundle {
    FactBundle::new(cause, effects.iter().map(|e| e.to_string()).collect())
}

#[test]
fn migrations_set_user_version() {
    let store = FactStore::open_in_memory().unwrap();
    assert_eq!(store.schema_version().unwrap(), LATEST_VERSION);
}

#[test]
fn pragmas_enable_foreign_keys() {
    let dir = TempDir::new().unwrap();
    let store = FactStore::open(&dir.path().join("test.db")).unwrap();
    store
        .with_conn(|conn| {
            let fk: i64 = conn
                .pragma_query_value(None, "foreign_keys", |row| row.get(0))
                .unwrap();
            assert_eq!(fk, 1);
            let mode: String = conn
                .pragma_query_value(None, "journal_mode", |row| row.get(0))
                .unwrap();
            assert_eq!(mode.to_lowercase(), "wal");
            Ok(())
        })
        .unwrap();
}

#[test]
fn merge_is_idempotent() {
    let store = FactStore::open_in_memory().unwrap();
    assert!(store.merge_fact(&Fact::new("Flu", "fever")).unwrap());
    assert!(!store.merge_fact(&Fact::new("Flu", "fever")).unwrap());
    assert_eq!(
        store.stats().unwrap(),
        StoreStats {
            causes: 1,
            effects: 1,
            relationships: 1,
        }
    );
}

#[test]
fn merge_skips_self_loops_and_empty_names() {
    let store = FactStore::open_in_memory().unwrap();
    assert!(!store.merge_fact(&Fact::new("Flu", "Flu")).unwrap());
    assert!(!store.merge_fact(&Fact::new("", "fever")).unwrap());
    let added = store
        .merge_bundle(&bundle("Flu", &["Flu", "fever", ""]))
        .unwrap();
    assert_eq!(added, 1);
    assert_eq!(store.stats().unwrap().relationships, 1);
}

#[test]
fn shared_effects_are_single_nodes() {
    let store = FactStore::open_in_memory().unwrap();
    let added = store
        .merge_bundles(&[
            bundle("Flu", &["fever", "cough"]),
            bundle("Cold", &["cough", "sneezing"]),
        ])
        .unwrap();
    assert_eq!(added, 4);
    let stats = store.stats().unwrap();
    assert_eq!(stats.causes, 2);
    assert_eq!(stats.effects, 3);
    assert_eq!(store.effects_of("Cold").unwrap(), vec!["cough", "sneezing"]);
}

#[test]
fn load_facts_keeps_insertion_order() {
    let store = FactStore::open_in_memory().unwrap();
    store.merge_bundle(&bundle("B", &["z", "x"])).unwrap();
    store.merge_bundle(&bundle("A", &["x"])).unwrap();
    assert_eq!(
        store.fetch_facts().unwrap(),
        vec![Fact::new("B", "z"), Fact::new("B", "x"), Fact::new("A", "x")]
    );
}

#[test]
fn clear_removes_everything() {
    let store = FactStore::open_in_memory().unwrap();
    store.merge_bundle(&bundle("Flu", &["fever"])).unwrap();
    store.clear().unwrap();
    assert_eq!(store.stats().unwrap(), StoreStats::default());
    assert!(store.load_facts().unwrap().is_empty());
}

#[test]
fn data_survives_reopen() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("diagnet.db");
    {
        let store = FactStore::open(&path).unwrap();
        store.merge_bundle(&bundle("Flu", &["fever", "cough"])).unwrap();
    }
    let store = FactStore::open(&path).unwrap();
    assert_eq!(store.stats().unwrap().relationships, 2);
    assert_eq!(store.path(), Some(path.as_path()));
    assert!(store.describe().contains("diagnet.db"));
}
