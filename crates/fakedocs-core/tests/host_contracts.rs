use std::collections::{BTreeMap, HashMap};

use fakedocs_core::{ConfigLookup, FieldValue, NoopJournal, ProgressJournal, Record};

#[test]
fn config_lookup_falls_back_to_default() {
    let mut config = BTreeMap::new();
    config.insert("count".to_string(), "7".to_string());

    assert_eq!(config.get_or("count", "16"), "7");
    assert_eq!(config.get_or("requiredField", ""), "");
}

#[test]
fn hash_map_lookup_matches_btree_map() {
    let mut config = HashMap::new();
    config.insert("documentCount".to_string(), "3".to_string());

    assert_eq!(
        ConfigLookup::get(&config, "documentCount").as_deref(),
        Some("3")
    );
    assert_eq!(config.get_or("seed", "none"), "none");
}

#[test]
fn closures_and_vectors_are_journals() {
    let mut seen = Vec::new();
    {
        let mut journal = |produced: u64| seen.push(produced * 10);
        journal.on_progress(1);
        journal.on_progress(2);
    }
    assert_eq!(seen, [10, 20]);

    let mut recorded: Vec<u64> = Vec::new();
    recorded.on_progress(5);
    assert_eq!(recorded, [5]);

    NoopJournal.on_progress(99);
}

#[test]
fn record_serializes_as_flat_object() {
    let mut record = Record::new();
    record.insert("id", "doc-00001-a1b2c3");
    record.insert("age", 33_i64);
    record.insert("price", 19.99);
    record.insert("isRemote", false);

    let json = serde_json::to_string(&record).expect("serialize record");
    assert_eq!(
        json,
        r#"{"id":"doc-00001-a1b2c3","age":33,"price":19.99,"isRemote":false}"#
    );
    assert_eq!(
        record.get("price").and_then(FieldValue::as_f64),
        Some(19.99)
    );
}
