//! The two-item walkthrough: find, delete, patch, put, re-find

use super::*;
use recordstore::{LoadOutcome, PutOutcome, RecordEngine};
use serde_json::json;
use std::fs;

#[test]
fn test_walkthrough() {
    init_logging();
    let dir = TempDir::new().unwrap();
    let db = db_locator(&dir);
    let engine = RecordEngine::new();

    let seeded = engine
        .seed(
            &db,
            &[
                record(json!({"name": "A", "price": 3})),
                record(json!({"name": "B", "price": 8})),
            ],
        )
        .unwrap();
    let id_a = seeded[0].id().unwrap().to_string();

    // find first expensive
    let found = engine.find_first(&db, |r| price(r) > 5.0).unwrap();
    assert_eq!(found["name"], json!("B"));
    assert_eq!(found["price"], json!(8));

    // delete every expensive item
    let status = engine.delete_all(&db, |r| price(r) > 5.0).unwrap();
    assert_eq!(status.to_string(), "Deleted 1 items");
    assert_eq!(engine.load(&db), LoadOutcome::Loaded(vec![seeded[0].clone()]));

    // patch the survivor
    let status = engine
        .patch(&db, |r| r["name"] == json!("A"), &record(json!({"price": 10})))
        .unwrap();
    assert_eq!(
        status.record(),
        Some(&record(json!({"name": "A", "price": 10, "id": id_a.clone()})))
    );

    // replace it under a new name
    let status = engine
        .put(&db, |r| r["name"] == json!("A"), &record(json!({"name": "A2", "price": 1})))
        .unwrap();
    let replaced = record(json!({"name": "A2", "price": 1, "id": id_a.clone()}));
    assert_eq!(status, PutOutcome::Updated(replaced.clone()));
    assert_eq!(status.to_string(), format!("updated: {}", replaced));

    // the old name is gone, the new one carries the old id
    assert!(engine.find_first(&db, |r| r["name"] == json!("A")).is_none());
    let again = engine
        .put(&db, |r| r["name"] == json!("A"), &record(json!({"name": "A3"})))
        .unwrap();
    assert_eq!(again.to_string(), "not found");
    assert_eq!(
        engine.find_first(&db, |r| r["name"] == json!("A2")),
        Some(replaced)
    );

    // what is on disk is the pretty-printed single record
    let text = fs::read_to_string(&db).unwrap();
    assert_eq!(
        text,
        format!(
            "[\n  {{\n    \"name\": \"A2\",\n    \"price\": 1,\n    \"id\": \"{}\"\n  }}\n]",
            id_a
        )
    );
}

#[test]
fn test_delete_one_then_not_found() {
    init_logging();
    let dir = TempDir::new().unwrap();
    let db = db_locator(&dir);
    let engine = RecordEngine::new();
    engine.seed(&db, &[record(json!({"name": "A"}))]).unwrap();

    let first = engine.delete_one(&db, |r| r["name"] == json!("A")).unwrap();
    let second = engine.delete_one(&db, |r| r["name"] == json!("A")).unwrap();

    assert_eq!(first.to_string(), "deleted");
    assert_eq!(second.to_string(), "not found");
    assert_eq!(engine.load(&db), LoadOutcome::Loaded(vec![]));
}

#[test]
fn test_erase_then_reads_are_empty() {
    init_logging();
    let dir = TempDir::new().unwrap();
    let db = db_locator(&dir);
    let engine = RecordEngine::new();
    engine.seed(&db, &[record(json!({"name": "A"}))]).unwrap();

    engine.erase(&db).unwrap();

    assert!(engine.find_all(&db, |_| true).is_empty());
    assert!(engine.load(&db).is_recovered());
}
