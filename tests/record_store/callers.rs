//! Domain queries written the way callers specialize the generic operations

use super::*;
use recordstore::{RecordEngine, Result};
use serde_json::json;

fn groceries() -> Vec<Record> {
    vec![
        record(json!({"name": "Bananas", "category": "Produce", "price": 0.59, "quantity": 6, "unit": "pieces", "organic": true})),
        record(json!({"name": "Cheddar", "category": "Dairy", "price": 4.99, "quantity": 1, "unit": "ounces", "organic": false})),
        record(json!({"name": "Sourdough", "category": "Bakery", "price": 5.49, "quantity": 1, "unit": "loaf", "organic": false})),
        record(json!({"name": "Chicken", "category": "Meat", "price": 8.99, "quantity": 2, "unit": "pounds", "organic": false})),
        record(json!({"name": "Spinach", "category": "Produce", "price": 2.49, "quantity": 3, "unit": "ounces", "organic": true})),
    ]
}

fn field_is(r: &Record, field: &str, value: serde_json::Value) -> bool {
    r.get(field) == Some(&value)
}

fn quantity(r: &Record) -> i64 {
    r.get("quantity").and_then(serde_json::Value::as_i64).unwrap_or(0)
}

fn apply_inflation(engine: &RecordEngine, db: &str) -> Result<usize> {
    let outcome = engine.update_all(db, |_| true, |r| {
        let inflated = (price(r) * 1.1 * 100.0).round() / 100.0;
        r.insert("price".into(), json!(inflated));
    })?;
    Ok(outcome.updated)
}

fn low_stock_alert(engine: &RecordEngine, db: &str) -> Result<Vec<Record>> {
    engine.update_all(db, |r| quantity(r) <= 2, |r| {
        r.insert("needsRestock".into(), json!(true));
    })?;
    Ok(engine.find_all(db, |r| field_is(r, "needsRestock", json!(true))))
}

fn search_items(engine: &RecordEngine, db: &str, term: &str) -> Vec<Record> {
    let term = term.to_lowercase();
    engine.find_all(db, |r| {
        r.get("name")
            .and_then(serde_json::Value::as_str)
            .map(|name| name.to_lowercase().contains(&term))
            .unwrap_or(false)
    })
}

fn seeded() -> (TempDir, String, RecordEngine) {
    init_logging();
    let dir = TempDir::new().unwrap();
    let db = db_locator(&dir);
    let engine = RecordEngine::new();
    engine.seed(&db, &groceries()).unwrap();
    (dir, db, engine)
}

#[test]
fn test_inflation_rounds_to_cents() {
    let (_dir, db, engine) = seeded();

    assert_eq!(apply_inflation(&engine, &db).unwrap(), 5);

    let chicken = engine
        .find_first(&db, |r| field_is(r, "name", json!("Chicken")))
        .unwrap();
    assert_eq!(price(&chicken), 9.89);
}

#[test]
fn test_low_stock_alert_flags_and_returns() {
    let (_dir, db, engine) = seeded();

    let low = low_stock_alert(&engine, &db).unwrap();

    let names: Vec<&str> = low.iter().filter_map(|r| r["name"].as_str()).collect();
    assert_eq!(names, vec!["Cheddar", "Sourdough", "Chicken"]);
    assert!(engine
        .find_all(&db, |r| quantity(r) > 2)
        .iter()
        .all(|r| !r.contains_key("needsRestock")));
}

#[test]
fn test_put_on_sale_and_cleanup() {
    let (_dir, db, engine) = seeded();

    let status = engine
        .patch(&db, |r| field_is(r, "name", json!("Cheddar")), &record(json!({"onSale": true})))
        .unwrap();
    assert!(status.to_string().starts_with("patched: {\"name\":\"Cheddar\""));

    let removed = engine
        .delete_all(&db, |r| {
            field_is(r, "category", json!("Produce")) && price(r) < 3.0
        })
        .unwrap();
    assert_eq!(removed.to_string(), "Deleted 2 items");

    let categories: Vec<String> = engine
        .find_all(&db, |_| true)
        .iter()
        .filter_map(|r| r["category"].as_str().map(str::to_string))
        .collect();
    assert_eq!(categories, vec!["Dairy", "Bakery", "Meat"]);
}

#[test]
fn test_search_is_case_insensitive() {
    let (_dir, db, engine) = seeded();

    let hits = search_items(&engine, &db, "CH");

    let names: Vec<&str> = hits.iter().filter_map(|r| r["name"].as_str()).collect();
    assert_eq!(names, vec!["Cheddar", "Chicken", "Spinach"]);
}

#[test]
fn test_last_and_index_helpers() {
    let (_dir, db, engine) = seeded();
    let organic = |r: &Record| field_is(r, "organic", json!(true));

    assert_eq!(engine.find_index(&db, organic), Some(0));
    assert_eq!(engine.find_last_index(&db, organic), Some(4));
    assert_eq!(
        engine.find_last(&db, |r| price(r) > 5.0).unwrap()["name"],
        json!("Chicken")
    );
}
