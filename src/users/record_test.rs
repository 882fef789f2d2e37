use super::*;
use serde_json::json;

#[test]
fn deserializes_api_shape_and_keeps_unknown_fields() {
    let records: Vec<UserRecord> = serde_json::from_str(&test_helpers::sample_body()).unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].display_name(), "Leanne Graham");
    assert_eq!(records[0].extra.get("username").and_then(Value::as_str), Some("Bret"));
    assert_eq!(
        records[0].company.extra.get("catchPhrase").and_then(Value::as_str),
        Some("Multi-layered client-server neural-net")
    );
    assert_eq!(records[1].company.name, Some(json!("Deckow-Crist")));
    assert!(records[1].company.extra.is_empty());
    assert_eq!(records[1].address.geo.extra.get("alt"), Some(&json!(12)));
}

#[test]
fn reserializing_reproduces_the_received_json() {
    let body = test_helpers::sample_body();
    let original: Value = serde_json::from_str(&body).unwrap();
    let records: Vec<UserRecord> = serde_json::from_str(&body).unwrap();
    assert_eq!(serde_json::to_value(&records).unwrap(), original);
}

#[test]
fn null_missing_and_odd_fields_are_tolerated() {
    let body = r#"[{"id": "u-9", "name": "Sparse", "phone": null, "geo_hint": 1}]"#;
    let records: Vec<UserRecord> = serde_json::from_str(body).unwrap();
    let user = &records[0];

    assert_eq!(user.id, Some(json!("u-9")));
    assert_eq!(user.phone, Some(Value::Null));
    assert_eq!(user.email, None);
    assert_eq!(user.address, Address::default());
}

#[test]
fn explicit_null_and_absent_keys_survive_reserialization() {
    let original = json!([{"id": 3, "name": "Sparse", "phone": null}]);
    let records: Vec<UserRecord> = serde_json::from_value(original.clone()).unwrap();
    assert_eq!(serde_json::to_value(&records).unwrap(), original);
}

#[test]
fn field_text_is_verbatim() {
    assert_eq!(field_text(Some(&json!("-37.3159"))), "-37.3159");
    assert_eq!(field_text(Some(&json!(-43.9509))), "-43.9509");
    assert_eq!(field_text(Some(&json!(500))), "500");
    assert_eq!(field_text(Some(&Value::Null)), "");
    assert_eq!(field_text(None), "");
}

#[test]
fn non_object_record_fails() {
    assert!(serde_json::from_str::<Vec<UserRecord>>("[1, 2]").is_err());
}
