use super::*;
use crate::users::fetch::parse_users;
use crate::users::record::test_helpers;

#[test]
fn empty_batch_exports_nothing() {
    assert_eq!(export_last_batch(&[]).unwrap(), None);
}

#[test]
fn export_round_trips_fetched_records() {
    let fetched = parse_users(&test_helpers::sample_body()).unwrap();
    let file = export_last_batch(&fetched).unwrap().unwrap();

    assert_eq!(file.file_name, "users_data.json");
    let restored: Vec<UserRecord> = serde_json::from_str(&file.contents).unwrap();
    assert_eq!(restored, fetched);
}

#[test]
fn export_is_indented_and_keeps_api_fields() {
    let fetched = parse_users(&test_helpers::sample_body()).unwrap();
    let file = export_last_batch(&fetched).unwrap().unwrap();

    assert!(file.contents.starts_with("[\n  {\n"));
    assert!(file.contents.contains("\"username\": \"Bret\""));
    assert!(file.contents.contains("\"catchPhrase\""));
    assert!(file.contents.contains("\"alt\": 12"));
}
