use super::*;
use records::{Record as _, Student};

#[test]
fn collection_url_joins_base_and_collection() {
    let store = StoreHandle::new(StoreConfig::default());
    assert_eq!(store.collection_url(Student::COLLECTION), "/store/students.json");
}

#[test]
fn collection_url_tolerates_trailing_slash_in_base() {
    let store = StoreHandle::new(StoreConfig {
        base_url: "https://store.example.com/".to_owned(),
    });
    assert_eq!(
        store.collection_url("teachers"),
        "https://store.example.com/teachers.json"
    );
}

#[test]
fn document_url_addresses_one_key() {
    let store = StoreHandle::new(StoreConfig::default());
    assert_eq!(store.document_url("students", "s1"), "/store/students/s1.json");
}

#[test]
fn store_error_messages_are_user_readable() {
    assert_eq!(
        StoreError::Status(503).to_string(),
        "store responded with status 503"
    );
    assert_eq!(
        StoreError::Transport("timed out".to_owned()).to_string(),
        "store request failed: timed out"
    );
}

#[test]
fn decode_errors_pass_through_with_location() {
    let err: StoreError = records::DecodeError::MissingField {
        collection: "students",
        key: "s1".to_owned(),
        field: "name",
    }
    .into();
    assert_eq!(err.to_string(), "students/s1: missing required field `name`");
}
