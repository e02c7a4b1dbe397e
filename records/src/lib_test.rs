use super::*;
use serde_json::json;

fn student_doc() -> Value {
    json!({
        "name": "Ayesha Khan",
        "fatherName": "Imran Khan",
        "email": "ayesha@example.com",
        "age": 12,
        "classLevel": "6",
        "studentId": "STU-061",
    })
}

// =============================================================
// DocReader field access
// =============================================================

#[test]
fn str_reads_required_string() {
    let body = student_doc();
    let doc = DocReader::new("students", "k1", &body).unwrap();
    assert_eq!(doc.str("name").unwrap(), "Ayesha Khan");
}

#[test]
fn str_missing_field_names_collection_key_and_field() {
    let body = student_doc();
    let doc = DocReader::new("students", "k1", &body).unwrap();
    let err = doc.str("shift").unwrap_err();
    assert_eq!(
        err,
        DecodeError::MissingField {
            collection: "students",
            key: "k1".to_owned(),
            field: "shift",
        }
    );
    assert_eq!(err.to_string(), "students/k1: missing required field `shift`");
}

#[test]
fn str_null_counts_as_missing() {
    let body = json!({ "name": null });
    let doc = DocReader::new("students", "k1", &body).unwrap();
    assert!(matches!(
        doc.str("name"),
        Err(DecodeError::MissingField { field: "name", .. })
    ));
}

#[test]
fn str_wrong_type_is_invalid_field() {
    let body = json!({ "name": 7 });
    let doc = DocReader::new("students", "k1", &body).unwrap();
    assert!(matches!(
        doc.str("name"),
        Err(DecodeError::InvalidField { field: "name", .. })
    ));
}

#[test]
fn opt_str_treats_absent_null_and_empty_as_none() {
    let body = json!({ "shift": "", "gender": null });
    let doc = DocReader::new("students", "k1", &body).unwrap();
    assert_eq!(doc.opt_str("shift"), None);
    assert_eq!(doc.opt_str("gender"), None);
    assert_eq!(doc.opt_str("absent"), None);
}

#[test]
fn u32_accepts_numbers_and_numeric_strings() {
    let body = json!({ "a": 14, "b": "14", "c": " 14 " });
    let doc = DocReader::new("students", "k1", &body).unwrap();
    assert_eq!(doc.u32("a").unwrap(), 14);
    assert_eq!(doc.u32("b").unwrap(), 14);
    assert_eq!(doc.u32("c").unwrap(), 14);
}

#[test]
fn u32_rejects_negatives_fractions_and_junk() {
    let body = json!({ "a": -3, "b": 2.5, "c": "twelve" });
    let doc = DocReader::new("students", "k1", &body).unwrap();
    assert!(doc.u32("a").is_err());
    assert!(doc.u32("b").is_err());
    assert!(doc.u32("c").is_err());
}

#[test]
fn amount_accepts_fractional_values_and_numeric_strings() {
    let body = json!({ "a": 1500.5, "b": "1500.5" });
    let doc = DocReader::new("fee_payments", "k1", &body).unwrap();
    assert!((doc.amount("a").unwrap() - 1500.5).abs() < f64::EPSILON);
    assert!((doc.amount("b").unwrap() - 1500.5).abs() < f64::EPSILON);
}

#[test]
fn amount_rejects_negative_values() {
    let body = json!({ "a": -1.0 });
    let doc = DocReader::new("fee_payments", "k1", &body).unwrap();
    assert!(doc.amount("a").is_err());
}

#[test]
fn str_list_requires_string_items() {
    let body = json!({ "topics": ["Algebra", "Geometry"], "bad": ["x", 3] });
    let doc = DocReader::new("syllabus", "k1", &body).unwrap();
    assert_eq!(doc.str_list("topics").unwrap(), vec!["Algebra", "Geometry"]);
    assert!(doc.str_list("bad").is_err());
}

#[test]
fn non_object_body_is_not_a_document() {
    let body = json!("scalar");
    let err = DocReader::new("students", "k1", &body).unwrap_err();
    assert_eq!(err.to_string(), "students/k1: expected a document object");
}

// =============================================================
// decode_collection
// =============================================================

#[test]
fn decode_collection_sorts_rows_by_key() {
    let payload = json!({
        "zz": student_doc(),
        "aa": student_doc(),
        "mm": student_doc(),
    });
    let rows: Vec<Student> = decode_collection(&payload).unwrap();
    let keys: Vec<&str> = rows.iter().map(Record::key).collect();
    assert_eq!(keys, vec!["aa", "mm", "zz"]);
}

#[test]
fn decode_collection_null_payload_is_empty() {
    let rows: Vec<Student> = decode_collection(&Value::Null).unwrap();
    assert!(rows.is_empty());
}

#[test]
fn decode_collection_rejects_non_map_payload() {
    let err = decode_collection::<Student>(&json!([1, 2])).unwrap_err();
    assert_eq!(
        err,
        DecodeError::NotACollection {
            collection: "students"
        }
    );
}

#[test]
fn decode_collection_surfaces_first_bad_document() {
    let payload = json!({
        "aa": student_doc(),
        "bb": { "name": "No Other Fields" },
    });
    let err = decode_collection::<Student>(&payload).unwrap_err();
    assert!(matches!(err, DecodeError::MissingField { ref key, .. } if key == "bb"));
}
