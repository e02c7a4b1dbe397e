use super::*;
use serde_json::json;

#[test]
fn decode_reads_staff_fields() {
    let body = json!({
        "name": "Nadia Hussain",
        "email": "nadia@example.com",
        "subject": "Mathematics",
        "qualification": "MSc Mathematics",
        "teacherId": "TCH-009",
    });
    let teacher = Teacher::decode("t1", &body).unwrap();
    assert_eq!(teacher.teacher_id, "TCH-009");
    assert_eq!(teacher.subject, "Mathematics");
}

#[test]
fn decode_rejects_non_string_qualification() {
    let body = json!({
        "name": "Nadia Hussain",
        "email": "nadia@example.com",
        "subject": "Mathematics",
        "qualification": 16,
        "teacherId": "TCH-009",
    });
    assert!(matches!(
        Teacher::decode("t1", &body),
        Err(DecodeError::InvalidField {
            field: "qualification",
            ..
        })
    ));
}
