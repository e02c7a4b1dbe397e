use super::*;
use serde_json::json;

#[test]
fn decode_reads_topic_list() {
    let body = json!({
        "course": "Mathematics 7",
        "instructor": "Nadia Hussain",
        "description": "Full-year plan",
        "topics": ["Integers", "Fractions", "Geometry"],
        "duration": "36 weeks",
    });
    let syllabus = Syllabus::decode("sy1", &body).unwrap();
    assert_eq!(syllabus.topics.len(), 3);
    assert_eq!(syllabus.topics[2], "Geometry");
}

#[test]
fn decode_rejects_comma_joined_topics_string() {
    let body = json!({
        "course": "Mathematics 7",
        "instructor": "Nadia Hussain",
        "description": "Full-year plan",
        "topics": "Integers, Fractions",
        "duration": "36 weeks",
    });
    assert!(matches!(
        Syllabus::decode("sy1", &body),
        Err(DecodeError::InvalidField { field: "topics", .. })
    ));
}
