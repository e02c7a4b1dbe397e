use super::*;
use serde_json::json;

#[test]
fn decode_reads_catalog_fields() {
    let body = json!({
        "name": "Physics",
        "code": "PHY-9",
        "description": "Mechanics and waves",
        "credits": "4",
        "department": "Science",
    });
    let subject = Subject::decode("sub1", &body).unwrap();
    assert_eq!(subject.code, "PHY-9");
    assert_eq!(subject.credits, 4);
}

#[test]
fn encode_keeps_credits_numeric() {
    let subject = Subject {
        key: "sub1".to_owned(),
        name: "Physics".to_owned(),
        code: "PHY-9".to_owned(),
        description: "Mechanics and waves".to_owned(),
        credits: 4,
        department: "Science".to_owned(),
    };
    assert_eq!(subject.encode()["credits"], 4);
}
