use super::*;
use serde_json::json;

#[test]
fn decode_reads_reference_keys() {
    let body = json!({ "teacherId": "t1", "courseId": "sub9" });
    let allocation = Allocation::decode("al1", &body).unwrap();
    assert_eq!(allocation.teacher_key, "t1");
    assert_eq!(allocation.course_key, "sub9");
}

#[test]
fn encode_round_trips() {
    let allocation = Allocation {
        key: "al1".to_owned(),
        teacher_key: "t1".to_owned(),
        course_key: "sub9".to_owned(),
    };
    assert_eq!(
        Allocation::decode("al1", &allocation.encode()).unwrap(),
        allocation
    );
}
