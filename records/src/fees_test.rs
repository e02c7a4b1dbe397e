use super::*;
use serde_json::json;

fn structure(key: &str) -> FeeStructure {
    FeeStructure::decode(
        key,
        &json!({
            "class": "6",
            "tuitionFee": 3000,
            "libraryFee": 200,
            "sportsFee": 300,
            "computerFee": 500,
        }),
    )
    .unwrap()
}

#[test]
fn structure_total_sums_all_heads() {
    assert!((structure("f1").total() - 4000.0).abs() < f64::EPSILON);
}

#[test]
fn structure_rejects_negative_head() {
    let err = FeeStructure::decode(
        "f1",
        &json!({
            "class": "6",
            "tuitionFee": -3000,
            "libraryFee": 200,
            "sportsFee": 300,
            "computerFee": 500,
        }),
    )
    .unwrap_err();
    assert!(matches!(
        err,
        DecodeError::InvalidField {
            field: "tuitionFee",
            ..
        }
    ));
}

#[test]
fn payment_decodes_stringly_amounts() {
    let payment = FeePayment::decode(
        "p1",
        &json!({
            "studentName": "Bilal Ahmed",
            "amount": "1500.50",
            "paymentDate": "2026-03-01",
            "paymentMethod": "Cash",
        }),
    )
    .unwrap();
    assert!((payment.amount - 1500.50).abs() < f64::EPSILON);
}

#[test]
fn total_collected_sums_payments() {
    let a = FeePayment {
        key: "p1".to_owned(),
        student_name: "A".to_owned(),
        amount: 1000.0,
        payment_date: "2026-03-01".to_owned(),
        payment_method: "Cash".to_owned(),
    };
    let b = FeePayment {
        amount: 250.5,
        key: "p2".to_owned(),
        ..a.clone()
    };
    assert!((FeePayment::total_collected(&[a, b]) - 1250.5).abs() < f64::EPSILON);
    assert!((FeePayment::total_collected(&[]) - 0.0).abs() < f64::EPSILON);
}
