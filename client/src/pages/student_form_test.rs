//! Tests for admission form validation.

use super::validate_admission;

// ==== ADMISSION VALIDATION ====

#[test]
fn builds_a_student_with_empty_key() {
    let student = validate_admission(
        " Ali Raza ",
        "Raza Ahmed",
        "ali@school.pk",
        " 12 ",
        "7",
        "STD-0042",
        "Morning",
        "",
    )
    .expect("form should validate");
    assert!(student.key.is_empty());
    assert_eq!(student.name, "Ali Raza");
    assert_eq!(student.age, 12);
    assert_eq!(student.class_level, "7");
    assert_eq!(student.shift.as_deref(), Some("Morning"));
    assert_eq!(student.gender, None);
}

#[test]
fn rejects_missing_required_fields() {
    let err = validate_admission("", "Raza Ahmed", "ali@school.pk", "12", "7", "STD-0042", "", "")
        .unwrap_err();
    assert_eq!(err, "All fields except shift and gender are required.");
}

#[test]
fn rejects_non_numeric_age() {
    let err = validate_admission(
        "Ali Raza",
        "Raza Ahmed",
        "ali@school.pk",
        "twelve",
        "7",
        "STD-0042",
        "",
        "",
    )
    .unwrap_err();
    assert_eq!(err, "Age must be a whole number.");
}

#[test]
fn rejects_negative_age() {
    let err = validate_admission(
        "Ali Raza",
        "Raza Ahmed",
        "ali@school.pk",
        "-3",
        "7",
        "STD-0042",
        "",
        "",
    )
    .unwrap_err();
    assert_eq!(err, "Age must be a whole number.");
}
