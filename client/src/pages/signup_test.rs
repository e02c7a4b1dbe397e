//! Tests for signup form validation.

use super::validate_signup;

// ==== SIGNUP VALIDATION ====

#[test]
fn accepts_a_complete_form() {
    let form = validate_signup(
        " Sana Khan ",
        " sana@school.pk ",
        "secret1",
        "0301-1234567",
        "35202-1234567-1",
    )
    .expect("form should validate");
    assert_eq!(form.name, "Sana Khan");
    assert_eq!(form.email, "sana@school.pk");
    assert_eq!(form.password, "secret1");
    assert_eq!(form.phone, "0301-1234567");
    assert_eq!(form.nic, "35202-1234567-1");
}

#[test]
fn phone_and_nic_are_optional() {
    let form = validate_signup("Sana Khan", "sana@school.pk", "secret1", "", "")
        .expect("form should validate without contact details");
    assert!(form.phone.is_empty());
    assert!(form.nic.is_empty());
}

#[test]
fn rejects_missing_required_fields() {
    let err = validate_signup("", "sana@school.pk", "secret1", "", "").unwrap_err();
    assert_eq!(err, "Name, email and password are required.");

    let err = validate_signup("Sana Khan", "  ", "secret1", "", "").unwrap_err();
    assert_eq!(err, "Name, email and password are required.");
}

#[test]
fn rejects_short_passwords() {
    let err = validate_signup("Sana Khan", "sana@school.pk", "12345", "", "").unwrap_err();
    assert_eq!(err, "Password must be at least 6 characters.");
}
