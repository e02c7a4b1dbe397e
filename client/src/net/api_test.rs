use super::*;

#[test]
fn sign_in_failed_message_formats_status() {
    assert_eq!(sign_in_failed_message(401), "sign in failed: 401");
}

#[test]
fn sign_up_failed_message_formats_status() {
    assert_eq!(sign_up_failed_message(409), "sign up failed: 409");
}
