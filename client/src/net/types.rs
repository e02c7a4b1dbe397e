//! Shared DTOs for the auth boundary.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Authenticated principal as reported by the credential provider.
///
/// `uid` is the provider's opaque identifier; the display attributes are
/// whatever the account carries and may be absent.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Opaque principal identifier.
    pub uid: String,
    /// Email attribute, if the account has one.
    #[serde(default)]
    pub email: Option<String>,
    /// Display-name attribute, if set.
    #[serde(default, rename = "displayName")]
    pub display_name: Option<String>,
}

/// Profile details captured at signup and written to the `users` collection.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ProfileDraft {
    pub name: String,
    #[serde(rename = "phoneNumber")]
    pub phone_number: String,
    #[serde(rename = "nicNumber")]
    pub nic_number: String,
}
