//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! The route guard derives its own status from the session stream; this
//! state exists for user-aware chrome (greeting, logout button) and starts
//! loading until the first session event lands.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::User;

/// Current user and whether the first session probe is still in flight.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            user: None,
            loading: true,
        }
    }
}

impl AuthState {
    /// State after a session event: loading is over, the user is whatever
    /// the event carried.
    #[must_use]
    pub fn resolved(user: Option<User>) -> Self {
        Self {
            user,
            loading: false,
        }
    }

    /// Name to show in the shell header.
    #[must_use]
    pub fn display_label(&self) -> String {
        match &self.user {
            Some(user) => user
                .display_name
                .clone()
                .or_else(|| user.email.clone())
                .unwrap_or_else(|| user.uid.clone()),
            None => "—".to_owned(),
        }
    }
}
