//! Session-event fan-out for the credential provider.
//!
//! SYSTEM CONTEXT
//! ==============
//! The hosted credential provider has no push channel of its own here; the
//! app publishes into this hub whenever it learns the session changed (the
//! startup `fetch_current_user` probe, sign-in, sign-out). Subscribers —
//! chiefly the auth gate — receive the current state immediately when one is
//! known, then every later change, until their guard is dropped.
//!
//! The hub is single-threaded UI state: `Rc`/`RefCell`, no locking.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::cell::RefCell;
use std::rc::Rc;

use crate::net::types::User;

/// Callback invoked with each session event (`Some` principal or `None`).
pub type SessionCallback = Rc<dyn Fn(Option<User>)>;

struct HubInner {
    next_id: u64,
    listeners: Vec<(u64, SessionCallback)>,
    /// Last published state; `None` until the first publish, which is how
    /// "provider never responded" stays distinguishable from "signed out".
    current: Option<Option<User>>,
}

/// Shared handle to the session-event stream.
#[derive(Clone)]
pub struct SessionHub {
    inner: Rc<RefCell<HubInner>>,
}

impl Default for SessionHub {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionHub {
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(HubInner {
                next_id: 0,
                listeners: Vec::new(),
                current: None,
            })),
        }
    }

    /// Register a listener. Delivers the current state immediately when one
    /// is known. Dropping the returned guard unsubscribes.
    #[must_use]
    pub fn subscribe(&self, callback: SessionCallback) -> SessionSubscription {
        let (id, replay) = {
            let mut inner = self.inner.borrow_mut();
            let id = inner.next_id;
            inner.next_id += 1;
            inner.listeners.push((id, Rc::clone(&callback)));
            (id, inner.current.clone())
        };
        if let Some(current) = replay {
            callback(current);
        }
        SessionSubscription {
            hub: Rc::clone(&self.inner),
            id,
        }
    }

    /// Publish a session change to every listener, in subscription order.
    pub fn publish(&self, session: Option<User>) {
        // Snapshot listeners so a callback may subscribe or unsubscribe
        // without holding the borrow.
        let callbacks: Vec<SessionCallback> = {
            let mut inner = self.inner.borrow_mut();
            inner.current = Some(session.clone());
            inner
                .listeners
                .iter()
                .map(|(_, cb)| Rc::clone(cb))
                .collect()
        };
        for callback in callbacks {
            callback(session.clone());
        }
    }

    /// Number of live subscriptions.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.inner.borrow().listeners.len()
    }
}

/// Live link to the hub; owned by one subscriber, released on drop.
pub struct SessionSubscription {
    hub: Rc<RefCell<HubInner>>,
    id: u64,
}

impl Drop for SessionSubscription {
    fn drop(&mut self) {
        self.hub
            .borrow_mut()
            .listeners
            .retain(|(id, _)| *id != self.id);
    }
}
