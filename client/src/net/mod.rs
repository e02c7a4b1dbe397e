//! Networking modules for the hosted credential provider and document store.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles auth REST calls, `session` fans session events out to
//! subscribers, `store` is the injected document-store handle, and `types`
//! defines the shared DTOs.

pub mod api;
pub mod session;
pub mod store;
pub mod types;
