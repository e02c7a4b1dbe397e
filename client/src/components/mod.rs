//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `protected` is the route guard every authenticated page mounts behind;
//! `modal` is the shared dialog chrome the record pages render their
//! detail/edit/confirm views into.

pub mod modal;
pub mod protected;
