//! Plain state and logic structs behind the UI.
//!
//! DESIGN
//! ======
//! Everything here is synchronous and browser-free so it tests on the native
//! target; components own the signals and drive these types from callbacks.

pub mod auth;
pub mod fees;
pub mod gate;
pub mod roster;
pub mod view;
