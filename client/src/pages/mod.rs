//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`; form validation lives in plain helper fns so it tests
//! natively.

pub mod dashboard;
pub mod fees;
pub mod login;
pub mod signup;
pub mod student_form;
pub mod students;
