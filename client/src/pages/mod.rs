//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates shared chrome to
//! `components`. Access control happens before a page renders, in
//! `components::route_guard`.

pub mod admin_dashboard;
pub mod dashboard;
pub mod login;
pub mod signup;
pub mod vet_dashboard;
