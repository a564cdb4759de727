//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read shared auth state from Leptos context providers.

pub mod dashboard_header;
pub mod profile_card;
pub mod route_guard;
