//! Networking modules for the REST auth boundary.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP calls, `normalize` extracts credentials from their
//! loosely shaped responses, and `types` defines the wire schema.

pub mod api;
pub mod normalize;
pub mod types;
