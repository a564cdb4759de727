//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `session` owns persisted credentials over a `storage` backend, `role`
//! resolves role tags once, and `auth` is the reactive snapshot plus the
//! sign-in/sign-out flows built on top of them.

pub mod auth;
pub mod role;
pub mod session;
pub mod storage;
