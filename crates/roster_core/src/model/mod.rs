//! Domain model for the roster table.
//!
//! # Responsibility
//! - Define the user record shape shared by store, filter and draft editor.
//!
//! # Invariants
//! - Every record is identified by a stable `UserId`.
//! - Deletion removes the record; there are no tombstones.

pub mod user;
