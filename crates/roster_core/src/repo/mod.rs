//! Record store abstractions and the in-memory implementation.
//!
//! # Responsibility
//! - Define the record store contract used by the roster service.
//! - Keep collection bookkeeping out of service orchestration.
//!
//! # Invariants
//! - Store writes must call `UserFields::validate()` before mutating.
//! - Store APIs report `NotFound` for unknown ids instead of silently
//!   ignoring them.

pub mod user_repo;
