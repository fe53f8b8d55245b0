//! View filter entry points.
//!
//! # Responsibility
//! - Parse and hold the text/status/city criteria.
//! - Derive the visible subset of the record store.
//!
//! # Invariants
//! - The visible list is a pure function of (records, criteria).

pub mod criteria;
pub mod view;
