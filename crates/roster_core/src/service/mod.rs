//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate store, filter and draft into page-level APIs.
//! - Keep UI/FFI layers decoupled from store details.

pub mod draft;
pub mod roster_service;
pub mod seed;
