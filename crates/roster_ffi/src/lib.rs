//! Flutter-facing bindings for `roster_core`.

pub mod api;
