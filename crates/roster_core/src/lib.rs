//! Core domain logic for the roster table.
//! This crate is the single source of truth for record and filter invariants.

pub mod config;
pub mod filter;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use config::{ConfigError, RosterConfig, ALL_CITIES};
pub use filter::criteria::{CityFilter, CriteriaError, FilterCriteria, StatusFilter};
pub use filter::view::{matches, visible_records};
pub use logging::{default_log_level, init_logging, logging_status, LogLevel};
pub use model::user::{
    UserField, UserFields, UserId, UserRecord, UserValidationError, DEFAULT_PHOTO,
};
pub use repo::user_repo::{InMemoryUserRepository, RepoError, RepoResult, UserRepository};
pub use service::draft::{DraftEditor, DraftTarget, UserDraft};
pub use service::roster_service::{RosterService, ServiceError, ServiceResult, SetupError};
pub use service::seed::demo_records;

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
