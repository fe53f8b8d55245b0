//! User record store contract and in-memory implementation.
//!
//! # Responsibility
//! - Provide create/update/delete/toggle APIs over the ordered record list.
//! - Keep insertion order stable across every mutation.
//!
//! # Invariants
//! - Write paths call `UserFields::validate()` before touching the list.
//! - `id` is unique across live records.
//! - A failed call leaves the store unchanged.

use crate::model::user::{UserFields, UserId, UserRecord, UserValidationError};
use log::{info, warn};
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Record store error for user mutations and seeding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoError {
    Validation(UserValidationError),
    NotFound(UserId),
    /// Seed data contained the same id twice.
    DuplicateId(UserId),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "user not found: {id}"),
            Self::DuplicateId(id) => write!(f, "duplicate user id: {id}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::NotFound(_) | Self::DuplicateId(_) => None,
        }
    }
}

impl From<UserValidationError> for RepoError {
    fn from(value: UserValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Record store interface for user CRUD operations.
pub trait UserRepository {
    /// Returns copies of every record in insertion order.
    fn list_all(&self) -> Vec<UserRecord>;
    /// Gets one record by id.
    fn get(&self, id: &UserId) -> Option<UserRecord>;
    /// Appends a new record with `completed = false` and returns its id.
    fn create(&mut self, fields: UserFields) -> RepoResult<UserId>;
    /// Appends a new record keeping `fields.completed` and returns its id.
    fn create_with_status(&mut self, fields: UserFields) -> RepoResult<UserId>;
    /// Replaces every attribute of an existing record except its id.
    fn update(&mut self, id: &UserId, fields: UserFields) -> RepoResult<()>;
    /// Removes one record.
    fn delete(&mut self, id: &UserId) -> RepoResult<()>;
    /// Flips `completed` and returns the new value.
    fn toggle_completed(&mut self, id: &UserId) -> RepoResult<bool>;
}

/// Vec-backed record store owned by one application state.
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    records: Vec<UserRecord>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with `records`, preserving their order.
    ///
    /// # Errors
    /// - `DuplicateId` when two seed records share an id.
    /// - `Validation` when a seed record has a blank required field.
    pub fn with_records(records: Vec<UserRecord>) -> RepoResult<Self> {
        let mut seen = HashSet::with_capacity(records.len());
        for record in &records {
            record.fields().validate()?;
            if !seen.insert(record.id.clone()) {
                return Err(RepoError::DuplicateId(record.id.clone()));
            }
        }
        info!("event=store_seed module=repo status=ok count={}", records.len());
        Ok(Self { records })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn position(&self, id: &UserId) -> Option<usize> {
        self.records.iter().position(|record| &record.id == id)
    }

    fn next_id(&self) -> UserId {
        loop {
            let id = UserId::generate();
            if self.position(&id).is_none() {
                return id;
            }
        }
    }

    fn not_found(event: &str, id: &UserId) -> RepoError {
        warn!("event={event} module=repo status=error error_code=not_found id={id}");
        RepoError::NotFound(id.clone())
    }
}

impl UserRepository for InMemoryUserRepository {
    fn list_all(&self) -> Vec<UserRecord> {
        self.records.clone()
    }

    fn get(&self, id: &UserId) -> Option<UserRecord> {
        self.records.iter().find(|record| &record.id == id).cloned()
    }

    fn create(&mut self, fields: UserFields) -> RepoResult<UserId> {
        self.create_with_status(UserFields {
            completed: false,
            ..fields
        })
    }

    fn create_with_status(&mut self, fields: UserFields) -> RepoResult<UserId> {
        if let Err(err) = fields.validate() {
            warn!("event=user_create module=repo status=error error_code=validation_failed");
            return Err(err.into());
        }

        let id = self.next_id();
        let completed = fields.completed;
        self.records.push(UserRecord::from_fields(id.clone(), fields));

        info!("event=user_create module=repo status=ok id={id} completed={completed}");
        Ok(id)
    }

    fn update(&mut self, id: &UserId, fields: UserFields) -> RepoResult<()> {
        if let Err(err) = fields.validate() {
            warn!(
                "event=user_update module=repo status=error error_code=validation_failed id={id}"
            );
            return Err(err.into());
        }

        let Some(index) = self.position(id) else {
            return Err(Self::not_found("user_update", id));
        };
        self.records[index].apply(fields);

        info!("event=user_update module=repo status=ok id={id}");
        Ok(())
    }

    fn delete(&mut self, id: &UserId) -> RepoResult<()> {
        let Some(index) = self.position(id) else {
            return Err(Self::not_found("user_delete", id));
        };
        self.records.remove(index);

        info!("event=user_delete module=repo status=ok id={id}");
        Ok(())
    }

    fn toggle_completed(&mut self, id: &UserId) -> RepoResult<bool> {
        let Some(index) = self.position(id) else {
            return Err(Self::not_found("user_toggle", id));
        };
        let record = &mut self.records[index];
        record.completed = !record.completed;

        info!(
            "event=user_toggle module=repo status=ok id={id} completed={}",
            record.completed
        );
        Ok(record.completed)
    }
}

#[cfg(test)]
mod tests {
    use super::{InMemoryUserRepository, RepoError, UserRepository};
    use crate::model::user::{UserFields, UserId, UserRecord};

    fn record(id: &str, name: &str) -> UserRecord {
        UserRecord::from_fields(
            UserId::new(id),
            UserFields::new(name, "mail@example.com", "123", "USA"),
        )
    }

    #[test]
    fn with_records_rejects_duplicate_ids() {
        let err = InMemoryUserRepository::with_records(vec![record("1", "A"), record("1", "B")])
            .unwrap_err();
        assert_eq!(err, RepoError::DuplicateId(UserId::new("1")));
    }

    #[test]
    fn with_records_rejects_blank_seed_fields() {
        let err = InMemoryUserRepository::with_records(vec![record("1", " ")]).unwrap_err();
        assert!(matches!(err, RepoError::Validation(_)));
    }

    #[test]
    fn update_keeps_record_position() {
        let mut repo =
            InMemoryUserRepository::with_records(vec![record("1", "A"), record("2", "B")]).unwrap();
        repo.update(
            &UserId::new("1"),
            UserFields::new("Z", "z@example.com", "9", "Canada"),
        )
        .unwrap();

        let names = repo
            .list_all()
            .into_iter()
            .map(|record| record.name)
            .collect::<Vec<_>>();
        assert_eq!(names, vec!["Z", "B"]);
    }

    #[test]
    fn create_with_status_keeps_completed_flag() {
        let mut repo = InMemoryUserRepository::new();
        let mut fields = UserFields::new("A", "a@example.com", "1", "USA");
        fields.completed = true;

        let kept = repo.create_with_status(fields.clone()).unwrap();
        let reset = repo.create(fields).unwrap();

        assert!(repo.get(&kept).unwrap().completed);
        assert!(!repo.get(&reset).unwrap().completed);
    }

    #[test]
    fn toggle_returns_new_value() {
        let mut repo = InMemoryUserRepository::with_records(vec![record("1", "A")]).unwrap();
        assert!(repo.toggle_completed(&UserId::new("1")).unwrap());
        assert!(!repo.toggle_completed(&UserId::new("1")).unwrap());
        assert_eq!(repo.len(), 1);
    }
}
