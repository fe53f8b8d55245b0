//! Roster use-case service.
//!
//! # Responsibility
//! - Own the whole page state: record store, active criteria, config and the
//!   add/edit draft.
//! - Provide the call surface used by the rendering collaborator.
//!
//! # Invariants
//! - The visible list is always re-derived from store + criteria on read.
//! - A draft that fails validation stays open so the caller can correct it.
//! - City filters are restricted to the configured closed set.

use crate::config::{ConfigError, RosterConfig};
use crate::filter::criteria::{CityFilter, CriteriaError, FilterCriteria, StatusFilter};
use crate::filter::view::visible_records;
use crate::model::user::{UserFields, UserId, UserRecord, UserValidationError};
use crate::repo::user_repo::{InMemoryUserRepository, RepoError, UserRepository};
use crate::service::draft::{DraftEditor, DraftTarget, UserDraft};
use crate::service::seed::demo_records;
use log::{debug, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Service error for roster use-cases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// Store-level validation/not-found failure.
    Repo(RepoError),
    /// Filter value could not be applied.
    Criteria(CriteriaError),
    /// Draft operation called while the dialog is closed.
    NoOpenDraft,
}

impl ServiceError {
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Repo(RepoError::Validation(_)))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Repo(RepoError::NotFound(_)))
    }
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Repo(err) => write!(f, "{err}"),
            Self::Criteria(err) => write!(f, "{err}"),
            Self::NoOpenDraft => write!(f, "no user draft is open"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            Self::Criteria(err) => Some(err),
            Self::NoOpenDraft => None,
        }
    }
}

impl From<RepoError> for ServiceError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

impl From<UserValidationError> for ServiceError {
    fn from(value: UserValidationError) -> Self {
        Self::Repo(RepoError::Validation(value))
    }
}

impl From<CriteriaError> for ServiceError {
    fn from(value: CriteriaError) -> Self {
        Self::Criteria(value)
    }
}

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Error raised while building a service.
#[derive(Debug)]
pub enum SetupError {
    Config(ConfigError),
    Seed(RepoError),
}

impl Display for SetupError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Config(err) => write!(f, "{err}"),
            Self::Seed(err) => write!(f, "invalid seed data: {err}"),
        }
    }
}

impl Error for SetupError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(err) => Some(err),
            Self::Seed(err) => Some(err),
        }
    }
}

impl From<ConfigError> for SetupError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<RepoError> for SetupError {
    fn from(value: RepoError) -> Self {
        Self::Seed(value)
    }
}

/// Application state facade over a record store implementation.
pub struct RosterService<R: UserRepository> {
    repo: R,
    config: RosterConfig,
    criteria: FilterCriteria,
    editor: DraftEditor,
}

impl RosterService<InMemoryUserRepository> {
    /// Creates a service over an empty in-memory store.
    pub fn empty(config: RosterConfig) -> Result<Self, SetupError> {
        Self::new(InMemoryUserRepository::new(), config)
    }

    /// Creates a service pre-populated with the demo records.
    pub fn seeded(config: RosterConfig) -> Result<Self, SetupError> {
        let repo = InMemoryUserRepository::with_records(demo_records(&config.default_photo))?;
        Self::new(repo, config)
    }
}

impl<R: UserRepository> RosterService<R> {
    /// Creates a service using the provided store and validated config.
    pub fn new(repo: R, config: RosterConfig) -> Result<Self, SetupError> {
        config.validate()?;
        Ok(Self {
            repo,
            config,
            criteria: FilterCriteria::default(),
            editor: DraftEditor::new(),
        })
    }

    pub fn config(&self) -> &RosterConfig {
        &self.config
    }

    /// City menu entries: `All` followed by the configured cities.
    pub fn cities(&self) -> Vec<String> {
        self.config.city_options()
    }

    /// Returns every record in store order, ignoring the criteria.
    pub fn list_all(&self) -> Vec<UserRecord> {
        self.repo.list_all()
    }

    pub fn get_user(&self, id: &UserId) -> Option<UserRecord> {
        self.repo.get(id)
    }

    pub fn create_user(&mut self, fields: UserFields) -> ServiceResult<UserId> {
        Ok(self.repo.create(fields)?)
    }

    pub fn update_user(&mut self, id: &UserId, fields: UserFields) -> ServiceResult<()> {
        Ok(self.repo.update(id, fields)?)
    }

    pub fn delete_user(&mut self, id: &UserId) -> ServiceResult<()> {
        Ok(self.repo.delete(id)?)
    }

    /// Flips the completion flag and returns the new value.
    pub fn toggle_completed(&mut self, id: &UserId) -> ServiceResult<bool> {
        Ok(self.repo.toggle_completed(id)?)
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.criteria.query = query.into();
        debug!(
            "event=criteria_set module=service field=query len={}",
            self.criteria.query.chars().count()
        );
    }

    pub fn set_status_filter(&mut self, status: StatusFilter) {
        self.criteria.status = status;
        debug!(
            "event=criteria_set module=service field=status value={}",
            status.as_str()
        );
    }

    /// Applies a city menu value.
    ///
    /// # Errors
    /// - `Criteria(UnknownCity)` when `city` is neither `All` nor configured;
    ///   the previous city filter stays active.
    pub fn set_city_filter(&mut self, city: &str) -> ServiceResult<()> {
        let parsed = CityFilter::parse(city, &self.config)?;
        debug!(
            "event=criteria_set module=service field=city value={}",
            parsed.as_str()
        );
        self.criteria.city = parsed;
        Ok(())
    }

    /// Resets all criteria to `All` with an empty query.
    pub fn clear_filters(&mut self) {
        self.criteria = FilterCriteria::default();
    }

    /// Records visible under the active criteria, in store order.
    pub fn visible_records(&self) -> Vec<UserRecord> {
        self.visible_records_with(&self.criteria)
    }

    /// Records visible under caller-provided criteria, in store order.
    pub fn visible_records_with(&self, criteria: &FilterCriteria) -> Vec<UserRecord> {
        visible_records(&self.repo.list_all(), criteria)
    }

    /// Opens a blank add draft, replacing any open draft.
    pub fn begin_add(&mut self) -> &UserDraft {
        info!("event=draft_open module=service mode=new");
        self.editor.open(UserDraft::for_new(&self.config.default_photo))
    }

    /// Opens an edit draft copied from record `id`.
    pub fn begin_edit(&mut self, id: &UserId) -> ServiceResult<&UserDraft> {
        let Some(record) = self.repo.get(id) else {
            warn!("event=draft_open module=service status=error error_code=not_found id={id}");
            return Err(RepoError::NotFound(id.clone()).into());
        };
        info!("event=draft_open module=service mode=edit id={id}");
        Ok(&*self.editor.open(UserDraft::for_existing(&record)))
    }

    pub fn draft(&self) -> Option<&UserDraft> {
        self.editor.draft()
    }

    /// Mutable access for field-by-field dialog edits.
    pub fn draft_mut(&mut self) -> Option<&mut UserDraft> {
        self.editor.draft_mut()
    }

    /// Dialog title for the open draft, if any.
    pub fn dialog_title(&self) -> Option<&'static str> {
        self.editor.draft().map(UserDraft::dialog_title)
    }

    /// Writes the open draft to the store and closes the dialog.
    ///
    /// # Contract
    /// - `New` drafts are created in one step, keeping the `completed` box.
    /// - `Existing` drafts replace every field of their record.
    /// - Validation failures keep the draft open and the store unchanged.
    /// - A draft whose record disappeared is closed and reports `NotFound`.
    pub fn commit_draft(&mut self) -> ServiceResult<UserId> {
        let Some(draft) = self.editor.draft().cloned() else {
            return Err(ServiceError::NoOpenDraft);
        };

        if let Err(err) = draft.fields.validate() {
            warn!("event=draft_commit module=service status=error error_code=validation_failed");
            return Err(err.into());
        }

        let result = match draft.target {
            DraftTarget::New => self.repo.create_with_status(draft.fields),
            DraftTarget::Existing(id) => self.repo.update(&id, draft.fields).map(|()| id),
        };

        match result {
            Ok(id) => {
                self.editor.close();
                info!("event=draft_commit module=service status=ok id={id}");
                Ok(id)
            }
            Err(RepoError::NotFound(id)) => {
                self.editor.close();
                Err(RepoError::NotFound(id).into())
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Closes the dialog without touching the store.
    ///
    /// Returns whether a draft was open.
    pub fn discard_draft(&mut self) -> bool {
        let was_open = self.editor.close();
        if was_open {
            info!("event=draft_discard module=service status=ok");
        }
        was_open
    }
}
