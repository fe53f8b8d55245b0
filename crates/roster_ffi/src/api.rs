//! FFI use-case API for the UI shell.
//!
//! # Responsibility
//! - Expose the roster page state to Dart through one opaque handle.
//! - Flatten core types into plain envelopes the UI can render directly.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - Mutations report failures through `ActionResponse`, never by throwing.
//! - All state lives in the handle; there is no process-global roster.

use roster_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    InMemoryUserRepository, RosterConfig, RosterService, ServiceError, StatusFilter, UserDraft,
    UserFields, UserId, UserRecord,
};

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir`.
/// - Returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// One table row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRow {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    /// Shown in the `City` column; stored as the record's country.
    pub city: String,
    pub completed: bool,
    /// `ACTIVE` or `INACTIVE`.
    pub status_label: String,
    pub photo: String,
}

impl From<UserRecord> for UserRow {
    fn from(record: UserRecord) -> Self {
        Self {
            status_label: record.status_label().to_string(),
            id: record.id.to_string(),
            name: record.name,
            email: record.email,
            phone: record.phone,
            city: record.country,
            completed: record.completed,
            photo: record.photo,
        }
    }
}

/// Form payload for create/update and draft edits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserInput {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub city: String,
    pub completed: bool,
    /// `None` keeps the current photo: the stored one on update, the
    /// draft's on edit, and the configured placeholder on create.
    pub photo: Option<String>,
}

impl UserInput {
    fn into_fields(self, default_photo: &str) -> UserFields {
        UserFields {
            name: self.name,
            email: self.email,
            phone: self.phone,
            country: self.city,
            completed: self.completed,
            photo: self.photo.unwrap_or_else(|| default_photo.to_string()),
        }
    }
}

/// Open add/edit dialog state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftView {
    pub title: String,
    pub is_new: bool,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub city: String,
    pub completed: bool,
    pub photo: String,
}

impl From<&UserDraft> for DraftView {
    fn from(draft: &UserDraft) -> Self {
        Self {
            title: draft.dialog_title().to_string(),
            is_new: draft.is_new(),
            name: draft.fields.name.clone(),
            email: draft.fields.email.clone(),
            phone: draft.fields.phone.clone(),
            city: draft.fields.country.clone(),
            completed: draft.fields.completed,
            photo: draft.fields.photo.clone(),
        }
    }
}

/// Result of opening a dialog; `draft` is set only when `response.ok`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftResponse {
    pub response: ActionResponse,
    pub draft: Option<DraftView>,
}

/// Generic action response envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionResponse {
    /// Whether operation succeeded.
    pub ok: bool,
    /// Affected user id, when there is one.
    pub user_id: Option<String>,
    /// Stable machine-readable failure kind: `validation|not_found|invalid_filter|no_draft`.
    pub error_code: Option<String>,
    /// Human-readable response message for diagnostics/UI.
    pub message: String,
}

impl ActionResponse {
    fn success(message: impl Into<String>, user_id: Option<String>) -> Self {
        Self {
            ok: true,
            user_id,
            error_code: None,
            message: message.into(),
        }
    }

    fn failure(operation: &str, err: &ServiceError) -> Self {
        let code = match err {
            _ if err.is_validation() => "validation",
            _ if err.is_not_found() => "not_found",
            ServiceError::Criteria(_) => "invalid_filter",
            ServiceError::NoOpenDraft => "no_draft",
            ServiceError::Repo(_) => "store",
        };
        log::warn!("event=ffi_call module=ffi op={operation} status=error error_code={code}");
        Self {
            ok: false,
            user_id: None,
            error_code: Some(code.to_string()),
            message: format!("{operation} failed: {err}"),
        }
    }
}

/// Roster page state owned by the UI.
#[flutter_rust_bridge::frb(opaque)]
pub struct RosterApp {
    service: RosterService<InMemoryUserRepository>,
}

impl RosterApp {
    /// Creates a roster with the three demo records and default cities.
    #[flutter_rust_bridge::frb(sync)]
    pub fn new_seeded() -> Result<RosterApp, String> {
        RosterService::seeded(RosterConfig::default())
            .map(|service| Self { service })
            .map_err(|err| err.to_string())
    }

    /// Creates an empty roster from a JSON config (`{"cities": [...]}`).
    #[flutter_rust_bridge::frb(sync)]
    pub fn new_empty(config_json: Option<String>) -> Result<RosterApp, String> {
        let config = match config_json {
            Some(raw) => RosterConfig::from_json_str(&raw).map_err(|err| err.to_string())?,
            None => RosterConfig::default(),
        };
        RosterService::empty(config)
            .map(|service| Self { service })
            .map_err(|err| err.to_string())
    }

    /// Every row in store order, ignoring filters.
    #[flutter_rust_bridge::frb(sync)]
    pub fn list_all(&self) -> Vec<UserRow> {
        self.service.list_all().into_iter().map(UserRow::from).collect()
    }

    /// Rows visible under the active search/status/city filters.
    #[flutter_rust_bridge::frb(sync)]
    pub fn visible_users(&self) -> Vec<UserRow> {
        self.service
            .visible_records()
            .into_iter()
            .map(UserRow::from)
            .collect()
    }

    /// City menu entries, `All` first.
    #[flutter_rust_bridge::frb(sync)]
    pub fn cities(&self) -> Vec<String> {
        self.service.cities()
    }

    #[flutter_rust_bridge::frb(sync)]
    pub fn set_search(&mut self, text: String) {
        self.service.set_query(text);
    }

    /// Applies `All|Active|Inactive`.
    #[flutter_rust_bridge::frb(sync)]
    pub fn set_status_filter(&mut self, status: String) -> ActionResponse {
        match status.parse::<StatusFilter>() {
            Ok(parsed) => {
                self.service.set_status_filter(parsed);
                ActionResponse::success("Status filter applied.", None)
            }
            Err(err) => ActionResponse::failure("set_status_filter", &err.into()),
        }
    }

    #[flutter_rust_bridge::frb(sync)]
    pub fn set_city_filter(&mut self, city: String) -> ActionResponse {
        match self.service.set_city_filter(&city) {
            Ok(()) => ActionResponse::success("City filter applied.", None),
            Err(err) => ActionResponse::failure("set_city_filter", &err),
        }
    }

    #[flutter_rust_bridge::frb(sync)]
    pub fn create_user(&mut self, input: UserInput) -> ActionResponse {
        let fields = input.into_fields(&self.service.config().default_photo);
        match self.service.create_user(fields) {
            Ok(id) => ActionResponse::success("User created.", Some(id.to_string())),
            Err(err) => ActionResponse::failure("create_user", &err),
        }
    }

    #[flutter_rust_bridge::frb(sync)]
    pub fn update_user(&mut self, user_id: String, input: UserInput) -> ActionResponse {
        let id = UserId::new(user_id.clone());
        let current_photo = match self.service.get_user(&id) {
            Some(record) => record.photo,
            None => self.service.config().default_photo.clone(),
        };
        match self.service.update_user(&id, input.into_fields(&current_photo)) {
            Ok(()) => ActionResponse::success("User updated.", Some(user_id)),
            Err(err) => ActionResponse::failure("update_user", &err),
        }
    }

    #[flutter_rust_bridge::frb(sync)]
    pub fn delete_user(&mut self, user_id: String) -> ActionResponse {
        match self.service.delete_user(&UserId::new(user_id.clone())) {
            Ok(()) => ActionResponse::success("User deleted.", Some(user_id)),
            Err(err) => ActionResponse::failure("delete_user", &err),
        }
    }

    #[flutter_rust_bridge::frb(sync)]
    pub fn toggle_completed(&mut self, user_id: String) -> ActionResponse {
        match self.service.toggle_completed(&UserId::new(user_id.clone())) {
            Ok(completed) => {
                let label = if completed { "ACTIVE" } else { "INACTIVE" };
                ActionResponse::success(format!("User is now {label}."), Some(user_id))
            }
            Err(err) => ActionResponse::failure("toggle_completed", &err),
        }
    }

    /// Opens the blank add dialog.
    #[flutter_rust_bridge::frb(sync)]
    pub fn begin_add(&mut self) -> DraftView {
        DraftView::from(self.service.begin_add())
    }

    /// Opens the edit dialog for `user_id`; reports `not_found` when the
    /// user is gone.
    #[flutter_rust_bridge::frb(sync)]
    pub fn begin_edit(&mut self, user_id: String) -> DraftResponse {
        match self.service.begin_edit(&UserId::new(user_id.clone())) {
            Ok(draft) => DraftResponse {
                draft: Some(DraftView::from(draft)),
                response: ActionResponse::success("Draft opened.", Some(user_id)),
            },
            Err(err) => DraftResponse {
                response: ActionResponse::failure("begin_edit", &err),
                draft: None,
            },
        }
    }

    /// Current dialog state; `None` when closed.
    #[flutter_rust_bridge::frb(sync)]
    pub fn draft(&self) -> Option<DraftView> {
        self.service.draft().map(DraftView::from)
    }

    /// Replaces the open draft's form values.
    #[flutter_rust_bridge::frb(sync)]
    pub fn edit_draft(&mut self, input: UserInput) -> ActionResponse {
        let Some(draft) = self.service.draft_mut() else {
            return ActionResponse::failure("edit_draft", &ServiceError::NoOpenDraft);
        };
        let photo = input.photo.clone().unwrap_or_else(|| draft.fields.photo.clone());
        draft.fields = UserFields {
            photo,
            ..input.into_fields("")
        };
        ActionResponse::success("Draft updated.", None)
    }

    /// Saves the open draft; the dialog stays open on validation failure.
    #[flutter_rust_bridge::frb(sync)]
    pub fn commit_draft(&mut self) -> ActionResponse {
        match self.service.commit_draft() {
            Ok(id) => ActionResponse::success("User saved.", Some(id.to_string())),
            Err(err) => ActionResponse::failure("commit_draft", &err),
        }
    }

    /// Closes the dialog; returns whether one was open.
    #[flutter_rust_bridge::frb(sync)]
    pub fn discard_draft(&mut self) -> bool {
        self.service.discard_draft()
    }
}
