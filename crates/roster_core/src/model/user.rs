//! User record domain model.
//!
//! # Responsibility
//! - Define the canonical user record shown by the roster table.
//! - Define the editable payload (`UserFields`) and its save-time validation.
//!
//! # Invariants
//! - `id` is assigned once at creation and never changes afterwards.
//! - `name`, `email`, `phone` and `country` must be non-blank to be saved.
//! - Field values are stored as entered; blank checks use trimmed views only.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Photo reference used when the caller does not provide one.
pub const DEFAULT_PHOTO: &str = "assets/avatar.webp";

/// Opaque stable identifier of one user record.
///
/// Seed data uses short literal ids; generated ids are time-ordered UUIDv7
/// strings, so an id is never handed out twice.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    /// Wraps an existing id value (seed, import or FFI input).
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Generates a fresh id from the current time.
    pub fn generate() -> Self {
        Self(Uuid::now_v7().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for UserId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for UserId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for UserId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Required text attribute of a user record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserField {
    Name,
    Email,
    Phone,
    Country,
}

impl UserField {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Country => "country",
        }
    }
}

/// Save-time validation failure for user payloads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserValidationError {
    /// One or more required fields are empty after trimming.
    MissingFields(Vec<UserField>),
}

impl Display for UserValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingFields(fields) => {
                let names = fields
                    .iter()
                    .map(|field| field.as_str())
                    .collect::<Vec<_>>()
                    .join(", ");
                write!(f, "required fields are blank: {names}")
            }
        }
    }
}

impl Error for UserValidationError {}

/// Editable payload of a user record.
///
/// Used by create/update and by the add/edit draft. `completed` is ignored
/// by `create`, which always starts records as not completed; the add draft
/// keeps it through `create_with_status`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserFields {
    pub name: String,
    pub email: String,
    pub phone: String,
    /// Displayed and filtered as the record's city.
    pub country: String,
    pub completed: bool,
    pub photo: String,
}

impl Default for UserFields {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            phone: String::new(),
            country: String::new(),
            completed: false,
            photo: DEFAULT_PHOTO.to_string(),
        }
    }
}

impl UserFields {
    /// Creates a payload with the four required attributes and default
    /// status/photo.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
        country: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
            country: country.into(),
            ..Self::default()
        }
    }

    /// Checks that every required attribute is non-blank.
    ///
    /// # Errors
    /// - Returns `MissingFields` listing all blank attributes in display order.
    pub fn validate(&self) -> Result<(), UserValidationError> {
        let missing = [
            (UserField::Name, &self.name),
            (UserField::Email, &self.email),
            (UserField::Phone, &self.phone),
            (UserField::Country, &self.country),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field)
        .collect::<Vec<_>>();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(UserValidationError::MissingFields(missing))
        }
    }
}

/// Canonical user record held by the record store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub country: String,
    pub completed: bool,
    pub photo: String,
}

impl UserRecord {
    /// Builds a record from a payload under an already assigned id.
    pub fn from_fields(id: UserId, fields: UserFields) -> Self {
        Self {
            id,
            name: fields.name,
            email: fields.email,
            phone: fields.phone,
            country: fields.country,
            completed: fields.completed,
            photo: fields.photo,
        }
    }

    /// Returns the editable payload of this record.
    pub fn fields(&self) -> UserFields {
        UserFields {
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            country: self.country.clone(),
            completed: self.completed,
            photo: self.photo.clone(),
        }
    }

    /// Replaces every attribute except `id`.
    pub fn apply(&mut self, fields: UserFields) {
        self.name = fields.name;
        self.email = fields.email;
        self.phone = fields.phone;
        self.country = fields.country;
        self.completed = fields.completed;
        self.photo = fields.photo;
    }

    /// Table label for the completion flag.
    pub fn status_label(&self) -> &'static str {
        if self.completed {
            "ACTIVE"
        } else {
            "INACTIVE"
        }
    }

    /// Space-joined searchable text, in the order the filter matches it.
    pub fn search_text(&self) -> String {
        format!("{} {} {} {}", self.name, self.email, self.phone, self.country)
    }
}
