//! Add/edit dialog draft.
//!
//! # Responsibility
//! - Hold the record-in-progress for the add/edit dialog.
//! - Make "no dialog open" an explicit state instead of a half-filled record.
//!
//! # Invariants
//! - At most one draft is open at a time; opening a new one replaces it.
//! - The draft never touches the record store; the service commits it.

use crate::model::user::{UserFields, UserId, UserRecord};

/// What a committed draft writes to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DraftTarget {
    /// Creates a new record on commit.
    New,
    /// Replaces the fields of an existing record on commit.
    Existing(UserId),
}

/// Record-in-progress edited field-by-field by the dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserDraft {
    pub target: DraftTarget,
    pub fields: UserFields,
}

impl UserDraft {
    /// Blank draft for the add dialog.
    pub fn for_new(default_photo: &str) -> Self {
        Self {
            target: DraftTarget::New,
            fields: UserFields {
                photo: default_photo.to_string(),
                ..UserFields::default()
            },
        }
    }

    /// Draft pre-filled from an existing record.
    pub fn for_existing(record: &UserRecord) -> Self {
        Self {
            target: DraftTarget::Existing(record.id.clone()),
            fields: record.fields(),
        }
    }

    pub fn is_new(&self) -> bool {
        self.target == DraftTarget::New
    }

    pub fn dialog_title(&self) -> &'static str {
        if self.is_new() {
            "Add User"
        } else {
            "Edit User"
        }
    }
}

/// Open/closed state of the add/edit dialog.
#[derive(Debug, Default)]
pub struct DraftEditor {
    open: Option<UserDraft>,
}

impl DraftEditor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens `draft`, replacing any draft already open.
    pub fn open(&mut self, draft: UserDraft) -> &mut UserDraft {
        self.open.insert(draft)
    }

    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    pub fn draft(&self) -> Option<&UserDraft> {
        self.open.as_ref()
    }

    pub fn draft_mut(&mut self) -> Option<&mut UserDraft> {
        self.open.as_mut()
    }

    /// Closes the dialog and returns whether a draft was open.
    pub fn close(&mut self) -> bool {
        self.open.take().is_some()
    }
}
