//! Entry domain model.
//!
//! # Responsibility
//! - Define the persisted contact record and its write-side draft.
//! - Own the normalization step applied before validation and persistence.
//!
//! # Invariants
//! - `id` is assigned by storage and never reused for another entry.
//! - `created_at` is set once at insert time and never rewritten.
//! - Normalization order is trim -> validate -> lower-case email -> persist.

use serde::{Deserialize, Serialize};

/// Storage-assigned identifier (SQLite rowid).
pub type EntryId = i64;

/// Persisted contact note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub id: EntryId,
    pub name: String,
    /// Always trimmed and lower-cased.
    pub email: String,
    pub notes: String,
    /// UTC, `YYYY-MM-DD HH:MM:SS`.
    pub created_at: String,
}

/// User-supplied fields for creating or replacing an entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryDraft {
    pub name: String,
    pub email: String,
    pub notes: String,
}

impl EntryDraft {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        notes: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            notes: notes.into(),
        }
    }

    /// Returns a copy with surrounding whitespace removed from every field.
    ///
    /// This is the value the validator must see.
    pub fn trimmed(&self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            notes: self.notes.trim().to_string(),
        }
    }

    /// Returns the storage form: trimmed fields and a lower-cased email.
    ///
    /// Idempotent, so storage can apply it to already-normalized drafts.
    pub fn normalized(&self) -> Self {
        let trimmed = self.trimmed();
        Self {
            email: trimmed.email.to_lowercase(),
            ..trimmed
        }
    }
}
