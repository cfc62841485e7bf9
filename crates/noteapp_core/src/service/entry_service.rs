//! Entry use-case service.
//!
//! # Responsibility
//! - Compose validation and storage for submit/revise/remove requests.
//! - Translate results into the user-facing feedback messages.
//!
//! # Invariants
//! - Storage is never called for a submission that failed validation.
//! - Validation sees trimmed values; storage receives normalized values.
//! - Rejections and missing rows are returned as data; only storage
//!   failures are `Err`.

use crate::model::entry::{Entry, EntryDraft, EntryId};
use crate::model::validation::{validate, ValidationErrors};
use crate::repo::entry_repo::{EntryRepository, RepoResult};
use log::info;

pub const MSG_SAVED: &str = "Entry saved successfully.";
pub const MSG_UPDATED: &str = "Entry updated successfully.";
pub const MSG_DELETED: &str = "Entry deleted.";
pub const MSG_NOT_FOUND: &str = "Entry not found.";

/// Result of a create request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Saved(EntryId),
    Rejected(ValidationErrors),
}

/// Result of an update request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReviseOutcome {
    Updated,
    NotFound,
    Rejected(ValidationErrors),
}

/// Result of a delete request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveOutcome {
    Deleted,
    NotFound,
}

impl SubmitOutcome {
    /// Feedback lines to show the submitter.
    pub fn messages(&self) -> Vec<String> {
        match self {
            Self::Saved(_) => vec![MSG_SAVED.to_string()],
            Self::Rejected(errors) => errors.messages().to_vec(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Saved(_))
    }
}

impl ReviseOutcome {
    pub fn messages(&self) -> Vec<String> {
        match self {
            Self::Updated => vec![MSG_UPDATED.to_string()],
            Self::NotFound => vec![MSG_NOT_FOUND.to_string()],
            Self::Rejected(errors) => errors.messages().to_vec(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Updated)
    }
}

impl RemoveOutcome {
    pub fn message(&self) -> &'static str {
        match self {
            Self::Deleted => MSG_DELETED,
            Self::NotFound => MSG_NOT_FOUND,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Deleted)
    }
}

/// Entry service facade over repository implementations.
pub struct EntryService<R: EntryRepository> {
    repo: R,
}

impl<R: EntryRepository> EntryService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Ensures storage is ready. Safe to call on every process start.
    pub fn initialize(&self) -> RepoResult<()> {
        self.repo.initialize()
    }

    /// Validates and stores a new entry.
    pub fn submit(&self, draft: &EntryDraft) -> RepoResult<SubmitOutcome> {
        let trimmed = draft.trimmed();
        if let Some(errors) = check(&trimmed) {
            info!(
                "event=entry_submit module=service status=rejected error_count={}",
                errors.messages().len()
            );
            return Ok(SubmitOutcome::Rejected(errors));
        }

        let id = self.repo.insert(&trimmed.normalized())?;
        Ok(SubmitOutcome::Saved(id))
    }

    /// Validates and replaces the fields of an existing entry.
    pub fn revise(&self, id: EntryId, draft: &EntryDraft) -> RepoResult<ReviseOutcome> {
        let trimmed = draft.trimmed();
        if let Some(errors) = check(&trimmed) {
            info!(
                "event=entry_revise module=service status=rejected entry_id={} error_count={}",
                id,
                errors.messages().len()
            );
            return Ok(ReviseOutcome::Rejected(errors));
        }

        if self.repo.update(id, &trimmed.normalized())? {
            Ok(ReviseOutcome::Updated)
        } else {
            Ok(ReviseOutcome::NotFound)
        }
    }

    /// Deletes one entry by id.
    pub fn remove(&self, id: EntryId) -> RepoResult<RemoveOutcome> {
        if self.repo.delete(id)? {
            Ok(RemoveOutcome::Deleted)
        } else {
            Ok(RemoveOutcome::NotFound)
        }
    }

    /// Lists all entries, newest first.
    pub fn entries(&self) -> RepoResult<Vec<Entry>> {
        self.repo.list_all()
    }
}

fn check(trimmed: &EntryDraft) -> Option<ValidationErrors> {
    ValidationErrors::from_messages(validate(
        &trimmed.name,
        &trimmed.email,
        &trimmed.notes,
    ))
}
