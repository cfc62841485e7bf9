//! Submission validation rules.
//!
//! # Responsibility
//! - Map raw (already trimmed) field values to user-facing error messages.
//!
//! # Invariants
//! - Pure and deterministic: no I/O, no shared mutable state.
//! - Every applicable error is reported, not just the first.
//! - An empty result means the submission may be persisted.

use once_cell::sync::Lazy;
use regex::Regex;

pub const NAME_MAX_CHARS: usize = 100;
pub const NOTES_MAX_CHARS: usize = 1000;

pub const NAME_REQUIRED: &str = "Name is required.";
pub const NAME_TOO_LONG: &str = "Name must be 100 characters or fewer.";
pub const EMAIL_REQUIRED: &str = "Email is required.";
pub const EMAIL_INVALID: &str = "Please enter a valid email address.";
pub const NOTES_REQUIRED: &str = "Notes are required.";
pub const NOTES_TOO_LONG: &str = "Notes must be 1000 characters or fewer.";

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("valid email regex"));

/// Validates one submission. Inputs are not re-trimmed.
///
/// Lengths are counted in characters, not bytes.
pub fn validate(name: &str, email: &str, notes: &str) -> Vec<String> {
    let mut errors = Vec::new();

    if name.is_empty() {
        errors.push(NAME_REQUIRED.to_string());
    } else if name.chars().count() > NAME_MAX_CHARS {
        errors.push(NAME_TOO_LONG.to_string());
    }

    if email.is_empty() {
        errors.push(EMAIL_REQUIRED.to_string());
    } else if !EMAIL_RE.is_match(email) {
        errors.push(EMAIL_INVALID.to_string());
    }

    if notes.is_empty() {
        errors.push(NOTES_REQUIRED.to_string());
    } else if notes.chars().count() > NOTES_MAX_CHARS {
        errors.push(NOTES_TOO_LONG.to_string());
    }

    errors
}

/// Non-empty set of validation messages for one rejected submission.
///
/// Returned as data by the service layer; never propagated with `?`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors(Vec<String>);

impl ValidationErrors {
    /// Wraps validator output, or `None` when there is nothing to report.
    pub fn from_messages(messages: Vec<String>) -> Option<Self> {
        if messages.is_empty() {
            None
        } else {
            Some(Self(messages))
        }
    }

    pub fn messages(&self) -> &[String] {
        &self.0
    }

    pub fn contains(&self, fragment: &str) -> bool {
        self.0.iter().any(|message| message.contains(fragment))
    }
}
