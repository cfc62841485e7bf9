//! Core domain logic for the contact note app.
//! This crate is the single source of truth for entry invariants.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use db::{DbError, StoreConfig};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::entry::{Entry, EntryDraft, EntryId};
pub use model::validation::{validate, ValidationErrors};
pub use repo::entry_repo::{EntryRepository, RepoResult, SqliteEntryRepository, StorageError};
pub use service::entry_service::{EntryService, RemoveOutcome, ReviseOutcome, SubmitOutcome};
