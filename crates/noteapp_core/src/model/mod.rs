//! Domain model for contact note entries.
//!
//! # Responsibility
//! - Define the entry record and its write-side draft.
//! - Provide the pure validation rules applied before persistence.
//!
//! # Invariants
//! - Deletion is a hard delete; there is no tombstone state.

pub mod entry;
pub mod validation;
