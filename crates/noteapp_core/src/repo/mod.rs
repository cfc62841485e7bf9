//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the entry store contract.
//! - Isolate SQLite query details from service orchestration.
//!
//! # Invariants
//! - Repositories trust their callers: validation happens before any write.
//! - Storage failures surface as `StorageError`; missing rows do not.

pub mod entry_repo;
