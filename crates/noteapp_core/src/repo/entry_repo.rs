//! Entry repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide the five entry store operations over the `entries` table.
//! - Keep SQL details inside the persistence boundary.
//!
//! # Invariants
//! - The store never validates; callers pass already-validated drafts.
//! - Write paths always persist `EntryDraft::normalized()` values.
//! - Every operation opens its own connection and transaction. Both are
//!   released on return, and an uncommitted transaction rolls back on drop.
//! - "Not found" on update/delete is `Ok(false)`, never an error.

use crate::db::{connect, open_db, DbError, StoreConfig};
use crate::model::entry::{Entry, EntryDraft, EntryId};
use log::{error, info};
use rusqlite::{params, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::Instant;

const ENTRY_SELECT_SQL: &str = "SELECT
    id,
    name,
    email,
    notes,
    created_at
FROM entries";

pub type RepoResult<T> = Result<T, StorageError>;

/// Fatal failure at the persistence boundary.
#[derive(Debug)]
pub enum StorageError {
    Db(DbError),
}

impl Display for StorageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "storage failure: {err}"),
        }
    }
}

impl Error for StorageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
        }
    }
}

impl From<DbError> for StorageError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for StorageError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Repository interface for entry CRUD operations.
pub trait EntryRepository {
    /// Ensures the `entries` table exists. Safe to call on every start.
    fn initialize(&self) -> RepoResult<()>;
    /// Persists a new entry and returns its storage-assigned id.
    fn insert(&self, draft: &EntryDraft) -> RepoResult<EntryId>;
    /// Returns every entry, newest `created_at` first.
    fn list_all(&self) -> RepoResult<Vec<Entry>>;
    /// Replaces name/email/notes of one entry. `false` when `id` is unknown.
    fn update(&self, id: EntryId, draft: &EntryDraft) -> RepoResult<bool>;
    /// Hard-deletes one entry. `false` when `id` is unknown.
    fn delete(&self, id: EntryId) -> RepoResult<bool>;
}

/// SQLite-backed entry repository bound to one database file.
#[derive(Debug, Clone)]
pub struct SqliteEntryRepository {
    config: StoreConfig,
}

impl SqliteEntryRepository {
    pub fn new(config: StoreConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    fn connect(&self) -> RepoResult<Connection> {
        Ok(connect(self.config.db_path())?)
    }
}

impl EntryRepository for SqliteEntryRepository {
    fn initialize(&self) -> RepoResult<()> {
        let started_at = Instant::now();
        match open_db(self.config.db_path()) {
            Ok(_conn) => {
                info!(
                    "event=store_init module=repo status=ok duration_ms={}",
                    started_at.elapsed().as_millis()
                );
                Ok(())
            }
            Err(err) => {
                error!(
                    "event=store_init module=repo status=error duration_ms={} error={}",
                    started_at.elapsed().as_millis(),
                    err
                );
                Err(err.into())
            }
        }
    }

    fn insert(&self, draft: &EntryDraft) -> RepoResult<EntryId> {
        let started_at = Instant::now();
        let draft = draft.normalized();
        let mut conn = self.connect()?;
        let tx = conn.transaction()?;

        tx.execute(
            "INSERT INTO entries (name, email, notes, created_at)
             VALUES (?1, ?2, ?3, strftime('%Y-%m-%d %H:%M:%S', 'now'));",
            params![draft.name, draft.email, draft.notes],
        )?;
        let id = tx.last_insert_rowid();
        tx.commit()?;

        info!(
            "event=entry_insert module=repo status=ok entry_id={} duration_ms={}",
            id,
            started_at.elapsed().as_millis()
        );
        Ok(id)
    }

    fn list_all(&self) -> RepoResult<Vec<Entry>> {
        let started_at = Instant::now();
        let conn = self.connect()?;
        let mut stmt = conn.prepare(&format!("{ENTRY_SELECT_SQL} ORDER BY created_at DESC;"))?;

        let mut rows = stmt.query([])?;
        let mut entries = Vec::new();
        while let Some(row) = rows.next()? {
            entries.push(parse_entry_row(row)?);
        }

        info!(
            "event=entry_list module=repo status=ok count={} duration_ms={}",
            entries.len(),
            started_at.elapsed().as_millis()
        );
        Ok(entries)
    }

    fn update(&self, id: EntryId, draft: &EntryDraft) -> RepoResult<bool> {
        let started_at = Instant::now();
        let draft = draft.normalized();
        let mut conn = self.connect()?;
        let tx = conn.transaction()?;

        let changed = tx.execute(
            "UPDATE entries
             SET
                name = ?1,
                email = ?2,
                notes = ?3
             WHERE id = ?4;",
            params![draft.name, draft.email, draft.notes, id],
        )?;
        tx.commit()?;

        info!(
            "event=entry_update module=repo status=ok entry_id={} matched={} duration_ms={}",
            id,
            changed > 0,
            started_at.elapsed().as_millis()
        );
        Ok(changed > 0)
    }

    fn delete(&self, id: EntryId) -> RepoResult<bool> {
        let started_at = Instant::now();
        let mut conn = self.connect()?;
        let tx = conn.transaction()?;

        let changed = tx.execute("DELETE FROM entries WHERE id = ?1;", [id])?;
        tx.commit()?;

        info!(
            "event=entry_delete module=repo status=ok entry_id={} matched={} duration_ms={}",
            id,
            changed > 0,
            started_at.elapsed().as_millis()
        );
        Ok(changed > 0)
    }
}

fn parse_entry_row(row: &Row<'_>) -> RepoResult<Entry> {
    Ok(Entry {
        id: row.get("id")?,
        name: row.get("name")?,
        email: row.get("email")?,
        // Column is nullable in the schema; rows written here always carry notes.
        notes: row.get::<_, Option<String>>("notes")?.unwrap_or_default(),
        created_at: row.get("created_at")?,
    })
}
