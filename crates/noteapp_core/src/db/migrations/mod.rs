//! Versioned schema bootstrap for the `entries` table.
//!
//! # Invariants
//! - Steps are idempotent DDL (`IF NOT EXISTS`), so an `entries` table
//!   created by an unversioned deployment is adopted as-is.
//! - `PRAGMA user_version` records the last applied step and never moves
//!   backwards. A database stamped by a newer binary is left untouched.

use crate::db::DbResult;
use log::{info, warn};
use rusqlite::Connection;

const SCHEMA_STEPS: [&str; 2] = [
    include_str!("0001_entries.sql"),
    include_str!("0002_entries_created_at_index.sql"),
];

/// Schema version written by this binary once every step has run.
pub fn latest_version() -> u32 {
    SCHEMA_STEPS.len() as u32
}

/// Runs the schema steps the database has not seen yet, in one transaction.
pub fn apply_migrations(conn: &mut Connection) -> DbResult<()> {
    let stamped: u32 = conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?;
    let pending = SCHEMA_STEPS.iter().skip(stamped as usize);
    if pending.len() == 0 {
        if stamped > latest_version() {
            warn!(
                "event=db_migrate module=db status=skipped db_version={} known_version={}",
                stamped,
                latest_version()
            );
        }
        return Ok(());
    }

    let tx = conn.transaction()?;
    for sql in pending {
        tx.execute_batch(sql)?;
    }
    tx.execute_batch(&format!("PRAGMA user_version = {};", latest_version()))?;
    tx.commit()?;

    info!(
        "event=db_migrate module=db status=ok from_version={} to_version={}",
        stamped,
        latest_version()
    );
    Ok(())
}
