use noteapp_core::db::migrations::latest_version;
use noteapp_core::db::{open_db, DbError};
use noteapp_core::{EntryDraft, EntryRepository, SqliteEntryRepository, StoreConfig};
use rusqlite::Connection;

#[test]
fn open_db_applies_all_migrations() {
    let dir = tempfile::tempdir().unwrap();
    let conn = open_db(dir.path().join("entries.db")).unwrap();

    assert_eq!(schema_version(&conn), latest_version());
    assert_table_exists(&conn, "entries");
    assert_eq!(
        column_names(&conn),
        vec!["id", "name", "email", "notes", "created_at"]
    );
}

#[test]
fn opening_same_database_twice_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("entries.db");

    let conn_first = open_db(&path).unwrap();
    conn_first
        .execute(
            "INSERT INTO entries (name, email, notes, created_at)
             VALUES ('a', 'a@a.io', 'n', '2024-01-01 00:00:00');",
            [],
        )
        .unwrap();
    drop(conn_first);

    let conn_second = open_db(&path).unwrap();
    assert_eq!(schema_version(&conn_second), latest_version());
    assert_eq!(row_count(&conn_second), 1);
}

#[test]
fn unversioned_entries_table_is_adopted_without_data_loss() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("legacy.db");

    let conn = Connection::open(&path).unwrap();
    conn.execute_batch(
        "CREATE TABLE entries (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            name      TEXT    NOT NULL,
            email     TEXT    NOT NULL,
            notes     TEXT,
            created_at TEXT   NOT NULL
        );
        INSERT INTO entries (name, email, notes, created_at)
        VALUES ('legacy', 'l@l.io', 'kept', '2023-06-01 12:00:00');",
    )
    .unwrap();
    drop(conn);

    let conn = open_db(&path).unwrap();
    assert_eq!(schema_version(&conn), latest_version());
    assert_eq!(row_count(&conn), 1);
}

#[test]
fn database_stamped_by_newer_binary_opens_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("future.db");

    let conn = open_db(&path).unwrap();
    conn.execute_batch(
        "INSERT INTO entries (name, email, notes, created_at)
         VALUES ('a', 'a@a.io', 'n', '2024-01-01 00:00:00');
         PRAGMA user_version = 3;",
    )
    .unwrap();
    drop(conn);

    let conn = open_db(&path).unwrap();
    assert_eq!(schema_version(&conn), 3);
    assert_eq!(row_count(&conn), 1);
}

#[test]
fn initialize_succeeds_on_store_stamped_by_newer_binary() {
    let dir = tempfile::tempdir().unwrap();
    let repo = SqliteEntryRepository::new(StoreConfig::in_dir(dir.path()));
    repo.initialize().unwrap();
    repo.insert(&EntryDraft::new("Kept", "k@k.io", "x")).unwrap();

    let conn = Connection::open(repo.config().db_path()).unwrap();
    conn.execute_batch("PRAGMA user_version = 3;").unwrap();
    drop(conn);

    repo.initialize().unwrap();
    assert_eq!(repo.list_all().unwrap().len(), 1);
}

#[test]
fn storage_directory_that_is_a_file_returns_create_dir_error() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("blocker");
    std::fs::write(&blocker, b"not a directory").unwrap();

    let err = open_db(blocker.join("entries.db")).unwrap_err();
    assert!(matches!(err, DbError::CreateDir { .. }));
}

fn schema_version(conn: &Connection) -> u32 {
    conn.query_row("PRAGMA user_version;", [], |row| row.get(0))
        .unwrap()
}

fn row_count(conn: &Connection) -> i64 {
    conn.query_row("SELECT COUNT(*) FROM entries;", [], |row| row.get(0))
        .unwrap()
}

fn column_names(conn: &Connection) -> Vec<String> {
    let mut stmt = conn.prepare("PRAGMA table_info(entries);").unwrap();
    let names = stmt
        .query_map([], |row| row.get::<_, String>(1))
        .unwrap()
        .collect::<Result<Vec<_>, _>>()
        .unwrap();
    names
}

fn assert_table_exists(conn: &Connection, table_name: &str) {
    let exists: i64 = conn
        .query_row(
            "SELECT EXISTS(
                SELECT 1
                FROM sqlite_master
                WHERE type = 'table' AND name = ?1
            );",
            [table_name],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(exists, 1, "table {table_name} does not exist");
}
