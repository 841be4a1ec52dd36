//! Embedded SQL migrations and runner.
//!
//! Migrations are stored as `&str` constants and executed in order.  A
//! `schema_migrations` table tracks which versions have been applied.

use rusqlite::Connection;
use sb_core::{Error, Result};

/// V1: initial schema -- the student roster and the settings table.
const V1_INITIAL: &str = r#"
-- Student roster
CREATE TABLE students (
    id         INTEGER PRIMARY KEY AUTOINCREMENT,
    name       TEXT NOT NULL,
    age        INTEGER NOT NULL,
    guardian   TEXT NOT NULL,
    contact    TEXT NOT NULL,
    fees_paid  REAL NOT NULL DEFAULT 0.0,
    created_at TEXT NOT NULL
);

-- Scalar admin settings, keyed by name
CREATE TABLE settings (
    key   TEXT PRIMARY KEY,
    value REAL NOT NULL
);

CREATE INDEX idx_students_name ON students(name);
"#;

/// V2: seed the tuition fee used to compute every student's balance.
///
/// `INSERT OR IGNORE` keeps re-runs from clobbering a value the operator
/// has already saved through `set_tuition_fee`.
const V2_SEED_TUITION: &str = r#"
INSERT OR IGNORE INTO settings (key, value) VALUES ('tuition_fee', 300.0);
"#;

/// Ordered list of (version, sql) pairs.
const MIGRATIONS: &[(i64, &str)] = &[(1, V1_INITIAL), (2, V2_SEED_TUITION)];

/// Run all pending migrations on `conn`.
///
/// Creates the `schema_migrations` tracking table if it does not exist,
/// then applies each outstanding migration inside a transaction.
pub fn run_migrations(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS schema_migrations (
            version    INTEGER PRIMARY KEY,
            applied_at TEXT NOT NULL DEFAULT (datetime('now'))
        )",
    )
    .map_err(|e| Error::database(format!("Failed to create schema_migrations: {e}")))?;

    for &(version, sql) in MIGRATIONS {
        let already: bool = conn
            .query_row(
                "SELECT COUNT(*) > 0 FROM schema_migrations WHERE version = ?1",
                [version],
                |row| row.get(0),
            )
            .map_err(|e| Error::database(e.to_string()))?;

        if already {
            continue;
        }

        let tx = conn
            .unchecked_transaction()
            .map_err(|e| Error::database(e.to_string()))?;

        tx.execute_batch(sql)
            .map_err(|e| Error::database(format!("Migration V{version} failed: {e}")))?;

        tx.execute(
            "INSERT INTO schema_migrations (version) VALUES (?1)",
            [version],
        )
        .map_err(|e| Error::database(e.to_string()))?;

        tx.commit()
            .map_err(|e| Error::database(e.to_string()))?;

        tracing::info!("Applied migration V{version}");
    }

    Ok(())
}
