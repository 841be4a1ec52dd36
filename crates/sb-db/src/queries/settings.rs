//! Scalar admin settings, keyed by name.
//!
//! The only setting today is the tuition fee. It is seeded by migration
//! and never deleted, only overwritten.

use rusqlite::Connection;
use sb_core::{Error, Result};

/// Settings key for the process-wide tuition fee.
pub const TUITION_FEE_KEY: &str = "tuition_fee";

/// Seeded default used when the settings row is somehow missing.
pub const DEFAULT_TUITION_FEE: f64 = 300.0;

/// Get a setting value by key.
pub fn get_setting(conn: &Connection, key: &str) -> Result<Option<f64>> {
    let result = conn.query_row(
        "SELECT value FROM settings WHERE key = ?1",
        [key],
        |row| row.get(0),
    );
    match result {
        Ok(v) => Ok(Some(v)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(Error::database(e.to_string())),
    }
}

/// Upsert a setting value.
pub fn set_setting(conn: &Connection, key: &str, value: f64) -> Result<()> {
    conn.execute(
        "INSERT INTO settings (key, value) VALUES (?1, ?2)
         ON CONFLICT(key) DO UPDATE SET value = excluded.value",
        rusqlite::params![key, value],
    )
    .map_err(|e| Error::database(e.to_string()))?;
    Ok(())
}

/// Current tuition fee, falling back to the seeded default if the row is
/// missing.
pub fn get_tuition_fee(conn: &Connection) -> Result<f64> {
    Ok(get_setting(conn, TUITION_FEE_KEY)?.unwrap_or(DEFAULT_TUITION_FEE))
}

/// Overwrite the tuition fee.
pub fn set_tuition_fee(conn: &Connection, value: f64) -> Result<()> {
    set_setting(conn, TUITION_FEE_KEY, value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::init_memory_pool;

    #[test]
    fn seeded_default_present_after_init() {
        let pool = init_memory_pool().unwrap();
        let conn = pool.get().unwrap();

        assert_eq!(get_tuition_fee(&conn).unwrap(), 300.0);
    }

    #[test]
    fn set_then_get() {
        let pool = init_memory_pool().unwrap();
        let conn = pool.get().unwrap();

        set_tuition_fee(&conn, 250.0).unwrap();
        assert_eq!(get_tuition_fee(&conn).unwrap(), 250.0);

        // overwrite again; still exactly one row
        set_tuition_fee(&conn, 325.5).unwrap();
        assert_eq!(get_tuition_fee(&conn).unwrap(), 325.5);

        let count: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM settings WHERE key = ?1",
                [TUITION_FEE_KEY],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(count, 1);
    }

    #[test]
    fn unknown_key_is_none() {
        let pool = init_memory_pool().unwrap();
        let conn = pool.get().unwrap();

        assert!(get_setting(&conn, "no_such_setting").unwrap().is_none());
    }

    #[test]
    fn missing_row_falls_back_to_default() {
        let pool = init_memory_pool().unwrap();
        let conn = pool.get().unwrap();

        conn.execute("DELETE FROM settings WHERE key = ?1", [TUITION_FEE_KEY])
            .unwrap();
        assert_eq!(get_tuition_fee(&conn).unwrap(), DEFAULT_TUITION_FEE);
    }
}
