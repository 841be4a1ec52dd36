//! Rust structs mapping to database tables.
//!
//! Each model implements `from_row` for constructing itself from a
//! `rusqlite::Row`.

use sb_core::StudentId;

/// A student record as stored in the roster.
#[derive(Debug, Clone, PartialEq)]
pub struct Student {
    pub id: StudentId,
    pub name: String,
    pub age: i32,
    pub guardian: String,
    pub contact: String,
    pub fees_paid: f64,
    pub created_at: String,
}

impl Student {
    /// Build from a row selected as:
    /// id, name, age, guardian, contact, fees_paid, created_at
    pub fn from_row(row: &rusqlite::Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: StudentId::from(row.get::<_, i64>(0)?),
            name: row.get(1)?,
            age: row.get(2)?,
            guardian: row.get(3)?,
            contact: row.get(4)?,
            fees_paid: row.get(5)?,
            created_at: row.get(6)?,
        })
    }
}
