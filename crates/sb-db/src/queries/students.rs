//! Student record CRUD operations.
//!
//! Field contents are not validated here: negative ages or fees are
//! stored as given. The form boundary is responsible for rejecting
//! unparsable input before it reaches these functions.

use chrono::Utc;
use rusqlite::Connection;
use sb_core::{Error, Result, StudentId};

use crate::models::Student;

/// Insert a new student and return the stored record with its assigned id.
pub fn create_student(
    conn: &Connection,
    name: &str,
    age: i32,
    guardian: &str,
    contact: &str,
    fees_paid: f64,
) -> Result<Student> {
    let created_at = Utc::now().to_rfc3339();

    conn.execute(
        "INSERT INTO students (name, age, guardian, contact, fees_paid, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        rusqlite::params![name, age, guardian, contact, fees_paid, created_at],
    )
    .map_err(|e| Error::database(e.to_string()))?;

    let id = StudentId::from(conn.last_insert_rowid());

    Ok(Student {
        id,
        name: name.to_string(),
        age,
        guardian: guardian.to_string(),
        contact: contact.to_string(),
        fees_paid,
        created_at,
    })
}

/// Get a student by id.
pub fn get_student(conn: &Connection, id: StudentId) -> Result<Option<Student>> {
    let result = conn.query_row(
        "SELECT id, name, age, guardian, contact, fees_paid, created_at
         FROM students WHERE id = ?1",
        [id.as_i64()],
        Student::from_row,
    );
    match result {
        Ok(s) => Ok(Some(s)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(Error::database(e.to_string())),
    }
}

/// List all students in rowid order.
pub fn list_students(conn: &Connection) -> Result<Vec<Student>> {
    let mut stmt = conn
        .prepare(
            "SELECT id, name, age, guardian, contact, fees_paid, created_at
             FROM students ORDER BY id",
        )
        .map_err(|e| Error::database(e.to_string()))?;
    let rows = stmt
        .query_map([], Student::from_row)
        .map_err(|e| Error::database(e.to_string()))?
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|e| Error::database(e.to_string()))?;
    Ok(rows)
}

/// Full overwrite of all mutable fields for the given student.
///
/// `created_at` is preserved. Returns `Error::NotFound` when no row has
/// the given id.
pub fn update_student(
    conn: &Connection,
    id: StudentId,
    name: &str,
    age: i32,
    guardian: &str,
    contact: &str,
    fees_paid: f64,
) -> Result<()> {
    let n = conn
        .execute(
            "UPDATE students
             SET name = ?1, age = ?2, guardian = ?3, contact = ?4, fees_paid = ?5
             WHERE id = ?6",
            rusqlite::params![name, age, guardian, contact, fees_paid, id.as_i64()],
        )
        .map_err(|e| Error::database(e.to_string()))?;

    if n == 0 {
        return Err(Error::not_found("student", id));
    }
    Ok(())
}

/// Update only the fees-paid column for the given student.
pub fn update_fees_paid(conn: &Connection, id: StudentId, fees_paid: f64) -> Result<()> {
    let n = conn
        .execute(
            "UPDATE students SET fees_paid = ?1 WHERE id = ?2",
            rusqlite::params![fees_paid, id.as_i64()],
        )
        .map_err(|e| Error::database(e.to_string()))?;

    if n == 0 {
        return Err(Error::not_found("student", id));
    }
    Ok(())
}

/// Delete a student. Returns `false` when no row had the given id.
pub fn delete_student(conn: &Connection, id: StudentId) -> Result<bool> {
    let n = conn
        .execute("DELETE FROM students WHERE id = ?1", [id.as_i64()])
        .map_err(|e| Error::database(e.to_string()))?;
    Ok(n > 0)
}
