//! The record store: durable CRUD over students plus the tuition setting.
//!
//! Every operation is a single SQL statement executed on a connection
//! scoped to the call; the pool handle is returned on drop on every exit
//! path. The derived balance is computed fresh on each [`RecordStore::roster`]
//! call and never stored.

use sb_core::{money, Result, StudentId};
use sb_db::models::Student;
use sb_db::pool::{self, DbPool};
use sb_db::queries::{settings, students};

/// One roster row as presented to the user: the stored fields plus the
/// read-time balance against the current tuition fee.
#[derive(Debug, Clone, PartialEq)]
pub struct RosterEntry {
    pub id: StudentId,
    pub name: String,
    pub age: i32,
    pub guardian: String,
    pub contact: String,
    pub fees_paid: f64,
    pub balance: f64,
}

impl RosterEntry {
    fn new(student: Student, tuition_fee: f64) -> Self {
        Self {
            id: student.id,
            name: student.name,
            age: student.age,
            guardian: student.guardian,
            contact: student.contact,
            fees_paid: student.fees_paid,
            balance: money::balance(tuition_fee, student.fees_paid),
        }
    }
}

/// SQLite-backed store for student records and the tuition-fee setting.
pub struct RecordStore {
    pool: DbPool,
}

impl RecordStore {
    /// Open (creating if necessary) the database at `db_path` and run
    /// pending migrations. Idempotent across startups.
    pub fn open(db_path: &str) -> Result<Self> {
        let pool = pool::init_pool(db_path)?;
        tracing::info!("Opened record store at {db_path}");
        Ok(Self { pool })
    }

    /// Open a store backed by a fresh in-memory database.
    pub fn open_in_memory() -> Result<Self> {
        let pool = pool::init_memory_pool()?;
        Ok(Self { pool })
    }

    /// Insert a new student and return the stored record, including its
    /// freshly assigned identity.
    pub fn add_student(
        &self,
        name: &str,
        age: i32,
        guardian: &str,
        contact: &str,
        fees_paid: f64,
    ) -> Result<Student> {
        let conn = pool::get_conn(&self.pool)?;
        let student = students::create_student(&conn, name, age, guardian, contact, fees_paid)?;
        tracing::debug!("Added student {} ({})", student.id, student.name);
        Ok(student)
    }

    /// Look up a single student.
    pub fn get_student(&self, id: StudentId) -> Result<Option<Student>> {
        let conn = pool::get_conn(&self.pool)?;
        students::get_student(&conn, id)
    }

    /// All students in storage order, each augmented with the balance
    /// against the tuition fee current at call time.
    pub fn roster(&self) -> Result<Vec<RosterEntry>> {
        let conn = pool::get_conn(&self.pool)?;
        let tuition_fee = settings::get_tuition_fee(&conn)?;
        let entries = students::list_students(&conn)?
            .into_iter()
            .map(|s| RosterEntry::new(s, tuition_fee))
            .collect();
        Ok(entries)
    }

    /// Full overwrite of all mutable fields for the given student.
    ///
    /// Returns [`sb_core::Error::NotFound`] when the id does not exist.
    pub fn update_student(
        &self,
        id: StudentId,
        name: &str,
        age: i32,
        guardian: &str,
        contact: &str,
        fees_paid: f64,
    ) -> Result<()> {
        let conn = pool::get_conn(&self.pool)?;
        students::update_student(&conn, id, name, age, guardian, contact, fees_paid)?;
        tracing::debug!("Updated student {id}");
        Ok(())
    }

    /// Update only the fees-paid amount for the given student.
    pub fn update_fees_paid(&self, id: StudentId, fees_paid: f64) -> Result<()> {
        let conn = pool::get_conn(&self.pool)?;
        students::update_fees_paid(&conn, id, fees_paid)?;
        tracing::debug!("Updated fees paid for student {id}");
        Ok(())
    }

    /// Remove a student. `Ok(false)` when the id was already absent.
    pub fn delete_student(&self, id: StudentId) -> Result<bool> {
        let conn = pool::get_conn(&self.pool)?;
        let deleted = students::delete_student(&conn, id)?;
        tracing::debug!("Deleted student {id}: {deleted}");
        Ok(deleted)
    }

    /// Current tuition fee (seeded default if the settings row is missing).
    pub fn tuition_fee(&self) -> Result<f64> {
        let conn = pool::get_conn(&self.pool)?;
        settings::get_tuition_fee(&conn)
    }

    /// Overwrite the tuition fee.
    pub fn set_tuition_fee(&self, value: f64) -> Result<()> {
        let conn = pool::get_conn(&self.pool)?;
        settings::set_tuition_fee(&conn, value)?;
        tracing::debug!("Set tuition fee to {value}");
        Ok(())
    }
}
