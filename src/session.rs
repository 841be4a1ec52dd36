//! Presentation-layer session state.
//!
//! A front-end binds its widgets to one [`Session`] per view: the
//! currently selected roster row plus the raw text of the form fields.
//! Parsing happens here so that unparsable input surfaces as
//! [`Error::Validation`] before anything reaches the store.

use sb_core::{Error, Result, StudentId};
use sb_db::models::Student;

/// Typed field values produced by a successful form parse.
#[derive(Debug, Clone, PartialEq)]
pub struct StudentFields {
    pub name: String,
    pub age: i32,
    pub guardian: String,
    pub contact: String,
    pub fees_paid: f64,
}

/// Raw form-field text as entered by the user.
#[derive(Debug, Clone, Default)]
pub struct StudentForm {
    pub name: String,
    pub age: String,
    pub guardian: String,
    pub contact: String,
    pub fees_paid: String,
}

impl StudentForm {
    /// Refill the form from a stored record (row-selection behavior).
    pub fn from_student(student: &Student) -> Self {
        Self {
            name: student.name.clone(),
            age: student.age.to_string(),
            guardian: student.guardian.clone(),
            contact: student.contact.clone(),
            fees_paid: student.fees_paid.to_string(),
        }
    }

    /// Parse the raw text into typed values.
    ///
    /// Age and fees must parse as numbers; text fields are taken as-is,
    /// blank included. Negative values pass through unchanged.
    pub fn parse(&self) -> Result<StudentFields> {
        let age = self
            .age
            .trim()
            .parse::<i32>()
            .map_err(|_| Error::validation(format!("age is not a whole number: '{}'", self.age)))?;
        let fees_paid = self.fees_paid.trim().parse::<f64>().map_err(|_| {
            Error::validation(format!("fees paid is not an amount: '{}'", self.fees_paid))
        })?;

        Ok(StudentFields {
            name: self.name.clone(),
            age,
            guardian: self.guardian.clone(),
            contact: self.contact.clone(),
            fees_paid,
        })
    }

    /// Reset all fields to empty.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Per-view session state: the selected record, if any.
///
/// Add, update, and delete flows clear the selection explicitly so the
/// form never points at a row that no longer matches it.
#[derive(Debug, Default)]
pub struct Session {
    selected: Option<StudentId>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the row the user clicked.
    pub fn select(&mut self, id: StudentId) {
        self.selected = Some(id);
    }

    /// The currently selected record identity, if any.
    pub fn selection(&self) -> Option<StudentId> {
        self.selected
    }

    /// Drop the selection (after add/update/delete).
    pub fn clear_selection(&mut self) {
        self.selected = None;
    }
}
