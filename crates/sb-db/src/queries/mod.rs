//! Database query modules.
//!
//! This module organizes all database operations into logical groups:
//! - students: Student record CRUD
//! - settings: Scalar admin settings, including the tuition fee

pub mod settings;
pub mod students;
