//! sproutbook: student roster and fee tracking core for small preschools.
//!
//! This crate is the in-process boundary a desktop form front-end calls
//! into. [`RecordStore`] owns the SQLite-backed roster and the tuition-fee
//! setting; [`session`] carries the per-view state (current selection and
//! raw form fields) that the widgets bind to.
//!
//! # Example
//!
//! ```no_run
//! use sproutbook::RecordStore;
//!
//! let store = RecordStore::open("sproutbook.db").unwrap();
//! store.add_student("Alice", 4, "Bob", "555-1234", 100.0).unwrap();
//! for entry in store.roster().unwrap() {
//!     println!("{} owes {}", entry.name, entry.balance);
//! }
//! ```

pub mod session;
pub mod store;

pub use sb_core::{config::Config, Error, Result, StudentId};
pub use sb_db::models::Student;
pub use session::{Session, StudentFields, StudentForm};
pub use store::{RecordStore, RosterEntry};
