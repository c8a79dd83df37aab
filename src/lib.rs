// src/lib.rs
//! Absence and grade extraction for the edus.ro school portal.
//!
//! ```text
//! auth::authenticate(driver, &method, options)  → Session
//! session.select_student(Some("ana"))           (parent accounts)
//! session.get_data(progress)                    → Records (scanned once)
//! report::Action::Aggregates.run(records)       → Table → table::write_table
//! ```

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod config;
pub mod core;
pub mod error;

pub mod auth;
pub mod data;
pub mod date;
pub mod progress;
pub mod report;
pub mod session;
pub mod stats;
pub mod table;

pub use auth::{authenticate, authenticate_by_credentials, authenticate_by_token};
pub use error::{Error, Result};
pub use session::{Role, Session, Student, StudentMatch};
