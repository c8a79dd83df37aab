// src/error.rs
use std::time::Duration;

use thiserror::Error;

/// Everything the pipeline can fail with. Nothing is retried internally.
#[derive(Error, Debug)]
pub enum Error {
    /// Bad credentials or token, or an unexpected landing page after login
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// A parent session needs exactly one active student
    #[error("No active student: {0}")]
    NoActiveSelection(String),

    /// The active student cannot change once records are cached
    #[error("Records already loaded for another student")]
    SelectionLocked,

    /// The page does not match the expected structure
    #[error("Extraction error: {0}")]
    Extraction(String),

    /// The loading indicator never cleared
    #[error("Timed out after {0:?} waiting for the page to load")]
    Timeout(Duration),

    /// Malformed or impossible day/month
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    /// The UI backend itself failed
    #[error("Driver error: {0}")]
    Driver(String),

    /// A progress sink asked to abort
    #[error("Progress sink aborted: {0}")]
    Progress(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn missing(what: &str) -> Self {
        Error::Extraction(format!("{what} not found"))
    }
}
