//! JSON persistence for the project book.
//!
//! # Responsibility
//! - Mirror the on-disk document shape with serde schema structs.
//! - Convert schema structs into validated entities and back.
//! - Load and save the whole book as one file.
//!
//! # Invariants
//! - Loading never yields a partial model: any invalid record fails the
//!   whole load.
//! - Required fields report `missing` before `invalid`.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod json_adapted;
pub mod json_book;
mod json_storage;

pub use json_storage::JsonBookStorage;

pub type StorageResult<T> = Result<T, StorageError>;

/// Persisted data violates entity constraints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IllegalValueError {
    message: String,
}

impl IllegalValueError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Builds the `"{Entity}'s {Field} field is missing!"` error.
    pub fn missing_field(entity: &str, field: &str) -> Self {
        Self::new(format!("{entity}'s {field} field is missing!"))
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Display for IllegalValueError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl Error for IllegalValueError {}

/// Failure while reading or writing the data file.
#[derive(Debug)]
pub enum StorageError {
    Io(std::io::Error),
    Json(serde_json::Error),
    IllegalValue(IllegalValueError),
}

impl Display for StorageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "data file io failed: {err}"),
            Self::Json(err) => write!(f, "data file is not valid JSON: {err}"),
            Self::IllegalValue(err) => write!(f, "illegal values in data file: {err}"),
        }
    }
}

impl Error for StorageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Json(err) => Some(err),
            Self::IllegalValue(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for StorageError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

impl From<IllegalValueError> for StorageError {
    fn from(value: IllegalValueError) -> Self {
        Self::IllegalValue(value)
    }
}
