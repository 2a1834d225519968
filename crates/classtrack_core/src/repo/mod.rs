//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define use-case oriented data access contracts for classes and tasks.
//! - Isolate SQLite query details from service/business orchestration.
//!
//! # Invariants
//! - Repository writes must enforce model `validate()` before persistence.
//! - Repository APIs return semantic errors (`Duplicate`, `NotFound`) in
//!   addition to DB transport errors.
//! - Read paths reject corrupt persisted state instead of masking it.

use crate::db::DbError;
use crate::model::class::{ClassId, ClassValidationError};
use crate::model::task::{TaskId, TaskValidationError};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod class_repo;
pub mod task_repo;

pub type RepoResult<T> = Result<T, RepoError>;

/// Persistence and query error shared by class and task repositories.
#[derive(Debug)]
pub enum RepoError {
    ClassValidation(ClassValidationError),
    TaskValidation(TaskValidationError),
    /// A class with this exact name already exists.
    Duplicate(String),
    ClassNotFound(ClassId),
    TaskNotFound(TaskId),
    Db(DbError),
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ClassValidation(err) => write!(f, "{err}"),
            Self::TaskValidation(err) => write!(f, "{err}"),
            Self::Duplicate(name) => write!(f, "class already exists: {name}"),
            Self::ClassNotFound(id) => write!(f, "class not found: {id}"),
            Self::TaskNotFound(id) => write!(f, "task not found: {id}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::ClassValidation(err) => Some(err),
            Self::TaskValidation(err) => Some(err),
            Self::Db(err) => Some(err),
            Self::Duplicate(_)
            | Self::ClassNotFound(_)
            | Self::TaskNotFound(_)
            | Self::InvalidData(_) => None,
        }
    }
}

impl From<ClassValidationError> for RepoError {
    fn from(value: ClassValidationError) -> Self {
        Self::ClassValidation(value)
    }
}

impl From<TaskValidationError> for RepoError {
    fn from(value: TaskValidationError) -> Self {
        Self::TaskValidation(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}
