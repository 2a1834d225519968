//! Class domain model.
//!
//! # Responsibility
//! - Define the class record that owns a collection of tasks.
//! - Validate class names before persistence.
//!
//! # Invariants
//! - `id` is stable and never reused for another class.
//! - `name` is stored trimmed; uniqueness is enforced by the repository
//!   (case-sensitive exact match).

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for a class.
///
/// Classes are keyed by a generated id rather than their display name, so a
/// rename never moves stored tasks and a name can never collide with a
/// reserved storage key.
pub type ClassId = Uuid;

/// A named bucket of tasks (a school class, a project, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Class {
    /// Stable global ID used for task ownership and deletion.
    pub id: ClassId,
    /// Display name, unique across the registry.
    pub name: String,
}

/// Validation failure for class records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassValidationError {
    /// The trimmed name was empty.
    EmptyName,
}

impl Display for ClassValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "class name must not be empty"),
        }
    }
}

impl Error for ClassValidationError {}

impl Class {
    /// Creates a class with a generated stable ID. The name is trimmed.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4(), name)
    }

    /// Creates a class with a caller-provided stable ID.
    ///
    /// Used by read paths where identity already exists in storage.
    pub fn with_id(id: ClassId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into().trim().to_string(),
        }
    }

    /// Checks record-level invariants. Write paths must call this before
    /// persisting.
    pub fn validate(&self) -> Result<(), ClassValidationError> {
        if self.name.trim().is_empty() {
            return Err(ClassValidationError::EmptyName);
        }
        Ok(())
    }
}
