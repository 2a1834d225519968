//! Task domain model.
//!
//! # Responsibility
//! - Define the assignment record owned by exactly one class.
//! - Own the due-date display format and the "no due date" sentinel.
//!
//! # Invariants
//! - `id` is stable and never reused for another task.
//! - `due_date = None` is the only representation of a missing due date;
//!   unparseable input must be rejected at the edge, not stored.

use crate::model::class::ClassId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for a task.
///
/// Mutations address tasks by this id, never by list position, so a view can
/// be re-sorted between render and click without corrupting the target.
pub type TaskId = Uuid;

/// Display label used when a task has no due date.
pub const NO_DUE_DATE_LABEL: &str = "No due date";

/// A single assignment belonging to one class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Stable global ID used for toggle/delete addressing.
    pub id: TaskId,
    /// Owning class id. Deleting the class deletes this task.
    pub class_id: ClassId,
    /// Owning class name, denormalized for cross-class list views.
    pub class_name: String,
    /// Assignment description.
    pub text: String,
    /// Calendar due date; `None` means no due date was set.
    pub due_date: Option<NaiveDate>,
    /// Completion flag, `false` at creation.
    pub completed: bool,
}

/// Validation failure for task records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskValidationError {
    /// The trimmed description was empty.
    EmptyText,
}

impl Display for TaskValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyText => write!(f, "task text must not be empty"),
        }
    }
}

impl Error for TaskValidationError {}

impl Task {
    /// Creates a task with a generated stable ID and `completed = false`.
    /// The text is trimmed.
    pub fn new(
        class_id: ClassId,
        class_name: impl Into<String>,
        text: impl Into<String>,
        due_date: Option<NaiveDate>,
    ) -> Self {
        Self::with_id(Uuid::new_v4(), class_id, class_name, text, due_date)
    }

    /// Creates a task with a caller-provided stable ID.
    ///
    /// Used by read paths where identity already exists in storage.
    pub fn with_id(
        id: TaskId,
        class_id: ClassId,
        class_name: impl Into<String>,
        text: impl Into<String>,
        due_date: Option<NaiveDate>,
    ) -> Self {
        Self {
            id,
            class_id,
            class_name: class_name.into(),
            text: text.into().trim().to_string(),
            due_date,
            completed: false,
        }
    }

    /// Checks record-level invariants. Write paths must call this before
    /// persisting.
    pub fn validate(&self) -> Result<(), TaskValidationError> {
        if self.text.trim().is_empty() {
            return Err(TaskValidationError::EmptyText);
        }
        Ok(())
    }

    /// Human-readable due date, e.g. `"Jan 5, 2025"`, or
    /// [`NO_DUE_DATE_LABEL`] when unset.
    pub fn due_label(&self) -> String {
        match self.due_date {
            Some(date) => date.format("%b %-d, %Y").to_string(),
            None => NO_DUE_DATE_LABEL.to_string(),
        }
    }
}
