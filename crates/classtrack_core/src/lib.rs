//! Core domain logic for ClassTrack, a per-class assignment tracker.
//! This crate is the single source of truth for business invariants.

pub mod auth;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use auth::{AuthError, SessionGate};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::class::{Class, ClassId, ClassValidationError};
pub use model::progress::{progress_percent, ProgressColor};
pub use model::task::{Task, TaskId, TaskValidationError, NO_DUE_DATE_LABEL};
pub use repo::class_repo::{ClassRepository, SqliteClassRepository};
pub use repo::task_repo::{SqliteTaskRepository, TaskCounts, TaskRepository};
pub use repo::{RepoError, RepoResult};
pub use service::planner_service::{PlannerService, ProgressReport};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
