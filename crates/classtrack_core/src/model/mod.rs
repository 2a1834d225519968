//! Domain model for classes, tasks and progress rollups.
//!
//! # Responsibility
//! - Define canonical data structures used by core business logic.
//! - Keep validation rules next to the data they protect.
//!
//! # Invariants
//! - Every class and task is identified by a stable generated UUID.
//! - Class names and task text are trimmed before validation.

pub mod class;
pub mod progress;
pub mod task;
