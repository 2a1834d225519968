//! Planner use-case service.
//!
//! # Responsibility
//! - Provide stable entry points for class and task use-cases.
//! - Derive progress reports from repository counts.
//! - Delegate persistence to repository implementations.
//!
//! # Invariants
//! - Service APIs never bypass repository validation/persistence contracts.
//! - Service layer remains storage-agnostic.

use crate::model::class::{Class, ClassId};
use crate::model::progress::{progress_percent, ProgressColor};
use crate::model::task::{Task, TaskId};
use crate::repo::class_repo::ClassRepository;
use crate::repo::task_repo::TaskRepository;
use crate::repo::{RepoError, RepoResult};
use chrono::NaiveDate;
use log::info;
use serde::{Deserialize, Serialize};

/// Completion percentage plus its display color tier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProgressReport {
    /// Percentage in `[0, 100]`; 0 for an empty collection.
    pub percent: f64,
    /// Color tier for the progress bar.
    pub color: ProgressColor,
}

impl ProgressReport {
    fn from_counts(completed: u32, total: u32) -> Self {
        let percent = progress_percent(completed, total);
        Self {
            percent,
            color: ProgressColor::for_percent(percent),
        }
    }
}

/// Use-case service wrapper over the class registry and task store.
pub struct PlannerService<C: ClassRepository, T: TaskRepository> {
    classes: C,
    tasks: T,
}

impl<C: ClassRepository, T: TaskRepository> PlannerService<C, T> {
    /// Creates a service using the provided repository implementations.
    pub fn new(classes: C, tasks: T) -> Self {
        Self { classes, tasks }
    }

    /// Registers a new class from raw user input.
    ///
    /// # Contract
    /// - Name is trimmed; an empty result is a validation error.
    /// - An exact-name collision is a `Duplicate` error.
    /// - Returns the created class with its generated stable id.
    pub fn add_class(&self, name: &str) -> RepoResult<Class> {
        let class = Class::new(name);
        self.classes.create_class(&class)?;
        info!(
            "event=class_add module=service status=ok class_id={}",
            class.id
        );
        Ok(class)
    }

    /// Returns all classes in registration order.
    pub fn list_classes(&self) -> RepoResult<Vec<Class>> {
        self.classes.list_classes()
    }

    /// Looks a class up by its exact display name.
    pub fn find_class_by_name(&self, name: &str) -> RepoResult<Option<Class>> {
        self.classes.find_class_by_name(name)
    }

    /// Removes a class and every task it owns. Removing an absent id is a
    /// successful no-op.
    pub fn delete_class(&self, id: ClassId) -> RepoResult<()> {
        self.classes.delete_class(id)?;
        info!("event=class_delete module=service status=ok class_id={id}");
        Ok(())
    }

    /// Adds a task to a class.
    ///
    /// # Contract
    /// - Text is trimmed; an empty result is a validation error.
    /// - The class must exist; otherwise `ClassNotFound`.
    /// - The created task starts with `completed = false`.
    pub fn add_task(
        &self,
        class_id: ClassId,
        text: &str,
        due_date: Option<NaiveDate>,
    ) -> RepoResult<Task> {
        let class = self
            .classes
            .find_class(class_id)?
            .ok_or(RepoError::ClassNotFound(class_id))?;

        let task = Task::new(class.id, class.name, text, due_date);
        self.tasks.create_task(&task)?;
        info!(
            "event=task_add module=service status=ok task_id={} class_id={}",
            task.id, class_id
        );
        Ok(task)
    }

    /// Returns one class's tasks sorted by due date, undated tasks last.
    pub fn tasks_for_class(&self, class_id: ClassId) -> RepoResult<Vec<Task>> {
        self.tasks.tasks_for_class(class_id)
    }

    /// Returns every class's tasks in one globally date-sorted view.
    pub fn all_tasks(&self) -> RepoResult<Vec<Task>> {
        self.tasks.all_tasks()
    }

    /// Flips completion on the task with this stable id.
    pub fn toggle_task(&self, id: TaskId) -> RepoResult<()> {
        self.tasks.toggle_task(id)?;
        info!("event=task_toggle module=service status=ok task_id={id}");
        Ok(())
    }

    /// Deletes the task with this stable id.
    pub fn delete_task(&self, id: TaskId) -> RepoResult<()> {
        self.tasks.delete_task(id)?;
        info!("event=task_delete module=service status=ok task_id={id}");
        Ok(())
    }

    /// Completion progress for one class. An empty class reports 0%.
    pub fn class_progress(&self, class_id: ClassId) -> RepoResult<ProgressReport> {
        let counts = self.tasks.class_counts(class_id)?;
        Ok(ProgressReport::from_counts(counts.completed, counts.total))
    }

    /// Completion progress across every class.
    pub fn overall_progress(&self) -> RepoResult<ProgressReport> {
        let counts = self.tasks.overall_counts()?;
        Ok(ProgressReport::from_counts(counts.completed, counts.total))
    }
}
