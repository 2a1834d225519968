//! Task store contracts and SQLite implementation.
//!
//! # Responsibility
//! - Provide stable CRUD and query APIs over per-class task storage.
//! - Own the due-date ordering policy for single-class and cross-class views.
//!
//! # Invariants
//! - Write paths must call `Task::validate()` before SQL mutations.
//! - Ordering policy: ascending by due date, undated tasks last, ties broken
//!   by insertion order (and by registry order first in cross-class views).
//! - Read paths must reject invalid persisted state instead of masking it.

use crate::model::class::ClassId;
use crate::model::task::{Task, TaskId};
use crate::repo::class_repo::parse_uuid;
use crate::repo::{RepoError, RepoResult};
use chrono::NaiveDate;
use rusqlite::{params, Connection, Row};

const DUE_DATE_FORMAT: &str = "%Y-%m-%d";

const TASK_SELECT_SQL: &str = "SELECT
    t.uuid,
    t.class_uuid,
    c.name AS class_name,
    t.content,
    t.due_date,
    t.completed
FROM tasks t
JOIN classes c ON c.uuid = t.class_uuid";

// `due_date IS NULL` sorts 0 (dated) before 1 (undated); ISO text compares
// chronologically.
const CLASS_ORDER_SQL: &str = "ORDER BY t.due_date IS NULL, t.due_date ASC, t.rowid ASC";
const GLOBAL_ORDER_SQL: &str =
    "ORDER BY t.due_date IS NULL, t.due_date ASC, c.rowid ASC, t.rowid ASC";

/// Completed/total counts backing a progress percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TaskCounts {
    pub completed: u32,
    pub total: u32,
}

/// Repository interface for task CRUD and sorted views.
pub trait TaskRepository {
    /// Persists one task and returns its stable id.
    fn create_task(&self, task: &Task) -> RepoResult<TaskId>;
    /// Returns one class's tasks under the due-date ordering policy.
    fn tasks_for_class(&self, class_id: ClassId) -> RepoResult<Vec<Task>>;
    /// Returns every class's tasks merged under the same ordering policy.
    fn all_tasks(&self) -> RepoResult<Vec<Task>>;
    /// Flips the completion flag of the task with this id.
    fn toggle_task(&self, id: TaskId) -> RepoResult<()>;
    /// Removes the task with this id.
    fn delete_task(&self, id: TaskId) -> RepoResult<()>;
    /// Completed/total counts for one class.
    fn class_counts(&self, class_id: ClassId) -> RepoResult<TaskCounts>;
    /// Completed/total counts across all classes.
    fn overall_counts(&self) -> RepoResult<TaskCounts>;
}

/// SQLite-backed task store.
pub struct SqliteTaskRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteTaskRepository<'conn> {
    /// Constructs a repository from a migrated/ready connection.
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl TaskRepository for SqliteTaskRepository<'_> {
    fn create_task(&self, task: &Task) -> RepoResult<TaskId> {
        task.validate()?;

        let class_exists: i64 = self.conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM classes WHERE uuid = ?1);",
            [task.class_id.to_string()],
            |row| row.get(0),
        )?;
        if class_exists == 0 {
            return Err(RepoError::ClassNotFound(task.class_id));
        }

        self.conn.execute(
            "INSERT INTO tasks (uuid, class_uuid, content, due_date, completed)
             VALUES (?1, ?2, ?3, ?4, ?5);",
            params![
                task.id.to_string(),
                task.class_id.to_string(),
                task.text.as_str(),
                task.due_date.map(|d| d.format(DUE_DATE_FORMAT).to_string()),
                i64::from(task.completed),
            ],
        )?;

        Ok(task.id)
    }

    fn tasks_for_class(&self, class_id: ClassId) -> RepoResult<Vec<Task>> {
        let mut stmt = self.conn.prepare(&format!(
            "{TASK_SELECT_SQL} WHERE t.class_uuid = ?1 {CLASS_ORDER_SQL};"
        ))?;
        let mut rows = stmt.query([class_id.to_string()])?;
        let mut tasks = Vec::new();

        while let Some(row) = rows.next()? {
            tasks.push(parse_task_row(row)?);
        }

        Ok(tasks)
    }

    fn all_tasks(&self) -> RepoResult<Vec<Task>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{TASK_SELECT_SQL} {GLOBAL_ORDER_SQL};"))?;
        let mut rows = stmt.query([])?;
        let mut tasks = Vec::new();

        while let Some(row) = rows.next()? {
            tasks.push(parse_task_row(row)?);
        }

        Ok(tasks)
    }

    fn toggle_task(&self, id: TaskId) -> RepoResult<()> {
        let changed = self.conn.execute(
            "UPDATE tasks SET completed = 1 - completed WHERE uuid = ?1;",
            [id.to_string()],
        )?;

        if changed == 0 {
            return Err(RepoError::TaskNotFound(id));
        }

        Ok(())
    }

    fn delete_task(&self, id: TaskId) -> RepoResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM tasks WHERE uuid = ?1;", [id.to_string()])?;

        if changed == 0 {
            return Err(RepoError::TaskNotFound(id));
        }

        Ok(())
    }

    fn class_counts(&self, class_id: ClassId) -> RepoResult<TaskCounts> {
        let counts = self.conn.query_row(
            "SELECT COALESCE(SUM(completed), 0), COUNT(*)
             FROM tasks WHERE class_uuid = ?1;",
            [class_id.to_string()],
            |row| {
                Ok(TaskCounts {
                    completed: row.get(0)?,
                    total: row.get(1)?,
                })
            },
        )?;
        Ok(counts)
    }

    fn overall_counts(&self) -> RepoResult<TaskCounts> {
        let counts = self.conn.query_row(
            "SELECT COALESCE(SUM(completed), 0), COUNT(*) FROM tasks;",
            [],
            |row| {
                Ok(TaskCounts {
                    completed: row.get(0)?,
                    total: row.get(1)?,
                })
            },
        )?;
        Ok(counts)
    }
}

fn parse_task_row(row: &Row<'_>) -> RepoResult<Task> {
    let uuid_text: String = row.get("uuid")?;
    let id = parse_uuid(&uuid_text, "tasks.uuid")?;

    let class_uuid_text: String = row.get("class_uuid")?;
    let class_id = parse_uuid(&class_uuid_text, "tasks.class_uuid")?;

    let due_date = match row.get::<_, Option<String>>("due_date")? {
        Some(value) => Some(
            NaiveDate::parse_from_str(&value, DUE_DATE_FORMAT).map_err(|_| {
                RepoError::InvalidData(format!(
                    "invalid due date `{value}` in tasks.due_date"
                ))
            })?,
        ),
        None => None,
    };

    let completed = match row.get::<_, i64>("completed")? {
        0 => false,
        1 => true,
        other => {
            return Err(RepoError::InvalidData(format!(
                "invalid completed value `{other}` in tasks.completed"
            )));
        }
    };

    let mut task = Task::with_id(
        id,
        class_id,
        row.get::<_, String>("class_name")?,
        row.get::<_, String>("content")?,
        due_date,
    );
    task.completed = completed;
    task.validate()?;
    Ok(task)
}
