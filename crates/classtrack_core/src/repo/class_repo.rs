//! Class registry contracts and SQLite implementation.
//!
//! # Responsibility
//! - Provide stable CRUD APIs over the `classes` registry.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - `list_classes` returns insertion order.
//! - Name uniqueness is a case-sensitive exact match.
//! - Deleting a class removes its task collection in the same statement
//!   (FK cascade), so the registry and task storage can never disagree.

use crate::model::class::{Class, ClassId};
use crate::repo::{RepoError, RepoResult};
use rusqlite::{params, Connection, OptionalExtension, Row};
use uuid::Uuid;

const CLASS_SELECT_SQL: &str = "SELECT uuid, name FROM classes";

/// Repository interface for the class registry.
pub trait ClassRepository {
    /// Persists one class and returns its stable id.
    fn create_class(&self, class: &Class) -> RepoResult<ClassId>;
    /// Returns all classes in insertion order.
    fn list_classes(&self) -> RepoResult<Vec<Class>>;
    /// Looks one class up by id.
    fn find_class(&self, id: ClassId) -> RepoResult<Option<Class>>;
    /// Looks one class up by exact name.
    fn find_class_by_name(&self, name: &str) -> RepoResult<Option<Class>>;
    /// Removes a class and its tasks. Removing an absent id is a no-op.
    fn delete_class(&self, id: ClassId) -> RepoResult<()>;
}

/// SQLite-backed class registry.
pub struct SqliteClassRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteClassRepository<'conn> {
    /// Constructs a repository from a migrated/ready connection.
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl ClassRepository for SqliteClassRepository<'_> {
    fn create_class(&self, class: &Class) -> RepoResult<ClassId> {
        class.validate()?;

        if self.find_class_by_name(&class.name)?.is_some() {
            return Err(RepoError::Duplicate(class.name.clone()));
        }

        self.conn.execute(
            "INSERT INTO classes (uuid, name) VALUES (?1, ?2);",
            params![class.id.to_string(), class.name.as_str()],
        )?;

        Ok(class.id)
    }

    fn list_classes(&self) -> RepoResult<Vec<Class>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{CLASS_SELECT_SQL} ORDER BY rowid ASC;"))?;
        let mut rows = stmt.query([])?;
        let mut classes = Vec::new();

        while let Some(row) = rows.next()? {
            classes.push(parse_class_row(row)?);
        }

        Ok(classes)
    }

    fn find_class(&self, id: ClassId) -> RepoResult<Option<Class>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{CLASS_SELECT_SQL} WHERE uuid = ?1;"))?;
        let mut rows = stmt.query([id.to_string()])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_class_row(row)?));
        }
        Ok(None)
    }

    fn find_class_by_name(&self, name: &str) -> RepoResult<Option<Class>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{CLASS_SELECT_SQL} WHERE name = ?1;"))?;
        let found = stmt
            .query_row([name], |row| {
                let uuid: String = row.get("uuid")?;
                let name: String = row.get("name")?;
                Ok((uuid, name))
            })
            .optional()?;

        match found {
            Some((uuid_text, name)) => {
                let id = parse_uuid(&uuid_text, "classes.uuid")?;
                Ok(Some(Class::with_id(id, name)))
            }
            None => Ok(None),
        }
    }

    fn delete_class(&self, id: ClassId) -> RepoResult<()> {
        // Cascade removes the task collection in the same statement.
        // Zero affected rows means the class was already gone, which is fine.
        self.conn.execute(
            "DELETE FROM classes WHERE uuid = ?1;",
            [id.to_string()],
        )?;
        Ok(())
    }
}

fn parse_class_row(row: &Row<'_>) -> RepoResult<Class> {
    let uuid_text: String = row.get("uuid")?;
    let id = parse_uuid(&uuid_text, "classes.uuid")?;
    let class = Class::with_id(id, row.get::<_, String>("name")?);
    class.validate()?;
    Ok(class)
}

pub(crate) fn parse_uuid(value: &str, column: &str) -> RepoResult<Uuid> {
    Uuid::parse_str(value)
        .map_err(|_| RepoError::InvalidData(format!("invalid uuid value `{value}` in {column}")))
}
