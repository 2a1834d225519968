use chrono::NaiveDate;
use classtrack_core::db::open_db_in_memory;
use classtrack_core::{
    PlannerService, RepoError, SqliteClassRepository, SqliteTaskRepository, NO_DUE_DATE_LABEL,
};
use rusqlite::Connection;
use uuid::Uuid;

fn service(conn: &Connection) -> PlannerService<SqliteClassRepository<'_>, SqliteTaskRepository<'_>>
{
    PlannerService::new(
        SqliteClassRepository::new(conn),
        SqliteTaskRepository::new(conn),
    )
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn add_task_roundtrip() {
    let conn = open_db_in_memory().unwrap();
    let service = service(&conn);

    let class = service.add_class("Math").unwrap();
    let task = service
        .add_task(class.id, "read chapter 4", Some(date(2025, 1, 5)))
        .unwrap();

    let tasks = service.tasks_for_class(class.id).unwrap();
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0].id, task.id);
    assert_eq!(tasks[0].class_id, class.id);
    assert_eq!(tasks[0].class_name, "Math");
    assert_eq!(tasks[0].text, "read chapter 4");
    assert_eq!(tasks[0].due_date, Some(date(2025, 1, 5)));
    assert!(!tasks[0].completed);
    assert_eq!(tasks[0].due_label(), "Jan 5, 2025");
}

#[test]
fn tasks_sort_ascending_by_due_date() {
    let conn = open_db_in_memory().unwrap();
    let service = service(&conn);

    let class = service.add_class("Math").unwrap();
    service
        .add_task(class.id, "A", Some(date(2025, 3, 1)))
        .unwrap();
    service
        .add_task(class.id, "B", Some(date(2025, 1, 1)))
        .unwrap();

    let texts: Vec<String> = service
        .tasks_for_class(class.id)
        .unwrap()
        .into_iter()
        .map(|t| t.text)
        .collect();
    assert_eq!(texts, ["B", "A"]);
}

#[test]
fn undated_tasks_sort_last_and_keep_insertion_order() {
    let conn = open_db_in_memory().unwrap();
    let service = service(&conn);

    let class = service.add_class("Math").unwrap();
    service.add_task(class.id, "no date 1", None).unwrap();
    service
        .add_task(class.id, "dated", Some(date(2025, 6, 30)))
        .unwrap();
    service.add_task(class.id, "no date 2", None).unwrap();

    let tasks = service.tasks_for_class(class.id).unwrap();
    let texts: Vec<&str> = tasks.iter().map(|t| t.text.as_str()).collect();
    assert_eq!(texts, ["dated", "no date 1", "no date 2"]);
    assert_eq!(tasks[1].due_label(), NO_DUE_DATE_LABEL);
}

#[test]
fn equal_dates_keep_insertion_order() {
    let conn = open_db_in_memory().unwrap();
    let service = service(&conn);

    let class = service.add_class("Math").unwrap();
    let due = Some(date(2025, 2, 14));
    service.add_task(class.id, "first", due).unwrap();
    service.add_task(class.id, "second", due).unwrap();

    let texts: Vec<String> = service
        .tasks_for_class(class.id)
        .unwrap()
        .into_iter()
        .map(|t| t.text)
        .collect();
    assert_eq!(texts, ["first", "second"]);
}

#[test]
fn blank_text_is_a_validation_error() {
    let conn = open_db_in_memory().unwrap();
    let service = service(&conn);

    let class = service.add_class("Math").unwrap();
    let err = service.add_task(class.id, "   ", None).unwrap_err();
    assert!(matches!(err, RepoError::TaskValidation(_)));
    assert!(service.tasks_for_class(class.id).unwrap().is_empty());
}

#[test]
fn add_task_to_unknown_class_is_not_found() {
    let conn = open_db_in_memory().unwrap();
    let service = service(&conn);

    let missing = Uuid::new_v4();
    let err = service.add_task(missing, "orphan", None).unwrap_err();
    assert!(matches!(err, RepoError::ClassNotFound(id) if id == missing));
}

#[test]
fn toggle_flips_completion_at_unchanged_sorted_position() {
    let conn = open_db_in_memory().unwrap();
    let service = service(&conn);

    let class = service.add_class("Math").unwrap();
    service
        .add_task(class.id, "early", Some(date(2025, 1, 1)))
        .unwrap();
    let target = service
        .add_task(class.id, "late", Some(date(2025, 9, 1)))
        .unwrap();

    service.toggle_task(target.id).unwrap();

    let tasks = service.tasks_for_class(class.id).unwrap();
    assert_eq!(tasks[1].id, target.id);
    assert!(tasks[1].completed);
    assert!(!tasks[0].completed);

    // A second toggle flips it back.
    service.toggle_task(target.id).unwrap();
    let tasks = service.tasks_for_class(class.id).unwrap();
    assert!(!tasks[1].completed);
}

#[test]
fn toggle_unknown_id_is_not_found_and_changes_nothing() {
    let conn = open_db_in_memory().unwrap();
    let service = service(&conn);

    let class = service.add_class("Math").unwrap();
    service.add_task(class.id, "homework", None).unwrap();

    let missing = Uuid::new_v4();
    let err = service.toggle_task(missing).unwrap_err();
    assert!(matches!(err, RepoError::TaskNotFound(id) if id == missing));

    let tasks = service.tasks_for_class(class.id).unwrap();
    assert_eq!(tasks.len(), 1);
    assert!(!tasks[0].completed);
}

#[test]
fn delete_removes_only_the_addressed_task() {
    let conn = open_db_in_memory().unwrap();
    let service = service(&conn);

    let class = service.add_class("Math").unwrap();
    let keep = service
        .add_task(class.id, "keep", Some(date(2025, 1, 1)))
        .unwrap();
    let drop = service
        .add_task(class.id, "drop", Some(date(2025, 2, 1)))
        .unwrap();

    service.delete_task(drop.id).unwrap();

    let tasks = service.tasks_for_class(class.id).unwrap();
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0].id, keep.id);
}

#[test]
fn delete_unknown_id_is_not_found_and_changes_nothing() {
    let conn = open_db_in_memory().unwrap();
    let service = service(&conn);

    let class = service.add_class("Math").unwrap();
    service.add_task(class.id, "homework", None).unwrap();

    let err = service.delete_task(Uuid::new_v4()).unwrap_err();
    assert!(matches!(err, RepoError::TaskNotFound(_)));
    assert_eq!(service.tasks_for_class(class.id).unwrap().len(), 1);
}

#[test]
fn all_tasks_merges_classes_globally_sorted() {
    let conn = open_db_in_memory().unwrap();
    let service = service(&conn);

    let math = service.add_class("Math").unwrap();
    let art = service.add_class("Art").unwrap();
    service
        .add_task(math.id, "proofs", Some(date(2025, 5, 1)))
        .unwrap();
    service
        .add_task(art.id, "sketch", Some(date(2025, 4, 1)))
        .unwrap();
    service.add_task(art.id, "no deadline", None).unwrap();

    let all = service.all_tasks().unwrap();
    let texts: Vec<&str> = all.iter().map(|t| t.text.as_str()).collect();
    assert_eq!(texts, ["sketch", "proofs", "no deadline"]);
    assert_eq!(all[0].class_name, "Art");
    assert_eq!(all[1].class_name, "Math");
}

#[test]
fn all_tasks_breaks_date_ties_by_registry_order() {
    let conn = open_db_in_memory().unwrap();
    let service = service(&conn);

    // Registered second, mutated first: registry order must still win ties.
    let history = service.add_class("History").unwrap();
    let art = service.add_class("Art").unwrap();
    let due = Some(date(2025, 7, 1));
    service.add_task(art.id, "from art", due).unwrap();
    service.add_task(history.id, "from history", due).unwrap();

    let texts: Vec<String> = service
        .all_tasks()
        .unwrap()
        .into_iter()
        .map(|t| t.text)
        .collect();
    assert_eq!(texts, ["from history", "from art"]);
}

#[test]
fn task_serializes_with_stable_field_names() {
    let conn = open_db_in_memory().unwrap();
    let service = service(&conn);

    let class = service.add_class("Math").unwrap();
    let task = service
        .add_task(class.id, "quiz", Some(date(2025, 1, 5)))
        .unwrap();

    let json = serde_json::to_value(&task).unwrap();
    assert_eq!(json["text"], "quiz");
    assert_eq!(json["class_name"], "Math");
    assert_eq!(json["completed"], false);
    assert_eq!(json["due_date"], "2025-01-05");
}
