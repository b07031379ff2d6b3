use pretty_assertions::assert_eq;
use projectboard::domain::task::{TaskFilter, TaskStatus};
use projectboard::services::{BoardError, ProjectService, TaskService};
use projectboard::test_helpers::TestContext;
use serde_json::json;
use std::sync::Arc;

#[test]
fn test_added_task_lands_in_todo_with_defaults() {
    let mut ctx = TestContext::new_for_test();
    let today = ctx.today;
    let before = ctx.repository.tasks.len();

    let task = TaskService::new(&mut ctx.repository)
        .with_today(today)
        .add("  Write release notes  ", "2")
        .unwrap();

    assert_eq!(ctx.repository.tasks.len(), before + 1);
    assert_eq!(task.title, "Write release notes");
    assert_eq!(task.status, TaskStatus::Todo);
    assert_eq!(task.due_date, today + chrono::Duration::days(7));
    assert!(task.id.starts_with("task-"));
    assert_eq!(ctx.repository.tasks_for_project("2").len(), 3);
}

#[test]
fn test_blank_title_leaves_store_untouched() {
    let mut ctx = TestContext::new_for_test();
    let before = ctx.repository.tasks.to_vec();

    let result = TaskService::new(&mut ctx.repository).add("   ", "1");

    assert!(matches!(result, Err(BoardError::Validation { .. })));
    assert_eq!(ctx.repository.tasks.to_vec(), before);
}

#[test]
fn test_status_change_keeps_other_records_shared() {
    let mut ctx = TestContext::new_for_test();
    let before: Vec<_> = ctx.repository.tasks.iter().cloned().collect();

    TaskService::new(&mut ctx.repository)
        .update_status("3", TaskStatus::Completed)
        .unwrap();

    for (old, new) in before.iter().zip(ctx.repository.tasks.iter()) {
        if old.id == "3" {
            assert!(!Arc::ptr_eq(old, new));
            assert_eq!(new.status, TaskStatus::Completed);
            assert_eq!(new.title, old.title);
            assert_eq!(new.due_date, old.due_date);
        } else {
            assert!(Arc::ptr_eq(old, new), "task {} was rebuilt", old.id);
        }
    }
}

#[test]
fn test_delete_removes_one_and_keeps_order() {
    let mut ctx = TestContext::new_for_test();

    TaskService::new(&mut ctx.repository).remove("4").unwrap();

    let ids: Vec<_> = ctx.repository.tasks.values().map(|t| t.id.clone()).collect();
    assert_eq!(ids, vec!["1", "2", "3", "5", "6", "7"]);
}

#[test]
fn test_filter_and_json_patch_work_together() {
    let mut ctx = TestContext::new_for_test();

    TaskService::new(&mut ctx.repository)
        .patch_json("5", json!({ "status": "in-progress", "priority": "low" }))
        .unwrap();

    let in_progress = TaskService::list(&ctx.repository, TaskFilter::Status(TaskStatus::InProgress));
    let ids: Vec<_> = in_progress.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, vec!["2", "4", "5"]);
    assert_eq!(TaskService::list(&ctx.repository, TaskFilter::All).len(), 7);

    let rejected = TaskService::new(&mut ctx.repository).patch_json("5", json!({ "owner": "someone" }));
    assert!(matches!(rejected, Err(BoardError::InvalidPatch { .. })));
}

#[test]
fn test_removed_project_leaves_orphaned_tasks() {
    let mut ctx = TestContext::new_for_test();

    ProjectService::new(&mut ctx.repository).remove("2").unwrap();

    let orphans: Vec<_> = ctx.repository.orphaned_tasks().iter().map(|t| t.id.clone()).collect();
    assert_eq!(orphans, vec!["4", "5"]);

    let result = TaskService::new(&mut ctx.repository).add("Ship it", "2");
    assert!(matches!(result, Err(BoardError::DanglingReference { .. })));
}

#[test]
fn test_project_edits_are_visible_through_the_shared_store() {
    let mut ctx = TestContext::new_for_test();

    ProjectService::new(&mut ctx.repository)
        .patch_json("1", json!({ "name": "Website Relaunch", "progress": 80 }))
        .unwrap();

    assert_eq!(ctx.repository.project_name("1"), Some("Website Relaunch"));
    assert_eq!(ctx.repository.projects.get("1").map(|p| p.progress), Some(80));

    let too_far = ProjectService::new(&mut ctx.repository).patch_json("1", json!({ "progress": 140 }));
    assert!(too_far.is_err());
    assert_eq!(ctx.repository.projects.get("1").map(|p| p.progress), Some(80));
}
