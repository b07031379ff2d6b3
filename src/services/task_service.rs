use chrono::{Local, NaiveDate};
use std::sync::Arc;

use super::error_handling::{BoardError, BoardResult, LogHelper, LogRejection};
use super::validation::InputValidator;
use crate::domain::Entity;
use crate::domain::task::{Task, TaskFilter, TaskPatch, TaskStatus};
use crate::repository::Repository;

pub struct TaskService<'a> {
    repository: &'a mut Repository,
    today: NaiveDate,
}

impl<'a> TaskService<'a> {
    pub fn new(repository: &'a mut Repository) -> Self {
        Self {
            repository,
            today: Local::now().date_naive(),
        }
    }

    /// Pins "today", which drives the default due date of new tasks.
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = today;
        self
    }

    pub fn add(&mut self, title: &str, project_id: &str) -> BoardResult<Arc<Task>> {
        self.try_add(title, project_id).log_rejection(Task::KIND, "add")
    }

    fn try_add(&mut self, title: &str, project_id: &str) -> BoardResult<Arc<Task>> {
        let title = InputValidator::validate_required("title", title, "Task title cannot be empty")?;
        self.ensure_project(project_id)?;

        let id = self.repository.tasks.next_id();
        let task = self
            .repository
            .tasks
            .insert(Task::new(id, project_id.to_string(), title, self.today));
        LogHelper::log_mutation(Task::KIND, "add", &task.id);
        Ok(task)
    }

    pub fn update_status(&mut self, id: &str, status: TaskStatus) -> BoardResult<Arc<Task>> {
        self.patch(id, &TaskPatch::status(status))
    }

    pub fn patch(&mut self, id: &str, patch: &TaskPatch) -> BoardResult<Arc<Task>> {
        self.try_patch(id, patch).log_rejection(Task::KIND, "patch")
    }

    fn try_patch(&mut self, id: &str, patch: &TaskPatch) -> BoardResult<Arc<Task>> {
        if !self.repository.tasks.contains(id) {
            return Err(BoardError::not_found(Task::KIND, id));
        }

        let mut patch = patch.clone();
        if let Some(title) = &patch.title {
            patch.title = Some(InputValidator::validate_required("title", title, "Task title cannot be empty")?);
        }
        if let Some(description) = &patch.description {
            patch.description = Some(InputValidator::validate_description(description)?);
        }
        if let Some(project_id) = &patch.project_id {
            self.ensure_project(project_id)?;
        }

        let task = self
            .repository
            .tasks
            .update(id, |task| patch.apply_to(task))
            .ok_or_else(|| BoardError::not_found(Task::KIND, id))?;
        LogHelper::log_mutation(Task::KIND, "patch", id);
        Ok(task)
    }

    /// Applies a JSON object of field assignments, e.g. `{"status": "completed"}`.
    pub fn patch_json(&mut self, id: &str, fields: serde_json::Value) -> BoardResult<Arc<Task>> {
        let patch = TaskPatch::from_json(fields)
            .map_err(|e| BoardError::InvalidPatch {
                kind: Task::KIND,
                reason: e.to_string(),
            })
            .log_rejection(Task::KIND, "patch")?;
        self.patch(id, &patch)
    }

    pub fn remove(&mut self, id: &str) -> BoardResult<Arc<Task>> {
        let removed = self
            .repository
            .tasks
            .remove(id)
            .ok_or_else(|| BoardError::not_found(Task::KIND, id))
            .log_rejection(Task::KIND, "remove")?;
        LogHelper::log_mutation(Task::KIND, "remove", id);
        Ok(removed)
    }

    pub fn list(repository: &Repository, filter: TaskFilter) -> Vec<Arc<Task>> {
        repository
            .tasks
            .iter()
            .filter(|t| filter.matches(t))
            .cloned()
            .collect()
    }

    fn ensure_project(&self, project_id: &str) -> BoardResult<()> {
        if self.repository.projects.contains(project_id) {
            Ok(())
        } else {
            Err(BoardError::DanglingReference {
                kind: "project",
                id: project_id.to_string(),
            })
        }
    }
}
