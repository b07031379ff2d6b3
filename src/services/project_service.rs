use chrono::{Local, NaiveDate};
use std::sync::Arc;
use tracing::warn;

use super::error_handling::{BoardError, BoardResult, LogHelper, LogRejection};
use super::validation::InputValidator;
use crate::domain::Entity;
use crate::domain::project::{Project, ProjectPatch, ProjectStatus};
use crate::repository::Repository;

pub struct ProjectService<'a> {
    repository: &'a mut Repository,
    today: NaiveDate,
}

impl<'a> ProjectService<'a> {
    pub fn new(repository: &'a mut Repository) -> Self {
        Self {
            repository,
            today: Local::now().date_naive(),
        }
    }

    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = today;
        self
    }

    pub fn add(&mut self, name: &str) -> BoardResult<Arc<Project>> {
        let name = InputValidator::validate_required("name", name, "Project name cannot be empty")
            .log_rejection(Project::KIND, "add")?;

        let id = self.repository.projects.next_id();
        let project = self.repository.projects.insert(Project::new(id, name, self.today));
        LogHelper::log_mutation(Project::KIND, "add", &project.id);
        Ok(project)
    }

    pub fn update_status(&mut self, id: &str, status: ProjectStatus) -> BoardResult<Arc<Project>> {
        self.patch(
            id,
            &ProjectPatch {
                status: Some(status),
                ..Default::default()
            },
        )
    }

    pub fn set_progress(&mut self, id: &str, progress: u8) -> BoardResult<Arc<Project>> {
        self.patch(
            id,
            &ProjectPatch {
                progress: Some(progress),
                ..Default::default()
            },
        )
    }

    pub fn patch(&mut self, id: &str, patch: &ProjectPatch) -> BoardResult<Arc<Project>> {
        self.try_patch(id, patch).log_rejection(Project::KIND, "patch")
    }

    fn try_patch(&mut self, id: &str, patch: &ProjectPatch) -> BoardResult<Arc<Project>> {
        if !self.repository.projects.contains(id) {
            return Err(BoardError::not_found(Project::KIND, id));
        }

        let mut patch = patch.clone();
        if let Some(name) = &patch.name {
            patch.name = Some(InputValidator::validate_required("name", name, "Project name cannot be empty")?);
        }
        if let Some(description) = &patch.description {
            patch.description = Some(InputValidator::validate_description(description)?);
        }
        if let Some(progress) = patch.progress {
            InputValidator::validate_progress(progress)?;
        }

        let project = self
            .repository
            .projects
            .update(id, |project| patch.apply_to(project))
            .ok_or_else(|| BoardError::not_found(Project::KIND, id))?;
        LogHelper::log_mutation(Project::KIND, "patch", id);
        Ok(project)
    }

    pub fn patch_json(&mut self, id: &str, fields: serde_json::Value) -> BoardResult<Arc<Project>> {
        let patch = ProjectPatch::from_json(fields)
            .map_err(|e| BoardError::InvalidPatch {
                kind: Project::KIND,
                reason: e.to_string(),
            })
            .log_rejection(Project::KIND, "patch")?;
        self.patch(id, &patch)
    }

    /// Removes the project. Its tasks are kept and become orphans.
    pub fn remove(&mut self, id: &str) -> BoardResult<Arc<Project>> {
        let removed = self
            .repository
            .projects
            .remove(id)
            .ok_or_else(|| BoardError::not_found(Project::KIND, id))
            .log_rejection(Project::KIND, "remove")?;
        LogHelper::log_mutation(Project::KIND, "remove", id);

        let orphaned = self.repository.tasks_for_project(id).len();
        if orphaned > 0 {
            warn!(project_id = %id, orphaned_tasks = orphaned, "Removed project still has tasks");
        }
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use serde_json::json;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
    }

    fn setup() -> Repository {
        Repository::with_sample_data(today(), Utc::now())
    }

    #[test]
    fn test_add_project() {
        let mut repo = setup();
        let project = ProjectService::new(&mut repo).with_today(today()).add(" Data Platform ").unwrap();
        assert_eq!(project.name, "Data Platform");
        assert_eq!(project.progress, 0);
        assert_eq!(repo.projects.len(), 5);
    }

    #[test]
    fn test_add_project_rejects_blank_name() {
        let mut repo = setup();
        let err = ProjectService::new(&mut repo).add("").unwrap_err();
        assert_eq!(err.to_string(), "Project name cannot be empty");
        assert_eq!(repo.projects.len(), 4);
    }

    #[test]
    fn test_progress_is_bounded() {
        let mut repo = setup();
        let project = ProjectService::new(&mut repo).set_progress("2", 100).unwrap();
        assert_eq!(project.progress, 100);

        let err = ProjectService::new(&mut repo).set_progress("2", 101).unwrap_err();
        assert!(matches!(err, BoardError::InvalidPatch { .. }));
        assert_eq!(repo.projects.get("2").unwrap().progress, 100);
    }

    #[test]
    fn test_patch_json_edits_in_place() {
        let mut repo = setup();
        let project = ProjectService::new(&mut repo)
            .patch_json("4", json!({ "status": "active", "description": "Back on track" }))
            .unwrap();
        assert_eq!(project.status, ProjectStatus::Active);
        assert_eq!(project.description, "Back on track");
        assert_eq!(project.name, "Internal Tool Upgrade");

        let ids: Vec<_> = repo.projects.values().map(|p| p.id.clone()).collect();
        assert_eq!(ids, vec!["1", "2", "3", "4"]);
    }

    #[test]
    fn test_remove_does_not_cascade() {
        let mut repo = setup();
        ProjectService::new(&mut repo).remove("1").unwrap();
        assert_eq!(repo.projects.len(), 3);
        assert_eq!(repo.tasks.len(), 7);
        assert_eq!(repo.orphaned_tasks().len(), 3);
    }
}
