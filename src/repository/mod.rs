pub mod entity_store;
pub mod sample_data;

use chrono::{DateTime, NaiveDate, Utc};
use std::sync::Arc;

use crate::domain::notification::Notification;
use crate::domain::project::Project;
use crate::domain::task::Task;
use crate::domain::team_member::TeamMember;

pub use entity_store::EntityStore;

/// The single in-memory store shared by every page.
#[derive(Debug, Clone, Default)]
pub struct Repository {
    pub projects: EntityStore<Project>,
    pub tasks: EntityStore<Task>,
    pub members: EntityStore<TeamMember>,
    pub notifications: EntityStore<Notification>,
}

impl Repository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sample_data(today: NaiveDate, now: DateTime<Utc>) -> Self {
        Self {
            projects: EntityStore::from_records(sample_data::sample_projects(today)),
            tasks: EntityStore::from_records(sample_data::sample_tasks(today)),
            members: EntityStore::from_records(sample_data::sample_members()),
            notifications: EntityStore::from_records(sample_data::sample_notifications(now)),
        }
    }

    /// Seeds the store relative to the local clock.
    pub fn seeded() -> Self {
        Self::with_sample_data(chrono::Local::now().date_naive(), Utc::now())
    }

    pub fn project_name(&self, project_id: &str) -> Option<&str> {
        self.projects.get(project_id).map(|p| p.name.as_str())
    }

    pub fn tasks_for_project(&self, project_id: &str) -> Vec<Arc<Task>> {
        self.tasks
            .iter()
            .filter(|t| t.project_id == project_id)
            .cloned()
            .collect()
    }

    /// Tasks whose project no longer exists.
    pub fn orphaned_tasks(&self) -> Vec<Arc<Task>> {
        self.tasks
            .iter()
            .filter(|t| !self.projects.contains(&t.project_id))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repo() -> Repository {
        Repository::with_sample_data(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(), Utc::now())
    }

    #[test]
    fn test_sample_data_is_consistent() {
        let repo = repo();
        assert_eq!(repo.projects.len(), 4);
        assert_eq!(repo.tasks.len(), 7);
        assert_eq!(repo.members.len(), 5);
        assert_eq!(repo.notifications.len(), 3);
        assert!(repo.orphaned_tasks().is_empty());

        for member in repo.members.values() {
            for project_id in &member.project_ids {
                assert!(repo.projects.contains(project_id), "{} references {}", member.name, project_id);
            }
        }
    }

    #[test]
    fn test_tasks_for_project() {
        let repo = repo();
        let titles: Vec<_> = repo.tasks_for_project("2").iter().map(|t| t.title.clone()).collect();
        assert_eq!(titles, vec!["UI/UX Design", "API Integration"]);
    }

    #[test]
    fn test_orphaned_tasks_after_project_removal() {
        let mut repo = repo();
        repo.projects.remove("3");
        let orphans: Vec<_> = repo.orphaned_tasks().iter().map(|t| t.id.clone()).collect();
        assert_eq!(orphans, vec!["6", "7"]);
    }

    #[test]
    fn test_project_name_lookup() {
        let repo = repo();
        assert_eq!(repo.project_name("1"), Some("Website Redesign"));
        assert_eq!(repo.project_name("99"), None);
    }
}
