use std::sync::Arc;

use super::error_handling::{BoardError, BoardResult, LogHelper, LogRejection};
use super::validation::InputValidator;
use crate::domain::Entity;
use crate::domain::team_member::{MemberPatch, NewMember, TeamMember};
use crate::repository::Repository;

const REQUIRED_FIELDS: &str = "Please fill in all required fields";

pub struct TeamService<'a> {
    repository: &'a mut Repository,
}

impl<'a> TeamService<'a> {
    pub fn new(repository: &'a mut Repository) -> Self {
        Self { repository }
    }

    pub fn add(&mut self, new_member: &NewMember) -> BoardResult<Arc<TeamMember>> {
        self.try_add(new_member).log_rejection(TeamMember::KIND, "add")
    }

    fn try_add(&mut self, new_member: &NewMember) -> BoardResult<Arc<TeamMember>> {
        let name = InputValidator::validate_required("name", &new_member.name, REQUIRED_FIELDS)?;
        let email = InputValidator::validate_required("email", &new_member.email, REQUIRED_FIELDS)?;
        let role = InputValidator::validate_required("role", &new_member.role, REQUIRED_FIELDS)?;
        let email = InputValidator::validate_email(&email)?;

        self.ensure_unique_email(&email, None)?;
        self.ensure_projects(&new_member.project_ids)?;

        let id = self.repository.members.next_id();
        let member = self.repository.members.insert(TeamMember {
            id,
            name,
            avatar: TeamMember::avatar_for(&email),
            email,
            role,
            project_ids: new_member.project_ids.clone(),
        });
        LogHelper::log_mutation(TeamMember::KIND, "add", &member.id);
        Ok(member)
    }

    pub fn update(&mut self, id: &str, patch: &MemberPatch) -> BoardResult<Arc<TeamMember>> {
        self.try_update(id, patch).log_rejection(TeamMember::KIND, "update")
    }

    fn try_update(&mut self, id: &str, patch: &MemberPatch) -> BoardResult<Arc<TeamMember>> {
        let current = self
            .repository
            .members
            .get(id)
            .cloned()
            .ok_or_else(|| BoardError::not_found(TeamMember::KIND, id))?;

        let mut patch = patch.clone();
        if let Some(name) = &patch.name {
            patch.name = Some(InputValidator::validate_required("name", name, REQUIRED_FIELDS)?);
        }
        if let Some(role) = &patch.role {
            patch.role = Some(InputValidator::validate_required("role", role, REQUIRED_FIELDS)?);
        }
        if let Some(email) = &patch.email {
            let email = InputValidator::validate_required("email", email, REQUIRED_FIELDS)?;
            let email = InputValidator::validate_email(&email)?;
            self.ensure_unique_email(&email, Some(id))?;
            patch.email = Some(email);
        }
        if let Some(project_ids) = &patch.project_ids {
            // Ids of removed projects the member already had are kept as they are.
            let added: Vec<String> = project_ids
                .iter()
                .filter(|p| !current.project_ids.contains(*p))
                .cloned()
                .collect();
            self.ensure_projects(&added)?;
        }

        let member = self
            .repository
            .members
            .update(id, |member| patch.apply_to(member))
            .ok_or_else(|| BoardError::not_found(TeamMember::KIND, id))?;
        LogHelper::log_mutation(TeamMember::KIND, "update", id);
        Ok(member)
    }

    pub fn patch_json(&mut self, id: &str, fields: serde_json::Value) -> BoardResult<Arc<TeamMember>> {
        let patch = MemberPatch::from_json(fields)
            .map_err(|e| BoardError::InvalidPatch {
                kind: TeamMember::KIND,
                reason: e.to_string(),
            })
            .log_rejection(TeamMember::KIND, "update")?;
        self.update(id, &patch)
    }

    pub fn toggle_project(&mut self, id: &str, project_id: &str) -> BoardResult<Arc<TeamMember>> {
        let mut member = self
            .repository
            .members
            .get(id)
            .map(|m| TeamMember::clone(m))
            .ok_or_else(|| BoardError::not_found(TeamMember::KIND, id))?;
        member.toggle_project(project_id);

        self.update(
            id,
            &MemberPatch {
                project_ids: Some(member.project_ids),
                ..Default::default()
            },
        )
    }

    pub fn remove(&mut self, id: &str) -> BoardResult<Arc<TeamMember>> {
        let removed = self
            .repository
            .members
            .remove(id)
            .ok_or_else(|| BoardError::not_found(TeamMember::KIND, id))
            .log_rejection(TeamMember::KIND, "remove")?;
        LogHelper::log_mutation(TeamMember::KIND, "remove", id);
        Ok(removed)
    }

    /// Simulated invitation. No mail is sent; returns the feedback text.
    pub fn invite(&self, id: &str) -> BoardResult<String> {
        let member = self
            .repository
            .members
            .get(id)
            .ok_or_else(|| BoardError::not_found(TeamMember::KIND, id))?;
        LogHelper::log_mutation(TeamMember::KIND, "invite", id);
        Ok(format!("Invitation sent to {}", member.email))
    }

    pub fn search(repository: &Repository, query: &str) -> Vec<Arc<TeamMember>> {
        repository
            .members
            .iter()
            .filter(|m| m.matches_query(query))
            .cloned()
            .collect()
    }

    /// Display names of the member's projects, skipping removed ones.
    pub fn project_names(repository: &Repository, member: &TeamMember) -> Vec<String> {
        member
            .project_ids
            .iter()
            .filter_map(|id| repository.project_name(id))
            .map(str::to_string)
            .collect()
    }

    fn ensure_unique_email(&self, email: &str, except_id: Option<&str>) -> BoardResult<()> {
        let taken = self
            .repository
            .members
            .values()
            .any(|m| Some(m.id.as_str()) != except_id && m.has_email(email));
        if taken {
            Err(BoardError::DuplicateEmail {
                email: email.to_string(),
            })
        } else {
            Ok(())
        }
    }

    fn ensure_projects(&self, project_ids: &[String]) -> BoardResult<()> {
        match project_ids.iter().find(|id| !self.repository.projects.contains(id)) {
            Some(missing) => Err(BoardError::DanglingReference {
                kind: "project",
                id: missing.clone(),
            }),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Utc};

    fn setup() -> Repository {
        Repository::with_sample_data(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(), Utc::now())
    }

    #[test]
    fn test_add_member() {
        let mut repo = setup();
        let member = TeamService::new(&mut repo)
            .add(&NewMember::new("Ada Lovelace", "ada@example.com", "Developer").with_projects(vec!["2".to_string()]))
            .unwrap();
        assert_eq!(repo.members.len(), 6);
        assert_eq!(member.project_ids, vec!["2"]);
        assert!(member.avatar.contains("ada@example.com"));
    }

    #[test]
    fn test_add_member_requires_fields() {
        let mut repo = setup();
        let err = TeamService::new(&mut repo)
            .add(&NewMember::new("Ada", "ada@example.com", ""))
            .unwrap_err();
        assert_eq!(err.to_string(), "Please fill in all required fields");
        assert_eq!(repo.members.len(), 5);
    }

    #[test]
    fn test_add_member_rejects_duplicate_email() {
        let mut repo = setup();
        let err = TeamService::new(&mut repo)
            .add(&NewMember::new("Johnny", "JOHN.DOE@example.com", "Designer"))
            .unwrap_err();
        assert!(matches!(err, BoardError::DuplicateEmail { .. }));
        assert_eq!(repo.members.len(), 5);
    }

    #[test]
    fn test_update_rechecks_email_against_others_only() {
        let mut repo = setup();
        let mut service = TeamService::new(&mut repo);

        let same = service
            .update("1", &MemberPatch { email: Some("John.Doe@example.com".to_string()), ..Default::default() })
            .unwrap();
        assert_eq!(same.email, "John.Doe@example.com");

        let err = service
            .update("1", &MemberPatch { email: Some("jane.smith@example.com".to_string()), ..Default::default() })
            .unwrap_err();
        assert!(matches!(err, BoardError::DuplicateEmail { .. }));
    }

    #[test]
    fn test_toggle_project_and_names() {
        let mut repo = setup();
        TeamService::new(&mut repo).toggle_project("3", "4").unwrap();
        let member = repo.members.get("3").unwrap().clone();
        assert_eq!(
            TeamService::project_names(&repo, &member),
            vec!["Website Redesign", "Internal Tool Upgrade"]
        );

        let err = TeamService::new(&mut repo).toggle_project("3", "404").unwrap_err();
        assert!(matches!(err, BoardError::DanglingReference { .. }));
    }

    #[test]
    fn test_search_and_invite() {
        let mut repo = setup();
        let developers: Vec<_> = TeamService::search(&repo, "developer").iter().map(|m| m.name.clone()).collect();
        assert_eq!(developers, vec!["Jane Smith", "David Brown"]);

        let message = TeamService::new(&mut repo).invite("4").unwrap();
        assert_eq!(message, "Invitation sent to sarah.williams@example.com");
    }

    #[test]
    fn test_remove_member() {
        let mut repo = setup();
        TeamService::new(&mut repo).remove("2").unwrap();
        let ids: Vec<_> = repo.members.values().map(|m| m.id.clone()).collect();
        assert_eq!(ids, vec!["1", "3", "4", "5"]);
    }
}
