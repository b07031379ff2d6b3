use serde::{Deserialize, Serialize};

use super::Entity;

/// Roles offered by the member form. Free-form roles are accepted too.
pub const ROLE_SUGGESTIONS: [&str; 7] = [
    "Project Manager",
    "Developer",
    "Designer",
    "Content Writer",
    "QA Tester",
    "DevOps Engineer",
    "Business Analyst",
];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TeamMember {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: String,
    pub avatar: String,
    pub project_ids: Vec<String>,
}

/// Form contents for a member that does not exist yet.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewMember {
    pub name: String,
    pub email: String,
    pub role: String,
    pub project_ids: Vec<String>,
}

impl NewMember {
    pub fn new(name: impl Into<String>, email: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            role: role.into(),
            project_ids: Vec::new(),
        }
    }

    pub fn with_projects(mut self, project_ids: Vec<String>) -> Self {
        self.project_ids = project_ids;
        self
    }

    pub fn toggle_project(&mut self, project_id: &str) {
        toggle(&mut self.project_ids, project_id);
    }
}

impl TeamMember {
    pub fn avatar_for(email: &str) -> String {
        format!("https://i.pravatar.cc/150?u={}", email.to_lowercase())
    }

    pub fn has_email(&self, email: &str) -> bool {
        self.email.to_lowercase() == email.trim().to_lowercase()
    }

    /// Case-insensitive substring match over name, email and role.
    pub fn matches_query(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return true;
        }
        self.name.to_lowercase().contains(&query)
            || self.email.to_lowercase().contains(&query)
            || self.role.to_lowercase().contains(&query)
    }

    pub fn toggle_project(&mut self, project_id: &str) {
        toggle(&mut self.project_ids, project_id);
    }
}

impl Entity for TeamMember {
    const KIND: &'static str = "Team member";
    const ID_PREFIX: &'static str = "member";

    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct MemberPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub role: Option<String>,
    pub project_ids: Option<Vec<String>>,
}

impl MemberPatch {
    pub fn from_json(fields: serde_json::Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(fields)
    }

    /// Patch that replaces every editable field with the values of `member`.
    pub fn from_member(member: &TeamMember) -> Self {
        Self {
            name: Some(member.name.clone()),
            email: Some(member.email.clone()),
            role: Some(member.role.clone()),
            project_ids: Some(member.project_ids.clone()),
        }
    }

    pub fn apply_to(&self, member: &mut TeamMember) {
        if let Some(name) = &self.name {
            member.name = name.clone();
        }
        if let Some(email) = &self.email {
            member.email = email.clone();
        }
        if let Some(role) = &self.role {
            member.role = role.clone();
        }
        if let Some(project_ids) = &self.project_ids {
            member.project_ids = project_ids.clone();
        }
    }
}

fn toggle(ids: &mut Vec<String>, id: &str) {
    if let Some(pos) = ids.iter().position(|p| p == id) {
        ids.remove(pos);
    } else {
        ids.push(id.to_string());
    }
}
