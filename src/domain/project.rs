use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::Entity;
use super::priority::Priority;

pub const MAX_PROGRESS: u8 = 100;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub name: String,
    pub description: String,
    pub progress: u8,
    pub status: ProjectStatus,
    pub priority: Priority,
    pub due_date: NaiveDate,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectStatus {
    #[default]
    Active,
    Completed,
    OnHold,
}

impl ProjectStatus {
    pub const ALL: [ProjectStatus; 3] = [
        ProjectStatus::Active,
        ProjectStatus::Completed,
        ProjectStatus::OnHold,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectStatus::Active => "active",
            ProjectStatus::Completed => "completed",
            ProjectStatus::OnHold => "on-hold",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ProjectStatus::Active => "Active",
            ProjectStatus::Completed => "Completed",
            ProjectStatus::OnHold => "On Hold",
        }
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProjectStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(ProjectStatus::Active),
            "completed" => Ok(ProjectStatus::Completed),
            "on-hold" => Ok(ProjectStatus::OnHold),
            other => Err(format!("unknown project status '{}'", other)),
        }
    }
}

/// Colour bucket of the progress bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressTone {
    Green,
    Yellow,
    Blue,
}

impl ProgressTone {
    pub fn for_progress(progress: u8) -> Self {
        if progress >= 75 {
            ProgressTone::Green
        } else if progress >= 50 {
            ProgressTone::Yellow
        } else {
            ProgressTone::Blue
        }
    }

    pub fn css_color(&self) -> &'static str {
        match self {
            ProgressTone::Green => "#22c55e",
            ProgressTone::Yellow => "#eab308",
            ProgressTone::Blue => "#3b82f6",
        }
    }
}

impl Project {
    pub fn new(id: String, name: String, today: NaiveDate) -> Self {
        Self {
            id,
            name,
            description: String::new(),
            progress: 0,
            status: ProjectStatus::Active,
            priority: Priority::Medium,
            due_date: today + Duration::days(30),
        }
    }

    pub fn progress_tone(&self) -> ProgressTone {
        ProgressTone::for_progress(self.progress)
    }

    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        self.due_date < today && self.status != ProjectStatus::Completed
    }
}

impl Entity for Project {
    const KIND: &'static str = "Project";
    const ID_PREFIX: &'static str = "project";

    fn id(&self) -> &str {
        &self.id
    }
}

/// Partial update of a project. Absent fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ProjectPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub progress: Option<u8>,
    pub status: Option<ProjectStatus>,
    pub priority: Option<Priority>,
    pub due_date: Option<NaiveDate>,
}

impl ProjectPatch {
    /// Builds a patch from a JSON object of field assignments.
    pub fn from_json(fields: serde_json::Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(fields)
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn apply_to(&self, project: &mut Project) {
        if let Some(name) = &self.name {
            project.name = name.clone();
        }
        if let Some(description) = &self.description {
            project.description = description.clone();
        }
        if let Some(progress) = self.progress {
            project.progress = progress;
        }
        if let Some(status) = self.status {
            project.status = status;
        }
        if let Some(priority) = self.priority {
            project.priority = priority;
        }
        if let Some(due_date) = self.due_date {
            project.due_date = due_date;
        }
    }
}
