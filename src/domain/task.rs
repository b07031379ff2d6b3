use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::Entity;
use super::priority::Priority;

/// New tasks are due a week after creation.
pub const DEFAULT_DUE_IN_DAYS: i64 = 7;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub project_id: String,
    pub title: String,
    pub description: String,
    pub status: TaskStatus,
    pub priority: Priority,
    pub due_date: NaiveDate,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    #[default]
    Todo,
    InProgress,
    Completed,
}

impl TaskStatus {
    pub const ALL: [TaskStatus; 3] = [TaskStatus::Todo, TaskStatus::InProgress, TaskStatus::Completed];

    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Todo => "todo",
            TaskStatus::InProgress => "in-progress",
            TaskStatus::Completed => "completed",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TaskStatus::Todo => "To Do",
            TaskStatus::InProgress => "In Progress",
            TaskStatus::Completed => "Completed",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            TaskStatus::Todo => "☐",
            TaskStatus::InProgress => "⏳",
            TaskStatus::Completed => "✅",
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "todo" => Ok(TaskStatus::Todo),
            "in-progress" => Ok(TaskStatus::InProgress),
            "completed" => Ok(TaskStatus::Completed),
            other => Err(format!("unknown task status '{}'", other)),
        }
    }
}

/// Which tasks a list shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TaskFilter {
    #[default]
    All,
    Status(TaskStatus),
}

impl TaskFilter {
    pub fn matches(&self, task: &Task) -> bool {
        match self {
            TaskFilter::All => true,
            TaskFilter::Status(status) => task.status == *status,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TaskFilter::All => "All",
            TaskFilter::Status(status) => status.label(),
        }
    }
}

impl Task {
    pub fn new(id: String, project_id: String, title: String, today: NaiveDate) -> Self {
        Self {
            id,
            project_id,
            title,
            description: String::new(),
            status: TaskStatus::Todo,
            priority: Priority::Medium,
            due_date: today + Duration::days(DEFAULT_DUE_IN_DAYS),
        }
    }

    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        self.due_date < today && self.status != TaskStatus::Completed
    }
}

impl Entity for Task {
    const KIND: &'static str = "Task";
    const ID_PREFIX: &'static str = "task";

    fn id(&self) -> &str {
        &self.id
    }
}

/// Partial update of a task. Absent fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TaskPatch {
    pub project_id: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<TaskStatus>,
    pub priority: Option<Priority>,
    pub due_date: Option<NaiveDate>,
}

impl TaskPatch {
    pub fn from_json(fields: serde_json::Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(fields)
    }

    pub fn status(status: TaskStatus) -> Self {
        Self {
            status: Some(status),
            ..Default::default()
        }
    }

    pub fn apply_to(&self, task: &mut Task) {
        if let Some(project_id) = &self.project_id {
            task.project_id = project_id.clone();
        }
        if let Some(title) = &self.title {
            task.title = title.clone();
        }
        if let Some(description) = &self.description {
            task.description = description.clone();
        }
        if let Some(status) = self.status {
            task.status = status;
        }
        if let Some(priority) = self.priority {
            task.priority = priority;
        }
        if let Some(due_date) = self.due_date {
            task.due_date = due_date;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
    }

    #[test]
    fn test_new_task() {
        let task = Task::new("task-1".to_string(), "1".to_string(), "Write docs".to_string(), today());
        assert_eq!(task.status, TaskStatus::Todo);
        assert_eq!(task.priority, Priority::Medium);
        assert!(task.description.is_empty());
        assert_eq!(task.due_date, NaiveDate::from_ymd_opt(2024, 3, 8).unwrap());
    }

    #[test]
    fn test_filter_matches() {
        let mut task = Task::new("t".to_string(), "1".to_string(), "x".to_string(), today());
        assert!(TaskFilter::All.matches(&task));
        assert!(TaskFilter::Status(TaskStatus::Todo).matches(&task));

        task.status = TaskStatus::Completed;
        assert!(!TaskFilter::Status(TaskStatus::Todo).matches(&task));
        assert!(TaskFilter::Status(TaskStatus::Completed).matches(&task));
    }

    #[test]
    fn test_status_parsing() {
        assert_eq!("in-progress".parse::<TaskStatus>().unwrap(), TaskStatus::InProgress);
        assert!("done".parse::<TaskStatus>().is_err());
    }

    #[test]
    fn test_patch_from_json() {
        let patch = TaskPatch::from_json(json!({ "projectId": "2", "status": "completed" })).unwrap();
        assert_eq!(patch.project_id.as_deref(), Some("2"));
        assert_eq!(patch.status, Some(TaskStatus::Completed));

        assert!(TaskPatch::from_json(json!({ "assignee": "bob" })).is_err());
        assert!(TaskPatch::from_json(json!({ "dueDate": "next week" })).is_err());
    }

    #[test]
    fn test_overdue() {
        let mut task = Task::new("t".to_string(), "1".to_string(), "x".to_string(), today());
        let later = NaiveDate::from_ymd_opt(2024, 4, 1).unwrap();
        assert!(task.is_overdue(later));
        task.status = TaskStatus::Completed;
        assert!(!task.is_overdue(later));
    }
}
