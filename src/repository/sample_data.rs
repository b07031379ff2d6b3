use chrono::{DateTime, Duration, NaiveDate, Utc};

use crate::domain::notification::{Notification, NotificationKind};
use crate::domain::priority::Priority;
use crate::domain::project::{Project, ProjectStatus};
use crate::domain::task::{Task, TaskStatus};
use crate::domain::team_member::TeamMember;

// Due dates are offsets from today so the calendar and overdue markers stay
// meaningful whenever the app is launched.

pub fn sample_projects(today: NaiveDate) -> Vec<Project> {
    let project = |id: &str, name: &str, description: &str, progress, status, priority, due_in: i64| Project {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        progress,
        status,
        priority,
        due_date: today + Duration::days(due_in),
    };

    vec![
        project("1", "Website Redesign", "Complete overhaul of company website", 75, ProjectStatus::Active, Priority::High, 14),
        project("2", "Mobile App Development", "New mobile application for clients", 30, ProjectStatus::Active, Priority::Medium, 31),
        project("3", "Marketing Campaign", "Q1 marketing initiative", 90, ProjectStatus::Completed, Priority::High, -3),
        project("4", "Internal Tool Upgrade", "Upgrade existing internal tools", 15, ProjectStatus::OnHold, Priority::Low, 55),
    ]
}

pub fn sample_tasks(today: NaiveDate) -> Vec<Task> {
    let task = |id: &str, project_id: &str, title: &str, description: &str, status, priority, due_in: i64| Task {
        id: id.to_string(),
        project_id: project_id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        status,
        priority,
        due_date: today + Duration::days(due_in),
    };

    vec![
        task("1", "1", "Design homepage mockups", "Create initial designs for the new homepage", TaskStatus::Completed, Priority::Medium, -10),
        task("2", "1", "Implement responsive design", "Make sure the website works on all devices", TaskStatus::InProgress, Priority::High, 3),
        task("3", "1", "Content migration", "Move content from old site to new one", TaskStatus::Todo, Priority::Medium, 7),
        task("4", "2", "UI/UX Design", "Design user interface for mobile app", TaskStatus::InProgress, Priority::High, 12),
        task("5", "2", "API Integration", "Connect to backend APIs", TaskStatus::Todo, Priority::High, 16),
        task("6", "3", "Create social media posts", "Design and schedule posts for campaign", TaskStatus::Completed, Priority::Medium, -6),
        task("7", "3", "Track campaign metrics", "Monitor performance across channels", TaskStatus::Completed, Priority::Low, -3),
    ]
}

pub fn sample_members() -> Vec<TeamMember> {
    let member = |id: &str, name: &str, email: &str, role: &str, projects: &[&str]| TeamMember {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        role: role.to_string(),
        avatar: TeamMember::avatar_for(email),
        project_ids: projects.iter().map(|p| p.to_string()).collect(),
    };

    vec![
        member("1", "John Doe", "john.doe@example.com", "Project Manager", &["1", "3"]),
        member("2", "Jane Smith", "jane.smith@example.com", "Developer", &["2", "1"]),
        member("3", "Mike Johnson", "mike.johnson@example.com", "Designer", &["1"]),
        member("4", "Sarah Williams", "sarah.williams@example.com", "Content Writer", &["3"]),
        member("5", "David Brown", "david.brown@example.com", "Developer", &["2"]),
    ]
}

pub fn sample_notifications(now: DateTime<Utc>) -> Vec<Notification> {
    vec![
        Notification {
            id: "1".to_string(),
            title: "New Task Assigned".to_string(),
            message: "You've been assigned to 'Update API documentation'".to_string(),
            timestamp: now - Duration::minutes(30),
            read: false,
            kind: NotificationKind::Info,
        },
        Notification {
            id: "2".to_string(),
            title: "Project Deadline Approaching".to_string(),
            message: "Website Redesign project is due in 2 days".to_string(),
            timestamp: now - Duration::hours(2),
            read: false,
            kind: NotificationKind::Warning,
        },
        Notification {
            id: "3".to_string(),
            title: "Project Status Updated".to_string(),
            message: "Mobile App Development project is now 'In Progress'".to_string(),
            timestamp: now - Duration::days(1),
            read: true,
            kind: NotificationKind::Success,
        },
    ]
}
