use serde::Serialize;
use tracing::debug;

use crate::domain::priority::Priority;
use crate::domain::project::{Project, ProjectStatus};
use crate::domain::task::{Task, TaskStatus};

/// Longest project name shown on a chart axis before it is cut.
pub const CHART_LABEL_MAX_CHARS: usize = 15;

/// One bar or pie slice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Count {
    pub name: &'static str,
    pub value: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectProgress {
    pub name: String,
    pub progress: u8,
}

/// Aggregates shown by the reports page. Recomputed on every render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalyticsSummary {
    pub project_status: Vec<Count>,
    pub task_status: Vec<Count>,
    pub task_priority: Vec<Count>,
    pub project_progress: Vec<ProjectProgress>,
    pub total_projects: usize,
    pub active_projects: usize,
    pub total_tasks: usize,
    pub completed_tasks: usize,
    pub high_priority_tasks: usize,
    pub average_progress: u32,
}

impl AnalyticsSummary {
    pub fn compute<'a, P, T>(projects: P, tasks: T) -> Self
    where
        P: IntoIterator<Item = &'a Project>,
        T: IntoIterator<Item = &'a Task>,
    {
        let projects: Vec<&Project> = projects.into_iter().collect();
        let tasks: Vec<&Task> = tasks.into_iter().collect();

        let project_status = ProjectStatus::ALL
            .iter()
            .map(|status| Count {
                name: status.label(),
                value: projects.iter().filter(|p| p.status == *status).count(),
            })
            .collect::<Vec<_>>();

        let task_status = TaskStatus::ALL
            .iter()
            .map(|status| Count {
                name: status.label(),
                value: tasks.iter().filter(|t| t.status == *status).count(),
            })
            .collect::<Vec<_>>();

        let task_priority = Priority::ALL
            .iter()
            .map(|priority| Count {
                name: priority.label(),
                value: tasks.iter().filter(|t| t.priority == *priority).count(),
            })
            .collect::<Vec<_>>();

        let project_progress = projects
            .iter()
            .map(|p| ProjectProgress {
                name: chart_label(&p.name),
                progress: p.progress,
            })
            .collect();

        let summary = Self {
            total_projects: projects.len(),
            active_projects: count_named(&project_status, ProjectStatus::Active.label()),
            total_tasks: tasks.len(),
            completed_tasks: count_named(&task_status, TaskStatus::Completed.label()),
            high_priority_tasks: count_named(&task_priority, Priority::High.label()),
            average_progress: average_progress(projects.iter().map(|p| p.progress)),
            project_status,
            task_status,
            task_priority,
            project_progress,
        };
        debug!(
            projects = summary.total_projects,
            tasks = summary.total_tasks,
            average_progress = summary.average_progress,
            "Analytics recomputed"
        );
        summary
    }
}

/// Mean progress rounded to the nearest integer, 0 when there is nothing to average.
pub fn average_progress(progress: impl IntoIterator<Item = u8>) -> u32 {
    let (sum, count) = progress
        .into_iter()
        .fold((0u64, 0u64), |(sum, count), p| (sum + u64::from(p), count + 1));
    if count == 0 {
        return 0;
    }
    (sum as f64 / count as f64).round() as u32
}

/// Cuts long names to [`CHART_LABEL_MAX_CHARS`] characters followed by "...".
pub fn chart_label(name: &str) -> String {
    if name.chars().count() > CHART_LABEL_MAX_CHARS {
        let cut: String = name.chars().take(CHART_LABEL_MAX_CHARS).collect();
        format!("{}...", cut)
    } else {
        name.to_string()
    }
}

fn count_named(counts: &[Count], name: &str) -> usize {
    counts.iter().find(|c| c.name == name).map_or(0, |c| c.value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::Repository;
    use chrono::{NaiveDate, Utc};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_average_progress() {
        assert_eq!(average_progress(Vec::new()), 0);
        assert_eq!(average_progress(vec![75, 30, 90]), 65);
        assert_eq!(average_progress(vec![75, 30, 90, 15]), 53);
        assert_eq!(average_progress(vec![0, 1]), 1);
    }

    #[test]
    fn test_chart_label() {
        assert_eq!(chart_label("Website Redesign"), "Website Redesig...");
        assert_eq!(chart_label("Short"), "Short");
        assert_eq!(chart_label("Exactly 15 char"), "Exactly 15 char");
    }

    #[test]
    fn test_summary_over_sample_data() {
        let repo = Repository::with_sample_data(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(), Utc::now());
        let summary = AnalyticsSummary::compute(repo.projects.values(), repo.tasks.values());

        assert_eq!(
            summary.project_status,
            vec![
                Count { name: "Active", value: 2 },
                Count { name: "Completed", value: 1 },
                Count { name: "On Hold", value: 1 },
            ]
        );
        assert_eq!(
            summary.task_status,
            vec![
                Count { name: "To Do", value: 2 },
                Count { name: "In Progress", value: 2 },
                Count { name: "Completed", value: 3 },
            ]
        );
        assert_eq!(
            summary.task_priority,
            vec![
                Count { name: "High", value: 3 },
                Count { name: "Medium", value: 3 },
                Count { name: "Low", value: 1 },
            ]
        );
        assert_eq!(summary.total_projects, 4);
        assert_eq!(summary.active_projects, 2);
        assert_eq!(summary.completed_tasks, 3);
        assert_eq!(summary.high_priority_tasks, 3);
        assert_eq!(summary.average_progress, 53);
        assert_eq!(summary.project_progress[1].name, "Mobile App Deve...");
    }

    #[test]
    fn test_summary_over_nothing() {
        let summary = AnalyticsSummary::compute(Vec::<&Project>::new(), Vec::<&Task>::new());
        assert_eq!(summary.average_progress, 0);
        assert_eq!(summary.total_tasks, 0);
        assert!(summary.project_status.iter().all(|c| c.value == 0));
    }
}
