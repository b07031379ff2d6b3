use anyhow::{Context, Result};
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use tracing::info;

use super::analytics::AnalyticsSummary;

#[derive(Debug, Serialize)]
struct ReportRow<'a> {
    section: &'a str,
    label: &'a str,
    value: String,
}

/// Writes the summary as `section,label,value` CSV rows.
pub fn write_csv<W: Write>(summary: &AnalyticsSummary, writer: W) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    let totals = [
        ("Total Projects", summary.total_projects.to_string()),
        ("Active Projects", summary.active_projects.to_string()),
        ("Total Tasks", summary.total_tasks.to_string()),
        ("Completed Tasks", summary.completed_tasks.to_string()),
        ("High Priority Tasks", summary.high_priority_tasks.to_string()),
        ("Avg. Project Progress", format!("{}%", summary.average_progress)),
    ];
    for (label, value) in totals {
        csv_writer.serialize(ReportRow {
            section: "overview",
            label,
            value,
        })?;
    }

    let sections = [
        ("project_status", &summary.project_status),
        ("task_status", &summary.task_status),
        ("task_priority", &summary.task_priority),
    ];
    for (section, counts) in sections {
        for count in counts {
            csv_writer.serialize(ReportRow {
                section,
                label: count.name,
                value: count.value.to_string(),
            })?;
        }
    }

    for project in &summary.project_progress {
        csv_writer.serialize(ReportRow {
            section: "project_progress",
            label: &project.name,
            value: format!("{}%", project.progress),
        })?;
    }

    csv_writer.flush().context("Failed to flush report")?;
    Ok(())
}

pub fn export_to_file(summary: &AnalyticsSummary, path: &Path) -> Result<()> {
    let file = File::create(path).with_context(|| format!("Failed to create report file {}", path.display()))?;
    write_csv(summary, file).with_context(|| format!("Failed to write report to {}", path.display()))?;
    info!(path = %path.display(), "Report exported");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::project::Project;
    use crate::domain::task::Task;

    #[test]
    fn test_csv_layout() {
        let summary = AnalyticsSummary::compute(Vec::<&Project>::new(), Vec::<&Task>::new());
        let mut out = Vec::new();
        write_csv(&summary, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let mut lines = text.lines();

        assert_eq!(lines.next(), Some("section,label,value"));
        assert_eq!(lines.next(), Some("overview,Total Projects,0"));
        assert!(text.contains("overview,Avg. Project Progress,0%"));
        assert!(text.contains("task_status,In Progress,0"));
        assert!(!text.contains("project_progress"));
    }
}
