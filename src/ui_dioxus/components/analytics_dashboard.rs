use dioxus::prelude::*;

use super::badges::ProgressBar;
use crate::services::analytics::{AnalyticsSummary, Count};

#[derive(Clone, Copy, PartialEq, Eq)]
enum AnalyticsTab {
    Overview,
    Projects,
    Tasks,
}

impl AnalyticsTab {
    const ALL: [AnalyticsTab; 3] = [AnalyticsTab::Overview, AnalyticsTab::Projects, AnalyticsTab::Tasks];

    fn label(&self) -> &'static str {
        match self {
            AnalyticsTab::Overview => "Overview",
            AnalyticsTab::Projects => "Projects",
            AnalyticsTab::Tasks => "Tasks",
        }
    }
}

#[component]
pub fn AnalyticsDashboard(summary: AnalyticsSummary) -> Element {
    let mut tab = use_signal(|| AnalyticsTab::Overview);
    let current = *tab.read();

    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 16px;",

            div {
                style: "display: grid; grid-template-columns: repeat(4, 1fr); gap: 12px;",
                StatCard { label: "Total Projects", value: "{summary.total_projects}", hint: "{summary.active_projects} active" }
                StatCard { label: "Total Tasks", value: "{summary.total_tasks}", hint: "{summary.completed_tasks} completed" }
                StatCard { label: "High Priority", value: "{summary.high_priority_tasks}", hint: "tasks" }
                StatCard { label: "Average Progress", value: "{summary.average_progress}%", hint: "across projects" }
            }

            div {
                style: "display: flex; gap: 4px; border-bottom: 1px solid #e5e7eb;",
                for t in AnalyticsTab::ALL {
                    button {
                        key: "{t.label()}",
                        style: if t == current {
                            "padding: 8px 16px; border: none; border-bottom: 2px solid #2563eb; background: transparent; cursor: pointer; font-weight: 600;"
                        } else {
                            "padding: 8px 16px; border: none; border-bottom: 2px solid transparent; background: transparent; cursor: pointer; color: #6b7280;"
                        },
                        onclick: move |_| tab.set(t),
                        {t.label()}
                    }
                }
            }

            match current {
                AnalyticsTab::Overview => rsx! {
                    div {
                        style: "display: grid; grid-template-columns: 1fr 1fr; gap: 16px;",
                        BarChart { title: "Project Status", counts: summary.project_status.clone() }
                        BarChart { title: "Task Status", counts: summary.task_status.clone() }
                    }
                },
                AnalyticsTab::Projects => rsx! {
                    div {
                        style: "background: white; border: 1px solid #e5e7eb; border-radius: 8px; padding: 16px;",
                        h3 { style: "margin: 0 0 12px; font-size: 15px;", "Project Progress" }
                        for entry in summary.project_progress.clone() {
                            div {
                                key: "{entry.name}",
                                style: "display: grid; grid-template-columns: 160px 1fr; gap: 12px; align-items: center; margin-bottom: 8px;",
                                span { style: "font-size: 13px;", "{entry.name}" }
                                ProgressBar { progress: entry.progress }
                            }
                        }
                    }
                },
                AnalyticsTab::Tasks => rsx! {
                    div {
                        style: "display: grid; grid-template-columns: 1fr 1fr; gap: 16px;",
                        BarChart { title: "Task Status", counts: summary.task_status.clone() }
                        BarChart { title: "Task Priority", counts: summary.task_priority.clone() }
                    }
                },
            }
        }
    }
}

#[component]
fn StatCard(label: &'static str, value: String, hint: String) -> Element {
    rsx! {
        div {
            style: "background: white; border: 1px solid #e5e7eb; border-radius: 8px; padding: 16px;",
            div { style: "font-size: 13px; color: #6b7280;", "{label}" }
            div { style: "font-size: 24px; font-weight: 700; margin: 4px 0;", "{value}" }
            div { style: "font-size: 12px; color: #9ca3af;", "{hint}" }
        }
    }
}

/// Horizontal bars scaled against the largest count.
#[component]
fn BarChart(title: &'static str, counts: Vec<Count>) -> Element {
    let max = counts.iter().map(|c| c.value).max().unwrap_or(0).max(1);

    rsx! {
        div {
            style: "background: white; border: 1px solid #e5e7eb; border-radius: 8px; padding: 16px;",
            h3 { style: "margin: 0 0 12px; font-size: 15px;", "{title}" }
            for count in counts {
                BarRow { key: "{count.name}", name: count.name, value: count.value, width: count.value * 100 / max }
            }
        }
    }
}

#[component]
fn BarRow(name: &'static str, value: usize, width: usize) -> Element {
    rsx! {
        div {
            style: "display: grid; grid-template-columns: 100px 1fr 32px; gap: 8px; align-items: center; margin-bottom: 8px;",
            span { style: "font-size: 13px;", "{name}" }
            div {
                style: "height: 14px; background: #f1f5f9; border-radius: 4px; overflow: hidden;",
                div { style: "height: 100%; width: {width}%; background: #3b82f6;" }
            }
            span { style: "font-size: 12px; color: #6b7280; text-align: right;", "{value}" }
        }
    }
}
