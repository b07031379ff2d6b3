use chrono::NaiveDate;
use dioxus::prelude::*;
use std::str::FromStr;

use crate::domain::priority::Priority;
use crate::domain::project::{ProjectPatch, ProjectStatus};
use crate::services::ProjectService;
use crate::ui_dioxus::components::ProgressBar;
use crate::ui_dioxus::router::Route;
use crate::ui_dioxus::state::{AppState, use_app_state};
use crate::ui_dioxus::views::tasks_view::TaskRow;

const DATE_INPUT_FORMAT: &str = "%Y-%m-%d";

fn apply_patch(state: AppState, id: &str, patch: ProjectPatch) {
    let mut repository = state.repository;
    let result = ProjectService::new(&mut repository.write()).patch(id, &patch);
    state.report(result, "Project updated");
}

#[component]
pub fn ProjectDetails(project_id: String) -> Element {
    let state = use_app_state();
    let mut repository = state.repository;
    let navigator = use_navigator();

    let (project, tasks) = {
        let repo = repository.read();
        (repo.projects.get(&project_id).cloned(), repo.tasks_for_project(&project_id))
    };

    let Some(project) = project else {
        return rsx! {
            div {
                style: "padding: 40px; text-align: center;",
                h2 { "Project not found" }
                p { style: "color: #6b7280;", "No project with id {project_id} exists." }
                button {
                    style: "padding: 8px 16px; border: 1px solid #d1d5db; background: white; border-radius: 6px; cursor: pointer;",
                    onclick: move |_| {
                        navigator.push(Route::Dashboard {});
                    },
                    "Back to Dashboard"
                }
            }
        };
    };

    let due_value = project.due_date.format(DATE_INPUT_FORMAT).to_string();
    let current_status = project.status;
    let current_priority = project.priority;
    let (name_id, description_id, progress_id, status_id, priority_id, due_id, remove_id) = (
        project_id.clone(),
        project_id.clone(),
        project_id.clone(),
        project_id.clone(),
        project_id.clone(),
        project_id.clone(),
        project_id.clone(),
    );

    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 20px; max-width: 900px;",

            div {
                style: "display: flex; justify-content: space-between; align-items: center;",
                button {
                    style: "border: none; background: transparent; cursor: pointer; color: #2563eb;",
                    onclick: move |_| {
                        navigator.push(Route::Dashboard {});
                    },
                    "← Back"
                }
                button {
                    style: "padding: 6px 12px; border: 1px solid #fecaca; color: #dc2626; background: white; border-radius: 6px; cursor: pointer;",
                    onclick: move |_| {
                        let result = ProjectService::new(&mut repository.write()).remove(&remove_id);
                        if state.report(result, "Project deleted").is_some() {
                            navigator.push(Route::Dashboard {});
                        }
                    },
                    "Delete Project"
                }
            }

            div {
                style: "background: white; border: 1px solid #e5e7eb; border-radius: 8px; padding: 20px;
                       display: flex; flex-direction: column; gap: 14px;",

                input {
                    style: "font-size: 22px; font-weight: 700; border: 1px solid transparent; padding: 4px;",
                    value: "{project.name}",
                    onchange: move |evt| apply_patch(state, &name_id, ProjectPatch { name: Some(evt.value()), ..Default::default() }),
                }
                textarea {
                    style: "min-height: 80px; border: 1px solid #e5e7eb; border-radius: 6px; padding: 8px; font-family: inherit;",
                    value: "{project.description}",
                    placeholder: "Describe the project",
                    onchange: move |evt| apply_patch(state, &description_id, ProjectPatch { description: Some(evt.value()), ..Default::default() }),
                }

                div {
                    label { style: "font-size: 13px; color: #6b7280;", "Progress" }
                    ProgressBar { progress: project.progress }
                    input {
                        r#type: "range",
                        min: "0",
                        max: "100",
                        value: "{project.progress}",
                        style: "width: 100%;",
                        onchange: move |evt| {
                            match evt.value().parse::<u8>() {
                                Ok(progress) => apply_patch(state, &progress_id, ProjectPatch { progress: Some(progress), ..Default::default() }),
                                Err(e) => tracing::warn!(error = %e, "Ignoring unreadable progress value"),
                            }
                        },
                    }
                }

                div {
                    style: "display: grid; grid-template-columns: repeat(3, 1fr); gap: 12px;",

                    div {
                        label { style: "display: block; font-size: 13px; color: #6b7280;", "Status" }
                        select {
                            style: "width: 100%; padding: 6px;",
                            onchange: move |evt| {
                                if let Ok(status) = ProjectStatus::from_str(&evt.value()) {
                                    apply_patch(state, &status_id, ProjectPatch { status: Some(status), ..Default::default() });
                                }
                            },
                            for status in ProjectStatus::ALL {
                                option { value: "{status.as_str()}", selected: status == current_status, "{status.label()}" }
                            }
                        }
                    }
                    div {
                        label { style: "display: block; font-size: 13px; color: #6b7280;", "Priority" }
                        select {
                            style: "width: 100%; padding: 6px;",
                            onchange: move |evt| {
                                if let Ok(priority) = Priority::from_str(&evt.value()) {
                                    apply_patch(state, &priority_id, ProjectPatch { priority: Some(priority), ..Default::default() });
                                }
                            },
                            for priority in Priority::ALL {
                                option { value: "{priority.as_str()}", selected: priority == current_priority, "{priority.label()}" }
                            }
                        }
                    }
                    div {
                        label { style: "display: block; font-size: 13px; color: #6b7280;", "Due date" }
                        input {
                            r#type: "date",
                            style: "width: 100%; padding: 6px;",
                            value: "{due_value}",
                            onchange: move |evt| {
                                match NaiveDate::parse_from_str(&evt.value(), DATE_INPUT_FORMAT) {
                                    Ok(due_date) => apply_patch(state, &due_id, ProjectPatch { due_date: Some(due_date), ..Default::default() }),
                                    Err(e) => tracing::warn!(error = %e, "Ignoring unreadable due date"),
                                }
                            },
                        }
                    }
                }
            }

            div {
                h2 { style: "font-size: 18px; margin: 0 0 8px;", "Tasks ({tasks.len()})" }
                if tasks.is_empty() {
                    div { style: "padding: 20px; color: #6b7280;", "No tasks for this project yet" }
                } else {
                    div {
                        style: "background: white; border: 1px solid #e5e7eb; border-radius: 8px;",
                        for task in tasks {
                            TaskRow { key: "{task.id}", task: task.as_ref().clone() }
                        }
                    }
                }
            }
        }
    }
}
