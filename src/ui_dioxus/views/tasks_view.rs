use dioxus::prelude::*;
use std::str::FromStr;
use std::sync::Arc;

use crate::domain::task::{Task, TaskFilter, TaskStatus};
use crate::services::TaskService;
use crate::ui_dioxus::components::PriorityBadge;
use crate::ui_dioxus::state::use_app_state;

#[component]
pub fn TasksView() -> Element {
    let state = use_app_state();
    let mut repository = state.repository;
    let mut filter = use_signal(TaskFilter::default);
    let mut new_title = use_signal(String::new);
    let mut new_project = use_signal(String::new);

    let (tasks, projects): (Vec<Arc<Task>>, Vec<(String, String)>) = {
        let repo = repository.read();
        (
            TaskService::list(&repo, *filter.read()),
            repo.projects.values().map(|p| (p.id.clone(), p.name.clone())).collect(),
        )
    };
    let select_value = selected_project(projects.iter().map(|(id, _)| id.as_str()), &new_project.read());

    let mut add_task = move || {
        let title = new_title.read().clone();
        let project_id = {
            let repo = repository.read();
            selected_project(repo.projects.values().map(|p| p.id.as_str()), &new_project.read())
        };
        let result = TaskService::new(&mut repository.write()).add(&title, &project_id);
        if state.report(result, "Task added successfully").is_some() {
            new_title.set(String::new());
        }
    };

    let filters = std::iter::once(TaskFilter::All).chain(TaskStatus::ALL.into_iter().map(TaskFilter::Status));

    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 20px;",

            h1 { style: "margin: 0; font-size: 24px;", "Tasks" }

            div {
                style: "display: flex; gap: 8px;",
                input {
                    style: "flex: 1; padding: 8px 12px; border: 1px solid #d1d5db; border-radius: 6px;",
                    placeholder: "What needs to be done?",
                    value: "{new_title}",
                    oninput: move |evt| new_title.set(evt.value()),
                    onkeydown: move |evt| {
                        if evt.key() == Key::Enter {
                            add_task();
                        }
                    },
                }
                select {
                    style: "padding: 8px; border: 1px solid #d1d5db; border-radius: 6px;",
                    value: "{select_value}",
                    onchange: move |evt| new_project.set(evt.value()),
                    for (id, name) in projects {
                        option { key: "{id}", value: "{id}", selected: id == select_value, "{name}" }
                    }
                }
                button {
                    style: "padding: 8px 16px; background: #2563eb; color: white; border: none; border-radius: 6px; cursor: pointer;",
                    onclick: move |_| add_task(),
                    "Add Task"
                }
            }

            div {
                style: "display: flex; gap: 8px;",
                for f in filters {
                    button {
                        key: "{f.label()}",
                        style: if f == *filter.read() {
                            "padding: 6px 14px; border-radius: 16px; border: 1px solid #2563eb; background: #2563eb; color: white; cursor: pointer;"
                        } else {
                            "padding: 6px 14px; border-radius: 16px; border: 1px solid #d1d5db; background: white; cursor: pointer;"
                        },
                        onclick: move |_| filter.set(f),
                        {f.label()}
                    }
                }
            }

            if tasks.is_empty() {
                div { style: "padding: 40px; text-align: center; color: #6b7280;", "No tasks found" }
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

/// The project picked in the form, or the first project until the user picks one.
fn selected_project<'a>(mut project_ids: impl Iterator<Item = &'a str>, chosen: &str) -> String {
    if chosen.is_empty() {
        project_ids.next().unwrap_or_default().to_string()
    } else {
        chosen.to_string()
    }
}

#[component]
pub fn TaskRow(task: Task) -> Element {
    let state = use_app_state();
    let mut repository = state.repository;
    let project_name = repository
        .read()
        .project_name(&task.project_id)
        .unwrap_or("Unknown project")
        .to_string();
    let due = task.due_date.format("%b %-d, %Y").to_string();
    let status_id = task.id.clone();
    let delete_id = task.id.clone();
    let current_status = task.status;
    let icon = task.status.icon();
    let title_style = if task.status == TaskStatus::Completed {
        "margin: 0; font-size: 14px; text-decoration: line-through; color: #9ca3af;"
    } else {
        "margin: 0; font-size: 14px;"
    };

    rsx! {
        div {
            style: "display: flex; align-items: center; gap: 12px; padding: 12px 16px; border-bottom: 1px solid #f1f5f9;",

            span { "{icon}" }
            div {
                style: "flex: 1;",
                p { style: "{title_style}", "{task.title}" }
                p { style: "margin: 2px 0 0; font-size: 12px; color: #6b7280;", "{project_name} · Due {due}" }
            }
            PriorityBadge { priority: task.priority }
            select {
                style: "padding: 4px 8px; border: 1px solid #d1d5db; border-radius: 6px;",
                onchange: move |evt| {
                    match TaskStatus::from_str(&evt.value()) {
                        Ok(status) => {
                            let result = TaskService::new(&mut repository.write()).update_status(&status_id, status);
                            state.report(result, "Task status updated");
                        }
                        Err(reason) => tracing::warn!(reason = %reason, "Ignoring unknown status"),
                    }
                },
                for status in TaskStatus::ALL {
                    option {
                        key: "{status.as_str()}",
                        value: "{status.as_str()}",
                        selected: status == current_status,
                        "{status.label()}"
                    }
                }
            }
            button {
                style: "border: none; background: transparent; cursor: pointer; color: #dc2626;",
                onclick: move |_| {
                    let result = TaskService::new(&mut repository.write()).remove(&delete_id);
                    state.report(result, "Task deleted");
                },
                "🗑"
            }
        }
    }
}
