use dioxus::prelude::*;
use std::sync::Arc;

use crate::domain::project::Project;
use crate::services::ProjectService;
use crate::ui_dioxus::components::{PriorityBadge, ProgressBar, StatusPill};
use crate::ui_dioxus::router::Route;
use crate::ui_dioxus::state::use_app_state;

#[component]
pub fn Dashboard() -> Element {
    let state = use_app_state();
    let mut repository = state.repository;
    let mut new_name = use_signal(String::new);

    let projects: Vec<Arc<Project>> = repository.read().projects.iter().cloned().collect();

    let mut add_project = move || {
        let name = new_name.read().clone();
        let result = ProjectService::new(&mut repository.write()).add(&name);
        if state.report(result, "Project added successfully").is_some() {
            new_name.set(String::new());
        }
    };

    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 20px;",

            div {
                style: "display: flex; justify-content: space-between; align-items: center;",
                h1 { style: "margin: 0; font-size: 24px;", "Dashboard" }
                div {
                    style: "display: flex; gap: 8px;",
                    input {
                        style: "padding: 8px 12px; border: 1px solid #d1d5db; border-radius: 6px; width: 240px;",
                        placeholder: "New project name",
                        value: "{new_name}",
                        oninput: move |evt| new_name.set(evt.value()),
                        onkeydown: move |evt| {
                            if evt.key() == Key::Enter {
                                add_project();
                            }
                        },
                    }
                    button {
                        style: "padding: 8px 16px; background: #2563eb; color: white; border: none; border-radius: 6px; cursor: pointer;",
                        onclick: move |_| add_project(),
                        "➕ Add Project"
                    }
                }
            }

            if projects.is_empty() {
                div { style: "padding: 40px; text-align: center; color: #6b7280;", "No projects yet" }
            }

            div {
                style: "display: grid; grid-template-columns: repeat(auto-fill, minmax(280px, 1fr)); gap: 16px;",
                for project in projects {
                    ProjectCard { key: "{project.id}", project: project.as_ref().clone() }
                }
            }
        }
    }
}

#[component]
fn ProjectCard(project: Project) -> Element {
    let navigator = use_navigator();
    let due = project.due_date.format("%b %-d, %Y").to_string();
    let project_id = project.id.clone();

    rsx! {
        div {
            style: "background: white; border: 1px solid #e5e7eb; border-radius: 8px; padding: 16px;
                   display: flex; flex-direction: column; gap: 12px;",

            div {
                style: "display: flex; justify-content: space-between; align-items: start; gap: 8px;",
                h3 { style: "margin: 0; font-size: 16px;", "{project.name}" }
                PriorityBadge { priority: project.priority }
            }
            p { style: "margin: 0; font-size: 13px; color: #6b7280;", "{project.description}" }
            ProgressBar { progress: project.progress }
            div {
                style: "display: flex; justify-content: space-between; align-items: center; font-size: 12px; color: #6b7280;",
                StatusPill { label: project.status.label() }
                span { "Due {due}" }
            }
            button {
                style: "padding: 6px 12px; border: 1px solid #d1d5db; background: white; border-radius: 6px; cursor: pointer;",
                onclick: move |_| {
                    navigator.push(Route::ProjectDetails { project_id: project_id.clone() });
                },
                "View Details"
            }
        }
    }
}
