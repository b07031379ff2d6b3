use dioxus::prelude::*;
use std::sync::Arc;

use crate::domain::team_member::{MemberPatch, NewMember, ROLE_SUGGESTIONS, TeamMember};
use crate::services::TeamService;
use crate::ui_dioxus::state::use_app_state;

/// Which member the dialog is editing; `None` while adding.
#[derive(Clone, PartialEq)]
struct MemberDialog {
    editing: Option<String>,
    draft: NewMember,
}

impl MemberDialog {
    fn adding() -> Self {
        Self { editing: None, draft: NewMember::default() }
    }

    fn editing(member: &TeamMember) -> Self {
        Self {
            editing: Some(member.id.clone()),
            draft: NewMember::new(member.name.clone(), member.email.clone(), member.role.clone())
                .with_projects(member.project_ids.clone()),
        }
    }
}

#[component]
pub fn TeamView() -> Element {
    let state = use_app_state();
    let repository = state.repository;
    let mut query = use_signal(String::new);
    let mut dialog = use_signal(|| None::<MemberDialog>);

    let members: Vec<Arc<TeamMember>> = TeamService::search(&repository.read(), &query.read());

    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 20px;",

            div {
                style: "display: flex; justify-content: space-between; align-items: center;",
                h1 { style: "margin: 0; font-size: 24px;", "Team Members" }
                button {
                    style: "padding: 8px 16px; background: #2563eb; color: white; border: none; border-radius: 6px; cursor: pointer;",
                    onclick: move |_| dialog.set(Some(MemberDialog::adding())),
                    "➕ Add Member"
                }
            }

            input {
                style: "padding: 8px 12px; border: 1px solid #d1d5db; border-radius: 6px; max-width: 360px;",
                placeholder: "Search by name, email or role",
                value: "{query}",
                oninput: move |evt| query.set(evt.value()),
            }

            if members.is_empty() {
                div { style: "padding: 40px; text-align: center; color: #6b7280;", "No team members found" }
            } else {
                table {
                    style: "width: 100%; background: white; border: 1px solid #e5e7eb; border-radius: 8px; border-collapse: collapse;",
                    thead {
                        tr {
                            style: "text-align: left; font-size: 13px; color: #6b7280;",
                            th { style: "padding: 10px 16px;", "Member" }
                            th { style: "padding: 10px 16px;", "Role" }
                            th { style: "padding: 10px 16px;", "Projects" }
                            th { style: "padding: 10px 16px; text-align: right;", "Actions" }
                        }
                    }
                    tbody {
                        for member in members {
                            MemberRow { key: "{member.id}", member: member.as_ref().clone(), dialog: dialog }
                        }
                    }
                }
            }

            if dialog.read().is_some() {
                MemberDialogView { dialog: dialog }
            }
        }
    }
}

#[component]
fn MemberRow(member: TeamMember, dialog: Signal<Option<MemberDialog>>) -> Element {
    let state = use_app_state();
    let mut repository = state.repository;
    let mut dialog = dialog;
    let projects = TeamService::project_names(&repository.read(), &member).join(", ");
    let invite_id = member.id.clone();
    let remove_id = member.id.clone();
    let edit_target = member.clone();

    rsx! {
        tr {
            style: "border-top: 1px solid #f1f5f9;",
            td {
                style: "padding: 10px 16px;",
                div {
                    style: "display: flex; align-items: center; gap: 10px;",
                    img { src: "{member.avatar}", style: "width: 32px; height: 32px; border-radius: 16px;" }
                    div {
                        div { style: "font-weight: 500;", "{member.name}" }
                        div { style: "font-size: 12px; color: #6b7280;", "{member.email}" }
                    }
                }
            }
            td { style: "padding: 10px 16px; font-size: 14px;", "{member.role}" }
            td { style: "padding: 10px 16px; font-size: 13px; color: #374151;", "{projects}" }
            td {
                style: "padding: 10px 16px; text-align: right; white-space: nowrap;",
                button {
                    style: "margin-left: 4px; padding: 4px 10px; border: 1px solid #d1d5db; background: white; border-radius: 6px; cursor: pointer;",
                    onclick: move |_| {
                        let result = TeamService::new(&mut repository.write()).invite(&invite_id);
                        match result {
                            Ok(message) => state.success(message),
                            Err(e) => state.error(&e),
                        }
                    },
                    "✉ Invite"
                }
                button {
                    style: "margin-left: 4px; padding: 4px 10px; border: 1px solid #d1d5db; background: white; border-radius: 6px; cursor: pointer;",
                    onclick: move |_| dialog.set(Some(MemberDialog::editing(&edit_target))),
                    "Edit"
                }
                button {
                    style: "margin-left: 4px; padding: 4px 10px; border: 1px solid #fecaca; color: #dc2626; background: white; border-radius: 6px; cursor: pointer;",
                    onclick: move |_| {
                        let result = TeamService::new(&mut repository.write()).remove(&remove_id);
                        state.report(result, "Team member removed successfully");
                    },
                    "Remove"
                }
            }
        }
    }
}

#[component]
fn MemberDialogView(dialog: Signal<Option<MemberDialog>>) -> Element {
    let state = use_app_state();
    let mut repository = state.repository;
    let mut dialog = dialog;

    let Some(current) = dialog.read().clone() else {
        return rsx! {};
    };
    let projects: Vec<(String, String)> = repository
        .read()
        .projects
        .values()
        .map(|p| (p.id.clone(), p.name.clone()))
        .collect();
    let title = if current.editing.is_some() { "Edit Team Member" } else { "Add Team Member" };
    let draft = current.draft.clone();

    let mut edit_draft = move |change: &dyn Fn(&mut NewMember)| {
        if let Some(open) = dialog.write().as_mut() {
            change(&mut open.draft);
        }
    };

    let save = move |_: MouseEvent| {
        let Some(current) = dialog.read().clone() else {
            return;
        };
        let saved = match &current.editing {
            Some(id) => {
                let patch = MemberPatch {
                    name: Some(current.draft.name.clone()),
                    email: Some(current.draft.email.clone()),
                    role: Some(current.draft.role.clone()),
                    project_ids: Some(current.draft.project_ids.clone()),
                };
                let result = TeamService::new(&mut repository.write()).update(id, &patch);
                state.report(result, "Team member updated successfully").is_some()
            }
            None => {
                let result = TeamService::new(&mut repository.write()).add(&current.draft);
                state.report(result, "Team member added successfully").is_some()
            }
        };
        if saved {
            dialog.set(None);
        }
    };

    rsx! {
        div {
            style: "position: fixed; top: 0; left: 0; right: 0; bottom: 0; background: rgba(0, 0, 0, 0.5);
                   display: flex; align-items: center; justify-content: center; z-index: 1000;",
            onclick: move |_| dialog.set(None),

            div {
                style: "background: white; border-radius: 8px; padding: 24px; width: 440px;
                       box-shadow: 0 10px 25px rgba(0, 0, 0, 0.2); display: flex; flex-direction: column; gap: 12px;",
                onclick: move |e| e.stop_propagation(),

                h3 { style: "margin: 0; font-size: 18px; font-weight: 600;", "{title}" }

                label { style: "font-size: 13px; color: #6b7280;", "Name" }
                input {
                    style: "padding: 8px; border: 1px solid #d1d5db; border-radius: 6px;",
                    value: "{draft.name}",
                    oninput: move |evt| {
                        let value = evt.value();
                        edit_draft(&|d: &mut NewMember| d.name = value.clone());
                    },
                }
                label { style: "font-size: 13px; color: #6b7280;", "Email" }
                input {
                    r#type: "email",
                    style: "padding: 8px; border: 1px solid #d1d5db; border-radius: 6px;",
                    value: "{draft.email}",
                    oninput: move |evt| {
                        let value = evt.value();
                        edit_draft(&|d: &mut NewMember| d.email = value.clone());
                    },
                }
                label { style: "font-size: 13px; color: #6b7280;", "Role" }
                select {
                    style: "padding: 8px; border: 1px solid #d1d5db; border-radius: 6px;",
                    onchange: move |evt| {
                        let value = evt.value();
                        edit_draft(&|d: &mut NewMember| d.role = value.clone());
                    },
                    option { value: "", selected: draft.role.is_empty(), "Select a role" }
                    for role in ROLE_SUGGESTIONS {
                        option { key: "{role}", value: "{role}", selected: draft.role == role, "{role}" }
                    }
                }

                label { style: "font-size: 13px; color: #6b7280;", "Projects" }
                div {
                    style: "display: flex; flex-wrap: wrap; gap: 6px;",
                    for (id, name) in projects {
                        ProjectToggle {
                            key: "{id}",
                            dialog: dialog,
                            selected: draft.project_ids.contains(&id),
                            project_id: id.clone(),
                            label: name,
                        }
                    }
                }

                div {
                    style: "display: flex; gap: 12px; justify-content: flex-end; margin-top: 8px;",
                    button {
                        style: "padding: 8px 16px; border: 1px solid #d1d5db; background: white; border-radius: 6px; cursor: pointer;",
                        onclick: move |_| dialog.set(None),
                        "Cancel"
                    }
                    button {
                        style: "padding: 8px 16px; border: none; background: #2563eb; color: white; border-radius: 6px; cursor: pointer;",
                        onclick: save,
                        "Save"
                    }
                }
            }
        }
    }
}

#[component]
fn ProjectToggle(dialog: Signal<Option<MemberDialog>>, selected: bool, project_id: String, label: String) -> Element {
    let mut dialog = dialog;
    let (bg, fg) = if selected { ("#2563eb", "white") } else { ("#f1f5f9", "#334155") };

    rsx! {
        button {
            style: "padding: 4px 10px; border: none; border-radius: 12px; cursor: pointer; font-size: 12px;
                   background: {bg}; color: {fg};",
            onclick: move |_| {
                if let Some(open) = dialog.write().as_mut() {
                    open.draft.toggle_project(&project_id);
                }
            },
            "{label}"
        }
    }
}
