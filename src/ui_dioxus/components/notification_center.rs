use dioxus::prelude::*;

use crate::domain::notification::Notification;
use crate::services::NotificationService;
use crate::ui_dioxus::state::use_app_state;

#[component]
pub fn NotificationCenter() -> Element {
    let state = use_app_state();
    let mut repository = state.repository;
    let mut open = use_signal(|| false);

    let (notifications, unread) = {
        let repo = repository.read();
        (repo.notifications.to_vec(), NotificationService::unread_count(&repo))
    };

    rsx! {
        div {
            style: "position: relative;",

            button {
                style: "position: relative; border: none; background: transparent; cursor: pointer; font-size: 20px;",
                onclick: move |_| {
                    let now_open = !*open.read();
                    open.set(now_open);
                },
                "🔔"
                if unread > 0 {
                    span {
                        style: "position: absolute; top: -4px; right: -6px; background: #dc2626; color: white;
                               border-radius: 9px; min-width: 18px; height: 18px; font-size: 10px;
                               display: flex; align-items: center; justify-content: center;",
                        "{unread}"
                    }
                }
            }

            if *open.read() {
                div {
                    style: "position: absolute; left: 0; top: 32px; width: 320px; background: white; z-index: 100;
                           border: 1px solid #e5e7eb; border-radius: 8px; box-shadow: 0 8px 24px rgba(0,0,0,0.12);",

                    div {
                        style: "display: flex; justify-content: space-between; align-items: center;
                               padding: 8px 16px; border-bottom: 1px solid #e5e7eb;",
                        h3 { style: "margin: 0; font-size: 15px; font-weight: 600;", "Notifications" }
                        if unread > 0 {
                            button {
                                style: "border: none; background: transparent; cursor: pointer; font-size: 12px;",
                                onclick: move |_| {
                                    NotificationService::new(&mut repository.write()).mark_all_read();
                                },
                                "Mark all read"
                            }
                        }
                    }

                    if notifications.is_empty() {
                        div { style: "padding: 16px; text-align: center; color: #6b7280;", "No notifications" }
                    } else {
                        div {
                            style: "max-height: 300px; overflow-y: auto;",
                            for notification in notifications {
                                NotificationItem { key: "{notification.id}", notification: notification.clone() }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn NotificationItem(notification: Notification) -> Element {
    let state = use_app_state();
    let mut repository = state.repository;
    let background = if notification.read { "white" } else { "#f1f5f9" };
    let timestamp = notification
        .timestamp
        .with_timezone(&chrono::Local)
        .format("%b %-d, %Y %H:%M")
        .to_string();
    let read_id = notification.id.clone();
    let dismiss_id = notification.id.clone();
    let is_read = notification.read;
    let dot_color = notification.kind.dot_color();

    rsx! {
        div {
            style: "padding: 12px 16px; border-bottom: 1px solid #f1f5f9; cursor: pointer; background: {background};",
            onclick: move |_| {
                if !is_read {
                    if let Err(e) = NotificationService::new(&mut repository.write()).mark_read(&read_id) {
                        state.error(&e);
                    }
                }
            },

            div {
                style: "display: flex; justify-content: space-between; gap: 8px;",
                div {
                    style: "display: flex; gap: 8px;",
                    div {
                        style: "width: 8px; height: 8px; border-radius: 4px; margin-top: 6px; background: {dot_color};",
                    }
                    div {
                        p { style: "margin: 0; font-weight: 500; font-size: 14px;", "{notification.title}" }
                        p { style: "margin: 4px 0 0; font-size: 12px; color: #6b7280;", "{notification.message}" }
                        p { style: "margin: 4px 0 0; font-size: 12px; color: #9ca3af;", "{timestamp}" }
                    }
                }
                button {
                    style: "border: none; background: transparent; cursor: pointer;",
                    onclick: move |evt| {
                        evt.stop_propagation();
                        if let Err(e) = NotificationService::new(&mut repository.write()).dismiss(&dismiss_id) {
                            state.error(&e);
                        }
                    },
                    "✕"
                }
            }
        }
    }
}
