use dioxus::prelude::*;
use std::sync::Arc;

use super::notification_center::NotificationCenter;
use crate::services::AuthService;
use crate::ui_dioxus::router::Route;
use crate::ui_dioxus::state::use_app_state;

#[component]
pub fn Sidebar() -> Element {
    let auth = use_context::<Arc<AuthService>>();
    let mut session = use_app_state().session;
    let signed_in_as = session.read().as_ref().map(|s| s.email.clone());

    rsx! {
        nav {
            style: "width: 220px; min-height: 100vh; background: #0f172a; color: #e2e8f0;
                   padding: 20px 12px; display: flex; flex-direction: column; gap: 4px;",

            div {
                style: "display: flex; justify-content: space-between; align-items: center; padding: 0 8px 16px;",
                div { style: "font-size: 18px; font-weight: 700;", "Projectboard" }
                NotificationCenter {}
            }

            NavItem { route: Route::Dashboard {}, label: "Dashboard", icon: "🏠" }
            NavItem { route: Route::Tasks {}, label: "Tasks", icon: "📝" }
            NavItem { route: Route::Team {}, label: "Team", icon: "👥" }
            NavItem { route: Route::Reports {}, label: "Reports", icon: "📊" }
            NavItem { route: Route::Calendar {}, label: "Calendar", icon: "📅" }

            div { style: "flex: 1;" }

            match signed_in_as {
                Some(email) => rsx! {
                    div { style: "padding: 8px 12px; font-size: 12px; color: #94a3b8;", "Signed in as {email}" }
                    button {
                        style: "padding: 4px 12px; border: none; background: transparent; color: #93c5fd; text-align: left; cursor: pointer;",
                        onclick: move |_| {
                            auth.sign_out();
                            session.set(None);
                        },
                        "Sign out"
                    }
                },
                None => rsx! {
                    NavItem { route: Route::Auth {}, label: "Sign in", icon: "🔑" }
                },
            }
        }
    }
}

#[component]
fn NavItem(route: Route, label: &'static str, icon: &'static str) -> Element {
    let navigator = use_navigator();
    let current = use_route::<Route>();
    let is_active = current == route;
    let background = if is_active { "#1e293b" } else { "transparent" };
    let color = if is_active { "white" } else { "#cbd5e1" };

    rsx! {
        button {
            style: "padding: 8px 12px; border: none; border-radius: 6px; text-align: left; cursor: pointer;
                   font-size: 14px; background: {background}; color: {color};",
            onclick: move |_| {
                navigator.push(route.clone());
            },
            "{icon} {label}"
        }
    }
}

/// Layout of every page that shows the sidebar.
#[component]
pub fn Shell() -> Element {
    rsx! {
        div {
            style: "display: flex; min-height: 100vh; background: #f8fafc; font-family: system-ui, sans-serif;",
            Sidebar {}
            main {
                style: "flex: 1; padding: 24px;",
                Outlet::<Route> {}
            }
        }
    }
}
