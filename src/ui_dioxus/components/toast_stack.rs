use dioxus::prelude::*;

use crate::domain::toast::Toast;
use crate::ui_dioxus::state::use_app_state;

#[component]
pub fn ToastStack() -> Element {
    let state = use_app_state();
    let visible: Vec<Toast> = state.toasts.read().iter().cloned().collect();

    rsx! {
        div {
            style: "position: fixed; bottom: 20px; right: 20px; z-index: 2000;
                   display: flex; flex-direction: column; gap: 8px; width: 320px;",

            for toast in visible {
                ToastItem { key: "{toast.id}", toast: toast.clone() }
            }
        }
    }
}

#[component]
fn ToastItem(toast: Toast) -> Element {
    let mut toasts = use_app_state().toasts;
    let (fg, bg) = toast.level.colors();
    let id = toast.id;

    rsx! {
        div {
            style: "background: {bg}; color: {fg}; padding: 12px 16px; border-radius: 8px;
                   box-shadow: 0 4px 12px rgba(0,0,0,0.15); display: flex;
                   justify-content: space-between; align-items: start; gap: 8px;",

            div {
                if let Some(title) = &toast.title {
                    div { style: "font-weight: 600; margin-bottom: 2px;", "{title}" }
                }
                div { style: "font-size: 14px;", "{toast.message}" }
            }

            button {
                style: "border: none; background: transparent; cursor: pointer; font-size: 14px; color: {fg};",
                onclick: move |_| toasts.write().dismiss(id),
                "✕"
            }
        }
    }
}
