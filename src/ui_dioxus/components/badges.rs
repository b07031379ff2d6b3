use dioxus::prelude::*;

use crate::domain::priority::Priority;
use crate::domain::project::ProgressTone;

#[component]
pub fn ProgressBar(progress: u8) -> Element {
    let color = ProgressTone::for_progress(progress).css_color();

    rsx! {
        div {
            style: "display: flex; align-items: center; gap: 8px;",
            div {
                style: "flex: 1; height: 8px; background: #e5e7eb; border-radius: 4px; overflow: hidden;",
                div { style: "height: 100%; width: {progress}%; background: {color};" }
            }
            span { style: "font-size: 12px; color: #6b7280; min-width: 36px; text-align: right;", "{progress}%" }
        }
    }
}

#[component]
pub fn PriorityBadge(priority: Priority) -> Element {
    let (fg, bg) = priority.badge_colors();
    let label = priority.label();

    rsx! {
        span {
            style: "padding: 2px 8px; border-radius: 10px; font-size: 12px; font-weight: 500;
                   color: {fg}; background: {bg};",
            "{label}"
        }
    }
}

/// Small pill for any status label.
#[component]
pub fn StatusPill(label: &'static str) -> Element {
    rsx! {
        span {
            style: "padding: 2px 8px; border-radius: 10px; font-size: 12px; background: #f1f5f9; color: #334155;",
            "{label}"
        }
    }
}
