use dioxus::prelude::*;

use crate::ui_dioxus::router::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let navigator = use_navigator();
    let path = format!("/{}", segments.join("/"));

    rsx! {
        div {
            style: "padding: 60px; text-align: center;",
            h1 { style: "font-size: 48px; margin: 0;", "404" }
            p { style: "color: #6b7280;", "Oops! Page not found: {path}" }
            button {
                style: "padding: 8px 16px; background: #2563eb; color: white; border: none; border-radius: 6px; cursor: pointer;",
                onclick: move |_| {
                    navigator.push(Route::Dashboard {});
                },
                "Return to Home"
            }
        }
    }
}
