use dioxus::prelude::*;
use tracing::warn;

use crate::config::AppConfig;
use crate::domain::notification::NotificationKind;
use crate::domain::toast::ToastLevel;
use crate::services::analytics::AnalyticsSummary;
use crate::services::error_handling::UserErrorFormatter;
use crate::services::{report_export, reports, NotificationService};
use crate::ui_dioxus::components::AnalyticsDashboard;
use crate::ui_dioxus::state::use_app_state;

#[component]
pub fn ReportsView() -> Element {
    let state = use_app_state();
    let mut repository = state.repository;
    let config = use_context::<AppConfig>();
    let mut refreshing = use_signal(|| false);
    let mut last_refreshed = use_signal(|| None::<String>);

    let summary = {
        let repo = repository.read();
        AnalyticsSummary::compute(repo.projects.values(), repo.tasks.values())
    };
    let export_summary = summary.clone();
    let refresh_delay = config.refresh_delay();
    let export_dir = config.export_dir.clone();

    let refresh = move |_: MouseEvent| {
        if *refreshing.read() {
            return;
        }
        refreshing.set(true);
        spawn(async move {
            let at = reports::simulate_refresh(refresh_delay).await;
            let stamp = at.with_timezone(&chrono::Local).format("%H:%M:%S").to_string();
            NotificationService::new(&mut repository.write()).push(
                "Reports refreshed",
                &format!("Report data refreshed at {}", stamp),
                NotificationKind::Success,
            );
            last_refreshed.set(Some(stamp));
            refreshing.set(false);
            state.success("Report data refreshed");
        });
    };

    let export = move |_: MouseEvent| {
        let path = reports::default_export_path(export_dir.clone());
        match report_export::export_to_file(&export_summary, &path) {
            Ok(()) => state.success("Report exported to CSV"),
            Err(e) => {
                warn!(error = %e, path = %path.display(), "Report export failed");
                state.toast(ToastLevel::Error, Some("Export failed".to_string()), UserErrorFormatter::format_for_ui(&e));
            }
        }
    };

    let is_refreshing = *refreshing.read();
    let last_stamp = last_refreshed.read().clone();

    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 20px;",

            div {
                style: "display: flex; justify-content: space-between; align-items: center;",
                div {
                    h1 { style: "margin: 0; font-size: 24px;", "Reports & Analytics" }
                    if let Some(stamp) = last_stamp {
                        p { style: "margin: 4px 0 0; font-size: 12px; color: #6b7280;", "Last refreshed at {stamp}" }
                    }
                }
                div {
                    style: "display: flex; gap: 8px;",
                    button {
                        style: "padding: 8px 16px; border: 1px solid #d1d5db; background: white; border-radius: 6px; cursor: pointer;",
                        disabled: is_refreshing,
                        onclick: refresh,
                        if is_refreshing { "Refreshing..." } else { "🔄 Refresh" }
                    }
                    button {
                        style: "padding: 8px 16px; background: #2563eb; color: white; border: none; border-radius: 6px; cursor: pointer;",
                        onclick: export,
                        "⬇ Export CSV"
                    }
                }
            }

            AnalyticsDashboard { summary: summary }
        }
    }
}
