use dioxus::prelude::*;
use std::sync::Arc;

use crate::config::AppConfig;
use crate::domain::toast::ToastQueue;
use crate::repository::Repository;
use crate::services::AuthService;
use crate::ui_dioxus::components::ToastStack;
use crate::ui_dioxus::router::Route;
use crate::ui_dioxus::state::AppState;

#[component]
pub fn App() -> Element {
    // Handed in through the desktop launch contexts; defaults when rendered elsewhere.
    let config = try_use_context::<AppConfig>().unwrap_or_default();
    let toast_ttl = config.toast_ttl();

    let repository = use_signal(Repository::seeded);
    let toasts = use_signal(ToastQueue::default);
    let session = use_signal(|| None);

    use_context_provider(|| AppState {
        repository,
        toasts,
        session,
        toast_ttl,
    });
    use_context_provider(|| Arc::new(AuthService::from_config(&config.auth)));
    use_context_provider(|| config.clone());

    rsx! {
        Router::<Route> {}
        ToastStack {}
    }
}
