use dioxus::prelude::*;
use std::time::Duration;
use tracing::warn;

use crate::domain::toast::{ToastLevel, ToastQueue};
use crate::repository::Repository;
use crate::services::auth::AuthSession;
use crate::services::error_handling::{BoardError, BoardResult, UserErrorFormatter};

/// Handles shared by every page: the one store and the toast queue.
#[derive(Clone, Copy, PartialEq)]
pub struct AppState {
    pub repository: Signal<Repository>,
    pub toasts: Signal<ToastQueue>,
    pub session: Signal<Option<AuthSession>>,
    pub toast_ttl: Duration,
}

impl AppState {
    pub fn toast(&self, level: ToastLevel, title: Option<String>, message: impl Into<String>) {
        let mut toasts = self.toasts;
        let id = toasts.write().push(level, title, message);
        let ttl = self.toast_ttl;
        spawn(async move {
            tokio::time::sleep(ttl).await;
            toasts.write().dismiss(id);
        });
    }

    pub fn success(&self, message: impl Into<String>) {
        self.toast(ToastLevel::Success, None, message);
    }

    pub fn info(&self, message: impl Into<String>) {
        self.toast(ToastLevel::Info, None, message);
    }

    pub fn error(&self, error: &BoardError) {
        warn!(error = %error, "Surfacing error to user");
        self.toast(ToastLevel::Error, None, UserErrorFormatter::format_board_error(error));
    }

    /// Toasts `success` or the error, and hands back the value on success.
    pub fn report<T>(&self, result: BoardResult<T>, success: &str) -> Option<T> {
        match result {
            Ok(value) => {
                self.success(success);
                Some(value)
            }
            Err(error) => {
                self.error(&error);
                None
            }
        }
    }
}

pub fn use_app_state() -> AppState {
    use_context::<AppState>()
}
