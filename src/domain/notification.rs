use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Entity;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Notification {
    pub id: String,
    pub title: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub read: bool,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "kebab-case")]
pub enum NotificationKind {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

impl NotificationKind {
    pub fn dot_color(&self) -> &'static str {
        match self {
            NotificationKind::Success => "#22c55e",
            NotificationKind::Warning => "#eab308",
            NotificationKind::Error => "#ef4444",
            NotificationKind::Info => "#3b82f6",
        }
    }
}

impl Notification {
    pub fn new(id: String, title: impl Into<String>, message: impl Into<String>, kind: NotificationKind) -> Self {
        Self {
            id,
            title: title.into(),
            message: message.into(),
            timestamp: Utc::now(),
            read: false,
            kind,
        }
    }
}

impl Entity for Notification {
    const KIND: &'static str = "Notification";
    const ID_PREFIX: &'static str = "notification";

    fn id(&self) -> &str {
        &self.id
    }
}
