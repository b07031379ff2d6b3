use std::sync::Arc;

use super::error_handling::{BoardError, BoardResult, LogHelper, LogRejection};
use crate::domain::Entity;
use crate::domain::notification::{Notification, NotificationKind};
use crate::repository::Repository;

pub struct NotificationService<'a> {
    repository: &'a mut Repository,
}

impl<'a> NotificationService<'a> {
    pub fn new(repository: &'a mut Repository) -> Self {
        Self { repository }
    }

    pub fn push(&mut self, title: &str, message: &str, kind: NotificationKind) -> Arc<Notification> {
        let id = self.repository.notifications.next_id();
        let notification = self
            .repository
            .notifications
            .insert(Notification::new(id, title, message, kind));
        LogHelper::log_mutation(Notification::KIND, "push", &notification.id);
        notification
    }

    pub fn mark_read(&mut self, id: &str) -> BoardResult<Arc<Notification>> {
        let notification = self
            .repository
            .notifications
            .update(id, |n| n.read = true)
            .ok_or_else(|| BoardError::not_found(Notification::KIND, id))
            .log_rejection(Notification::KIND, "mark_read")?;
        LogHelper::log_mutation(Notification::KIND, "mark_read", id);
        Ok(notification)
    }

    /// Marks every notification read. Returns how many were unread.
    pub fn mark_all_read(&mut self) -> usize {
        self.repository.notifications.update_all(|n| {
            let was_unread = !n.read;
            n.read = true;
            was_unread
        })
    }

    pub fn dismiss(&mut self, id: &str) -> BoardResult<Arc<Notification>> {
        let removed = self
            .repository
            .notifications
            .remove(id)
            .ok_or_else(|| BoardError::not_found(Notification::KIND, id))
            .log_rejection(Notification::KIND, "dismiss")?;
        LogHelper::log_mutation(Notification::KIND, "dismiss", id);
        Ok(removed)
    }

    pub fn unread_count(repository: &Repository) -> usize {
        repository.notifications.values().filter(|n| !n.read).count()
    }
}
