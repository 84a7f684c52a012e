// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The `Manager` owns the list of live notifications and retires them as
//! they age out. It is driven by a periodic tick from the application's
//! subscription, which only runs while notifications exist.

use super::notification::{Notification, NotificationId};

/// Messages that can be sent to the notification manager.
#[derive(Debug, Clone)]
pub enum Message {
    /// Dismiss a specific notification immediately, skipping the leaving phase.
    Dismiss(NotificationId),
}

/// Manages a stack of active notifications.
///
/// Notifications are stored oldest-first, which matches the top-to-bottom
/// rendering order of the toast overlay.
#[derive(Debug, Default)]
pub struct Manager {
    notifications: Vec<Notification>,
}

impl Manager {
    /// Creates a new empty notification manager.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a notification to the stack.
    pub fn push(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }

    /// Handles a notification message.
    pub fn handle_message(&mut self, message: Message) {
        match message {
            Message::Dismiss(id) => self.dismiss(id),
        }
    }

    /// Removes a notification immediately by ID.
    pub fn dismiss(&mut self, id: NotificationId) {
        self.notifications.retain(|n| n.id() != id);
    }

    /// Removes all notifications.
    pub fn clear(&mut self) {
        self.notifications.clear();
    }

    /// Retires notifications that have completed their leaving phase.
    /// Called on every animation tick.
    pub fn tick(&mut self) {
        self.notifications.retain(|n| !n.is_expired());
    }

    /// Returns the live notifications, oldest first.
    #[must_use]
    pub fn visible(&self) -> &[Notification] {
        &self.notifications
    }

    /// Returns whether any notifications are live. The animation tick
    /// subscription is only active while this is true.
    #[must_use]
    pub fn has_notifications(&self) -> bool {
        !self.notifications.is_empty()
    }
}
