// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.
//!
//! This module defines the `Notification` struct and `Severity` enum
//! used throughout the notification system.

use crate::ui::design_tokens::palette;
use iced::Color;
use std::time::{Duration, Instant};

/// How long a toast stays fully visible.
pub const VISIBLE_DURATION: Duration = Duration::from_millis(5000);

/// Exit-animation window after the visible phase, rendered faded.
pub const LEAVING_DURATION: Duration = Duration::from_millis(300);

/// Unique identifier for a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    /// Creates a new unique notification ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for NotificationId {
    fn default() -> Self {
        Self::new()
    }
}

/// Severity level determines the accent color. Every severity shares the same
/// lifecycle: 5 seconds visible, then a 300 ms leaving phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    /// Informational message (teal).
    #[default]
    Info,
    /// Operation completed successfully (green).
    Success,
    /// Warning that doesn't block operation (amber).
    Warning,
    /// Error requiring attention (red).
    Error,
}

impl Severity {
    /// Returns the accent color for this severity level.
    #[must_use]
    pub fn color(&self) -> Color {
        match self {
            Severity::Info => palette::INFO_500,
            Severity::Success => palette::SUCCESS_500,
            Severity::Warning => palette::WARNING_500,
            Severity::Error => palette::ERROR_500,
        }
    }
}

/// Display phase of a notification, derived from its age.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Visible,
    /// Between 5000 and 5300 ms: rendered faded, about to be removed.
    Leaving,
    Expired,
}

/// A toast notification to be displayed to the user.
///
/// Text arrives pre-rendered (server messages included), so notifications
/// carry plain strings rather than message keys.
#[derive(Debug, Clone)]
pub struct Notification {
    id: NotificationId,
    severity: Severity,
    text: String,
    created_at: Instant,
}

impl Notification {
    /// Creates a new notification with the given severity and text.
    pub fn new(severity: Severity, text: impl Into<String>) -> Self {
        Self {
            id: NotificationId::new(),
            severity,
            text: text.into(),
            created_at: Instant::now(),
        }
    }

    /// Creates an info notification.
    pub fn info(text: impl Into<String>) -> Self {
        Self::new(Severity::Info, text)
    }

    /// Creates a success notification.
    pub fn success(text: impl Into<String>) -> Self {
        Self::new(Severity::Success, text)
    }

    /// Creates a warning notification.
    pub fn warning(text: impl Into<String>) -> Self {
        Self::new(Severity::Warning, text)
    }

    /// Creates an error notification.
    pub fn error(text: impl Into<String>) -> Self {
        Self::new(Severity::Error, text)
    }

    /// Returns the notification's unique ID.
    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    /// Returns the severity level.
    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Returns the display text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the age of this notification.
    #[must_use]
    pub fn age(&self) -> Duration {
        self.created_at.elapsed()
    }

    /// Returns the current display phase, derived from the age.
    #[must_use]
    pub fn phase(&self) -> Phase {
        let age = self.age();
        if age < VISIBLE_DURATION {
            Phase::Visible
        } else if age < VISIBLE_DURATION + LEAVING_DURATION {
            Phase::Leaving
        } else {
            Phase::Expired
        }
    }

    /// Returns whether this notification should be removed.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.phase() == Phase::Expired
    }

    #[cfg(test)]
    pub(crate) fn backdate(&mut self, by: Duration) {
        self.created_at -= by;
    }
}
