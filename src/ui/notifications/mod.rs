// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! Non-intrusive toasts inform staff about the result of an action (donor
//! notifications sent, export finished, validation failures) without
//! blocking interaction.
//!
//! # Components
//!
//! - [`notification`] - Core `Notification` struct with severity levels
//! - [`manager`] - `Manager` for the live stack and lifecycle
//! - [`toast`] - Toast widget component for rendering notifications
//!
//! # Lifecycle
//!
//! Every toast, regardless of severity, is visible for 5 seconds, fades for
//! a further 300 ms, then is removed. A dismiss button removes it at once.

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Notification, NotificationId, Severity};
pub use toast::Toast;
