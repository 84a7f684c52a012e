// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::api::{NotifyOutcome, QuickStats};
use crate::error::Error;
use crate::ui::dashboard;
use crate::ui::inventory;
use crate::ui::notifications;
use crate::ui::settings;
use crate::ui::sidebar;
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Dashboard(dashboard::Message),
    Inventory(inventory::Message),
    Settings(settings::Message),
    Sidebar(sidebar::Message),
    Notification(notifications::NotificationMessage),
    /// Animation tick for toast aging and the critical-stock pulse.
    Tick(Instant),
    /// Fires once a minute to advance the idle session and header clock.
    MinuteTick,
    /// Fires on the quick-stats refresh interval.
    StatsTick,
    /// Quick-stats fetch settled.
    StatsLoaded(Result<QuickStats, Error>),
    /// The donor-notification confirmation dialog was answered.
    NotifyConfirmResolved { request_id: u64, accepted: bool },
    /// The donor-notification network call settled.
    NotifyCompleted {
        request_id: u64,
        outcome: NotifyOutcome,
    },
    /// Export save dialog plus file write settled. `None` means the user
    /// cancelled the dialog.
    ExportCompleted {
        file_name: &'static str,
        result: Option<Result<PathBuf, Error>>,
    },
    /// Any keyboard or mouse activity, used to reset the idle clock.
    ActivityDetected,
    /// Return from the expired-session screen.
    Reconnect,
    /// Window close was requested; state is flushed before exit.
    WindowCloseRequested(iced::window::Id),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Portal base URL override, takes precedence over the config file.
    pub base_url: Option<String>,
    /// Data directory override (for state files).
    /// Takes precedence over `BLOODLINK_CONSOLE_DATA_DIR`.
    pub data_dir: Option<String>,
    /// Config directory override (for settings.toml).
    /// Takes precedence over `BLOODLINK_CONSOLE_CONFIG_DIR`.
    pub config_dir: Option<String>,
}
