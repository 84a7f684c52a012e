// SPDX-License-Identifier: MPL-2.0
//! Top-level screens of the staff console.

/// Which screen is currently shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Dashboard,
    Inventory,
    Settings,
    /// Shown after 30 idle minutes; only Reconnect leaves it.
    SessionExpired,
}
