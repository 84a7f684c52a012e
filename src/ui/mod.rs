// SPDX-License-Identifier: MPL-2.0
//! UI components and screens for the staff console.

pub mod badge;
pub mod dashboard;
pub mod design_tokens;
pub mod inventory;
pub mod notifications;
pub mod settings;
pub mod sidebar;
pub mod styles;
pub mod theming;
