// SPDX-License-Identifier: MPL-2.0
//! `bloodlink_console` is a desktop companion client for the BloodLink staff
//! portal, built with the Iced GUI framework.
//!
//! It renders the staff dashboard locally (blood request list, inventory
//! table, quick stats), dispatches donor notifications through the portal's
//! HTTP API, and exports on-screen tables to CSV or Excel-compatible files.

pub mod api;
pub mod app;
pub mod clock;
pub mod domain;
pub mod error;
pub mod export;
pub mod session;
pub mod ui;
