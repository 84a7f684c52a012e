// SPDX-License-Identifier: MPL-2.0
//! Snapshots of on-screen tables.
//!
//! Export works on a [`DataTable`] captured at click time, so a save dialog
//! left open does not pick up rows added afterwards.

use crate::clock;
use crate::domain::{BloodRequest, InventoryRow, StockLevel};

/// Table id of the dashboard requests table.
pub const REQUESTS_TABLE_ID: &str = "requestsTable";

/// Table id of the inventory table.
pub const INVENTORY_TABLE_ID: &str = "inventoryTable";

/// Rectangular snapshot of one on-screen table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataTable {
    pub id: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl DataTable {
    /// A table with no headers and no rows; serializes to an empty document.
    #[must_use]
    pub fn empty(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            headers: Vec::new(),
            rows: Vec::new(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.headers.is_empty() && self.rows.is_empty()
    }
}

/// Captures the table identified by `table_id`.
///
/// An unknown id yields an empty table; the export still writes a file, it is
/// just empty.
#[must_use]
pub fn snapshot(
    table_id: &str,
    requests: &[BloodRequest],
    inventory: &[InventoryRow],
) -> DataTable {
    match table_id {
        REQUESTS_TABLE_ID => requests_table(requests),
        INVENTORY_TABLE_ID => inventory_table(inventory),
        _ => DataTable::empty(table_id),
    }
}

/// Snapshot of the dashboard requests table.
#[must_use]
pub fn requests_table(requests: &[BloodRequest]) -> DataTable {
    DataTable {
        id: REQUESTS_TABLE_ID.to_string(),
        headers: ["Request", "Hospital", "Blood Type", "Units", "Needed By", "Requested"]
            .map(String::from)
            .to_vec(),
        rows: requests
            .iter()
            .map(|request| {
                vec![
                    format!("#{}", request.id),
                    request.hospital.clone(),
                    request.blood_type.label().to_string(),
                    request.units.to_string(),
                    request.needed_by.format("%b %-d, %Y, %I:%M %p").to_string(),
                    clock::format_date(request.created_at),
                ]
            })
            .collect(),
    }
}

/// Snapshot of the inventory table.
#[must_use]
pub fn inventory_table(inventory: &[InventoryRow]) -> DataTable {
    DataTable {
        id: INVENTORY_TABLE_ID.to_string(),
        headers: ["Blood Type", "Units Available", "Status", "Last Updated"]
            .map(String::from)
            .to_vec(),
        rows: inventory
            .iter()
            .map(|row| {
                vec![
                    row.blood_type.label().to_string(),
                    row.units.to_string(),
                    stock_label(row.stock_level()).to_string(),
                    clock::format_date(row.updated_at),
                ]
            })
            .collect(),
    }
}

fn stock_label(level: StockLevel) -> &'static str {
    match level {
        StockLevel::Critical => "Critical",
        StockLevel::Low => "Low",
        StockLevel::Normal => "Normal",
    }
}
