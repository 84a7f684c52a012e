// SPDX-License-Identifier: MPL-2.0
//! Core domain types for the staff console.
//!
//! All dashboard data is transient in-memory state: the console renders a
//! seeded snapshot of the portal's server-side tables and never persists any
//! of it. The seed stands in for the rows the portal renders into its HTML.

use chrono::{DateTime, Duration, Local, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;

/// ABO/Rh blood group as used across the portal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BloodGroup {
    #[serde(rename = "A+")]
    APositive,
    #[serde(rename = "A-")]
    ANegative,
    #[serde(rename = "B+")]
    BPositive,
    #[serde(rename = "B-")]
    BNegative,
    #[serde(rename = "AB+")]
    AbPositive,
    #[serde(rename = "AB-")]
    AbNegative,
    #[serde(rename = "O+")]
    OPositive,
    #[serde(rename = "O-")]
    ONegative,
}

impl BloodGroup {
    /// All groups, in the order the portal lists them in pick lists.
    pub const ALL: [BloodGroup; 8] = [
        BloodGroup::APositive,
        BloodGroup::ANegative,
        BloodGroup::BPositive,
        BloodGroup::BNegative,
        BloodGroup::AbPositive,
        BloodGroup::AbNegative,
        BloodGroup::OPositive,
        BloodGroup::ONegative,
    ];

    /// Display label, e.g. `O+`.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            BloodGroup::APositive => "A+",
            BloodGroup::ANegative => "A-",
            BloodGroup::BPositive => "B+",
            BloodGroup::BNegative => "B-",
            BloodGroup::AbPositive => "AB+",
            BloodGroup::AbNegative => "AB-",
            BloodGroup::OPositive => "O+",
            BloodGroup::ONegative => "O-",
        }
    }

    /// ABO letter group, used for badge coloring.
    #[must_use]
    pub fn letter_group(&self) -> LetterGroup {
        match self {
            BloodGroup::APositive | BloodGroup::ANegative => LetterGroup::A,
            BloodGroup::BPositive | BloodGroup::BNegative => LetterGroup::B,
            BloodGroup::AbPositive | BloodGroup::AbNegative => LetterGroup::Ab,
            BloodGroup::OPositive | BloodGroup::ONegative => LetterGroup::O,
        }
    }
}

impl fmt::Display for BloodGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// ABO letter group; each group carries its own badge color in the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LetterGroup {
    A,
    B,
    Ab,
    O,
}

/// Stock level classification for an inventory row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockLevel {
    /// Fewer than 5 units: tinted danger and pulsing.
    Critical,
    /// Fewer than 15 units: tinted warning.
    Low,
    Normal,
}

impl StockLevel {
    /// Classifies a unit count using the portal's thresholds.
    #[must_use]
    pub fn from_units(units: u32) -> Self {
        if units < 5 {
            StockLevel::Critical
        } else if units < 15 {
            StockLevel::Low
        } else {
            StockLevel::Normal
        }
    }
}

/// One pending blood request on the staff dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BloodRequest {
    pub id: u64,
    pub hospital: String,
    pub blood_type: BloodGroup,
    pub units: u32,
    pub needed_by: NaiveDateTime,
    pub created_at: DateTime<Local>,
}

/// One blood-type row of the inventory table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryRow {
    pub blood_type: BloodGroup,
    pub units: u32,
    pub updated_at: DateTime<Local>,
}

impl InventoryRow {
    #[must_use]
    pub fn stock_level(&self) -> StockLevel {
        StockLevel::from_units(self.units)
    }
}

/// Seed requests shown until the user adds their own.
#[must_use]
pub fn seed_requests(now: DateTime<Local>) -> Vec<BloodRequest> {
    let needed = |hours: i64| (now + Duration::hours(hours)).naive_local();
    vec![
        BloodRequest {
            id: 42,
            hospital: "City General Hospital".to_string(),
            blood_type: BloodGroup::OPositive,
            units: 4,
            needed_by: needed(6),
            created_at: now - Duration::hours(2),
        },
        BloodRequest {
            id: 43,
            hospital: "St. Mary Medical Center".to_string(),
            blood_type: BloodGroup::AbNegative,
            units: 2,
            needed_by: needed(12),
            created_at: now - Duration::minutes(45),
        },
        BloodRequest {
            id: 44,
            hospital: "Riverside Clinic".to_string(),
            blood_type: BloodGroup::BPositive,
            units: 6,
            needed_by: needed(24),
            created_at: now - Duration::days(1),
        },
    ]
}

/// Seed inventory covering every blood group.
#[must_use]
pub fn seed_inventory(now: DateTime<Local>) -> Vec<InventoryRow> {
    let units = [23_u32, 11, 17, 4, 8, 2, 31, 14];
    BloodGroup::ALL
        .iter()
        .zip(units)
        .map(|(blood_type, units)| InventoryRow {
            blood_type: *blood_type,
            units,
            updated_at: now - Duration::hours(3),
        })
        .collect()
}
