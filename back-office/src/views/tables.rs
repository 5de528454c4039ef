//! Dining table views
//!
//! The tables page renders the whole floor as a card grid with no
//! search box or filter dropdown, so the only derived view is the
//! status summary above the layout.

use serde::{Deserialize, Serialize};
use shared::models::{DiningTable, TableStatus};

/// Per-status totals for the floor overview cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct TableStatusCounts {
    pub total: usize,
    pub available: usize,
    pub occupied: usize,
    pub reserved: usize,
    pub cleaning: usize,
    pub maintenance: usize,
}

/// Count tables per status over the whole floor.
pub fn status_counts(tables: &[DiningTable]) -> TableStatusCounts {
    let mut counts = TableStatusCounts {
        total: tables.len(),
        ..TableStatusCounts::default()
    };
    for table in tables {
        match table.status {
            TableStatus::Available => counts.available += 1,
            TableStatus::Occupied => counts.occupied += 1,
            TableStatus::Reserved => counts.reserved += 1,
            TableStatus::Cleaning => counts.cleaning += 1,
            TableStatus::Maintenance => counts.maintenance += 1,
        }
    }
    counts
}
