//! Dining Table Model

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Dining table status (桌台状态)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub enum TableStatus {
    #[default]
    Available,
    Occupied,
    Reserved,
    Cleaning,
    Maintenance,
}

impl TableStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TableStatus::Available => "available",
            TableStatus::Occupied => "occupied",
            TableStatus::Reserved => "reserved",
            TableStatus::Cleaning => "cleaning",
            TableStatus::Maintenance => "maintenance",
        }
    }
}

impl std::fmt::Display for TableStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for TableStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "available" => Ok(TableStatus::Available),
            "occupied" => Ok(TableStatus::Occupied),
            "reserved" => Ok(TableStatus::Reserved),
            "cleaning" => Ok(TableStatus::Cleaning),
            "maintenance" => Ok(TableStatus::Maintenance),
            other => Err(AppError::invalid(format!("unknown table status: {other}"))),
        }
    }
}

/// Dining table entity (桌台)
///
/// The optional fields travel with the status: an occupied table carries
/// its current order, a reserved table an estimated arrival time. They are
/// not cleared automatically on every status change; only the dedicated
/// clear operation resets them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DiningTable {
    pub id: String,
    pub number: String,
    pub seats: i32,
    pub status: TableStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_order: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub waiter: Option<String>,
}

/// Create dining table payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiningTableCreate {
    pub number: String,
    pub seats: i32,
}

/// Update dining table payload
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct DiningTableUpdate {
    pub number: Option<String>,
    pub seats: Option<i32>,
    pub status: Option<TableStatus>,
    pub current_order: Option<String>,
    pub estimated_time: Option<String>,
    pub waiter: Option<String>,
}
