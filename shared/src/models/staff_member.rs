//! Staff Member Model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Staff position (岗位)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum StaffPosition {
    Manager,
    Waiter,
    Chef,
    Cashier,
}

impl StaffPosition {
    pub fn as_str(&self) -> &'static str {
        match self {
            StaffPosition::Manager => "manager",
            StaffPosition::Waiter => "waiter",
            StaffPosition::Chef => "chef",
            StaffPosition::Cashier => "cashier",
        }
    }
}

impl std::fmt::Display for StaffPosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for StaffPosition {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "manager" => Ok(StaffPosition::Manager),
            "waiter" => Ok(StaffPosition::Waiter),
            "chef" => Ok(StaffPosition::Chef),
            "cashier" => Ok(StaffPosition::Cashier),
            other => Err(AppError::invalid(format!("unknown position: {other}"))),
        }
    }
}

/// Staff employment status (在职状态)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum StaffStatus {
    Active,
    Inactive,
    OnLeave,
}

impl StaffStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            StaffStatus::Active => "active",
            StaffStatus::Inactive => "inactive",
            StaffStatus::OnLeave => "onLeave",
        }
    }
}

impl std::fmt::Display for StaffStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for StaffStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(StaffStatus::Active),
            "inactive" => Ok(StaffStatus::Inactive),
            "onLeave" => Ok(StaffStatus::OnLeave),
            other => Err(AppError::invalid(format!("unknown staff status: {other}"))),
        }
    }
}

/// Staff member entity (员工)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StaffMember {
    pub id: String,
    pub name: String,
    pub position: StaffPosition,
    pub phone: String,
    pub email: String,
    pub status: StaffStatus,
    pub hire_date: NaiveDate,
    pub salary: f64,
}

/// Create staff member payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaffMemberCreate {
    pub name: String,
    pub position: StaffPosition,
    pub phone: String,
    pub email: String,
    pub status: StaffStatus,
    pub hire_date: NaiveDate,
    pub salary: f64,
}

/// Update staff member payload
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct StaffMemberUpdate {
    pub name: Option<String>,
    pub position: Option<StaffPosition>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub status: Option<StaffStatus>,
    pub hire_date: Option<NaiveDate>,
    pub salary: Option<f64>,
}
