//! Inventory Item Model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Days ahead of expiry at which an item counts as expiring soon
pub const EXPIRY_ALERT_DAYS: i64 = 3;

/// Inventory category (库存分类)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum InventoryCategory {
    Meat,
    Vegetable,
    Seasoning,
    Beverage,
    Supplies,
}

impl InventoryCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            InventoryCategory::Meat => "meat",
            InventoryCategory::Vegetable => "vegetable",
            InventoryCategory::Seasoning => "seasoning",
            InventoryCategory::Beverage => "beverage",
            InventoryCategory::Supplies => "supplies",
        }
    }
}

impl std::fmt::Display for InventoryCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for InventoryCategory {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "meat" => Ok(InventoryCategory::Meat),
            "vegetable" => Ok(InventoryCategory::Vegetable),
            "seasoning" => Ok(InventoryCategory::Seasoning),
            "beverage" => Ok(InventoryCategory::Beverage),
            "supplies" => Ok(InventoryCategory::Supplies),
            other => Err(AppError::invalid(format!(
                "unknown inventory category: {other}"
            ))),
        }
    }
}

/// Derived stock level (库存状态)
///
/// Never stored on the record; recomputed from quantity and min_stock on
/// every read so it cannot go stale.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum StockStatus {
    Critical,
    Low,
    Good,
}

/// Inventory item entity (库存物品)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItem {
    pub id: String,
    pub name: String,
    pub category: InventoryCategory,
    pub quantity: f64,
    pub unit: String,
    pub min_stock: f64,
    pub supplier: String,
    pub last_updated: NaiveDate,
    pub price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiry_date: Option<NaiveDate>,
}

impl InventoryItem {
    /// Classify current stock against the minimum threshold.
    ///
    /// Both bounds are inclusive and critical wins where they overlap:
    /// quantity ≤ min_stock/2 is critical, quantity ≤ min_stock is low,
    /// anything above is good.
    pub fn stock_status(&self) -> StockStatus {
        if self.quantity <= self.min_stock * 0.5 {
            StockStatus::Critical
        } else if self.quantity <= self.min_stock {
            StockStatus::Low
        } else {
            StockStatus::Good
        }
    }

    /// Whole days until the expiry date, relative to `today`.
    ///
    /// Negative when already expired; `None` when the item has no expiry
    /// date at all.
    pub fn days_until_expiry(&self, today: NaiveDate) -> Option<i64> {
        self.expiry_date
            .map(|expiry| (expiry - today).num_days())
    }

    /// True when the expiry date falls within the alert window
    /// (today up to and including 3 days out). Items without an expiry
    /// date are never flagged.
    pub fn is_expiring_soon(&self, today: NaiveDate) -> bool {
        matches!(
            self.days_until_expiry(today),
            Some(days) if (0..=EXPIRY_ALERT_DAYS).contains(&days)
        )
    }
}

/// Create inventory item payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItemCreate {
    pub name: String,
    pub category: InventoryCategory,
    pub quantity: f64,
    pub unit: String,
    pub min_stock: f64,
    pub supplier: String,
    pub price: f64,
    pub expiry_date: Option<NaiveDate>,
}

/// Update inventory item payload
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItemUpdate {
    pub name: Option<String>,
    pub category: Option<InventoryCategory>,
    pub quantity: Option<f64>,
    pub unit: Option<String>,
    pub min_stock: Option<f64>,
    pub supplier: Option<String>,
    pub price: Option<f64>,
    pub expiry_date: Option<NaiveDate>,
}
