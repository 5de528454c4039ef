//! Order Model

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Order lifecycle status (订单状态)
///
/// Normal flow is pending → confirmed → preparing → ready → served →
/// completed, with cancelled reachable from any state. The flow is
/// advisory only: no transition table is enforced and the frontend offers
/// every transition unconditionally.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub enum OrderStatus {
    #[default]
    Pending,
    Confirmed,
    Preparing,
    Ready,
    Served,
    Completed,
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Confirmed => "confirmed",
            OrderStatus::Preparing => "preparing",
            OrderStatus::Ready => "ready",
            OrderStatus::Served => "served",
            OrderStatus::Completed => "completed",
            OrderStatus::Cancelled => "cancelled",
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for OrderStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(OrderStatus::Pending),
            "confirmed" => Ok(OrderStatus::Confirmed),
            "preparing" => Ok(OrderStatus::Preparing),
            "ready" => Ok(OrderStatus::Ready),
            "served" => Ok(OrderStatus::Served),
            "completed" => Ok(OrderStatus::Completed),
            "cancelled" => Ok(OrderStatus::Cancelled),
            other => Err(AppError::invalid(format!("unknown order status: {other}"))),
        }
    }
}

/// Order entity (订单)
///
/// `items` holds dish name snapshots taken when the order was placed, not
/// live product references. `time` is the relative display text the
/// frontend shows ("10分钟前").
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub table_number: String,
    pub customer_name: String,
    pub items: Vec<String>,
    pub total: f64,
    pub status: OrderStatus,
    pub time: String,
    pub waiter: String,
}

/// Create order payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderCreate {
    pub table_number: String,
    pub customer_name: String,
    pub items: Vec<String>,
    pub total: f64,
}

/// Update order payload
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct OrderUpdate {
    pub table_number: Option<String>,
    pub customer_name: Option<String>,
    pub items: Option<Vec<String>>,
    pub total: Option<f64>,
    pub status: Option<OrderStatus>,
    pub time: Option<String>,
    pub waiter: Option<String>,
}
