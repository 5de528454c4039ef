//! Order list views

use serde::{Deserialize, Serialize};
use shared::models::{Order, OrderStatus};

use super::{Selector, contains_ci};

/// Per-status totals for the filter dropdown, computed over the whole
/// collection regardless of the active search or filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct OrderStatusCounts {
    pub all: usize,
    pub pending: usize,
    pub confirmed: usize,
    pub preparing: usize,
    pub ready: usize,
    pub served: usize,
    pub completed: usize,
    pub cancelled: usize,
}

/// Filter orders by search term and status.
///
/// The search matches the order id, customer name and table label,
/// case-insensitively; an empty term matches everything. A record is kept
/// only when both the search and the selector accept it, and the
/// collection's relative order is preserved.
pub fn filter_orders<'a>(
    orders: &'a [Order],
    search: &str,
    status: Selector<OrderStatus>,
) -> Vec<&'a Order> {
    let term = search.to_lowercase();
    orders
        .iter()
        .filter(|order| {
            let matches_search = contains_ci(&order.id, &term)
                || contains_ci(&order.customer_name, &term)
                || contains_ci(&order.table_number, &term);
            matches_search && status.matches(&order.status)
        })
        .collect()
}

/// Count orders per status over the unfiltered collection.
pub fn status_counts(orders: &[Order]) -> OrderStatusCounts {
    let mut counts = OrderStatusCounts {
        all: orders.len(),
        ..OrderStatusCounts::default()
    };
    for order in orders {
        match order.status {
            OrderStatus::Pending => counts.pending += 1,
            OrderStatus::Confirmed => counts.confirmed += 1,
            OrderStatus::Preparing => counts.preparing += 1,
            OrderStatus::Ready => counts.ready += 1,
            OrderStatus::Served => counts.served += 1,
            OrderStatus::Completed => counts.completed += 1,
            OrderStatus::Cancelled => counts.cancelled += 1,
        }
    }
    counts
}
