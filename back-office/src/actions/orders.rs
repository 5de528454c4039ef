//! Order mutation handlers

use shared::models::{Order, OrderCreate, OrderStatus, OrderUpdate};

use crate::utils::next_record_id;

/// Id prefix for order records
pub const ORDER_ID_PREFIX: &str = "ORD";

/// Waiter label until dispatch assigns a real one
const UNASSIGNED_WAITER: &str = "系统分配";
/// Relative time label for a freshly placed order
const JUST_NOW: &str = "刚刚";

/// Place a new order at the *front* of the collection so the freshest
/// order renders first. Status starts at pending, the waiter slot at the
/// unassigned placeholder.
pub fn create_order(orders: &[Order], input: OrderCreate) -> Vec<Order> {
    let order = Order {
        id: next_record_id(ORDER_ID_PREFIX, orders.len()),
        table_number: input.table_number,
        customer_name: input.customer_name,
        items: input.items,
        total: input.total,
        status: OrderStatus::Pending,
        time: JUST_NOW.to_string(),
        waiter: UNASSIGNED_WAITER.to_string(),
    };
    let mut next = Vec::with_capacity(orders.len() + 1);
    next.push(order);
    next.extend_from_slice(orders);
    next
}

/// Merge `patch` over the order with `id`; absent patch fields keep their
/// current value. Unknown ids leave the collection unchanged.
pub fn update_order(orders: &[Order], id: &str, patch: &OrderUpdate) -> Vec<Order> {
    orders
        .iter()
        .map(|order| {
            if order.id != id {
                return order.clone();
            }
            let mut updated = order.clone();
            if let Some(table_number) = &patch.table_number {
                updated.table_number = table_number.clone();
            }
            if let Some(customer_name) = &patch.customer_name {
                updated.customer_name = customer_name.clone();
            }
            if let Some(items) = &patch.items {
                updated.items = items.clone();
            }
            if let Some(total) = patch.total {
                updated.total = total;
            }
            if let Some(status) = patch.status {
                updated.status = status;
            }
            if let Some(time) = &patch.time {
                updated.time = time.clone();
            }
            if let Some(waiter) = &patch.waiter {
                updated.waiter = waiter.clone();
            }
            updated
        })
        .collect()
}

/// Set the status of the order with `id`. Any target status is accepted:
/// the lifecycle carries no transition guard and the frontend offers every
/// transition unconditionally.
pub fn set_order_status(orders: &[Order], id: &str, status: OrderStatus) -> Vec<Order> {
    orders
        .iter()
        .map(|order| {
            if order.id == id {
                let mut updated = order.clone();
                updated.status = status;
                updated
            } else {
                order.clone()
            }
        })
        .collect()
}

/// Remove the order with `id`; unknown ids are a no-op.
pub fn delete_order(orders: &[Order], id: &str) -> Vec<Order> {
    orders.iter().filter(|order| order.id != id).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;

    fn new_order_input() -> OrderCreate {
        OrderCreate {
            table_number: "桌号7".to_string(),
            customer_name: "孙先生".to_string(),
            items: vec!["特色烤鸭".to_string(), "可乐".to_string()],
            total: 96.0,
        }
    }

    #[test]
    fn create_prepends_and_numbers_from_length() {
        let orders = seed::orders();
        assert_eq!(orders.len(), 5);

        let next = create_order(&orders, new_order_input());
        assert_eq!(next.len(), 6);
        assert_eq!(next[0].id, "ORD-006");
        assert_eq!(next[0].status, OrderStatus::Pending);
        assert_eq!(next[0].time, "刚刚");
        assert_eq!(next[0].waiter, "系统分配");
        // Existing orders keep their relative order behind the new one.
        assert_eq!(next[1].id, "ORD-001");
        assert_eq!(next[5].id, "ORD-005");
        // Input collection untouched.
        assert_eq!(orders.len(), 5);
    }

    #[test]
    fn delete_then_create_reuses_a_live_id() {
        let orders = seed::orders();
        let after_delete = delete_order(&orders, "ORD-003");
        assert_eq!(after_delete.len(), 4);

        // Length-derived numbering hands out ORD-005 again even though a
        // record with that id is still present.
        let next = create_order(&after_delete, new_order_input());
        let dupes = next.iter().filter(|o| o.id == "ORD-005").count();
        assert_eq!(dupes, 2);
    }

    #[test]
    fn status_change_is_unconstrained() {
        let orders = seed::orders();
        // ORD-005 is pending; jump straight to completed.
        let next = set_order_status(&orders, "ORD-005", OrderStatus::Completed);
        let order = next.iter().find(|o| o.id == "ORD-005").unwrap();
        assert_eq!(order.status, OrderStatus::Completed);

        let next = set_order_status(&next, "ORD-005", OrderStatus::Cancelled);
        let order = next.iter().find(|o| o.id == "ORD-005").unwrap();
        assert_eq!(order.status, OrderStatus::Cancelled);
    }

    #[test]
    fn update_merges_and_retains_absent_fields() {
        let orders = seed::orders();
        let patch = OrderUpdate {
            waiter: Some("张小丽".to_string()),
            total: Some(70.0),
            ..OrderUpdate::default()
        };
        let next = update_order(&orders, "ORD-001", &patch);
        let order = next.iter().find(|o| o.id == "ORD-001").unwrap();
        assert_eq!(order.waiter, "张小丽");
        assert_eq!(order.total, 70.0);
        // Untouched fields survive the merge.
        assert_eq!(order.customer_name, "张先生");
        assert_eq!(order.status, OrderStatus::Preparing);
    }

    #[test]
    fn update_unknown_id_is_a_deep_noop() {
        let orders = seed::orders();
        let patch = OrderUpdate {
            total: Some(1.0),
            ..OrderUpdate::default()
        };
        let next = update_order(&orders, "ORD-999", &patch);
        assert_eq!(next, orders);
    }

    #[test]
    fn delete_unknown_id_is_a_noop() {
        let orders = seed::orders();
        let next = delete_order(&orders, "ORD-999");
        assert_eq!(next, orders);
    }
}
