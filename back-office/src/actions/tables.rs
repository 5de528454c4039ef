//! Dining table mutation handlers

use shared::models::{DiningTable, DiningTableCreate, DiningTableUpdate, TableStatus};

use crate::utils::next_record_id;

/// Id prefix for table records
pub const TABLE_ID_PREFIX: &str = "TABLE";

/// Append a new table, starting out available with no order attached.
pub fn create_table(tables: &[DiningTable], input: DiningTableCreate) -> Vec<DiningTable> {
    let table = DiningTable {
        id: next_record_id(TABLE_ID_PREFIX, tables.len()),
        number: input.number,
        seats: input.seats,
        status: TableStatus::Available,
        current_order: None,
        estimated_time: None,
        waiter: None,
    };
    let mut next = tables.to_vec();
    next.push(table);
    next
}

/// Merge `patch` over the table with `id`; unknown ids are a no-op.
pub fn update_table(tables: &[DiningTable], id: &str, patch: &DiningTableUpdate) -> Vec<DiningTable> {
    tables
        .iter()
        .map(|table| {
            if table.id != id {
                return table.clone();
            }
            let mut updated = table.clone();
            if let Some(number) = &patch.number {
                updated.number = number.clone();
            }
            if let Some(seats) = patch.seats {
                updated.seats = seats;
            }
            if let Some(status) = patch.status {
                updated.status = status;
            }
            if let Some(current_order) = &patch.current_order {
                updated.current_order = Some(current_order.clone());
            }
            if let Some(estimated_time) = &patch.estimated_time {
                updated.estimated_time = Some(estimated_time.clone());
            }
            if let Some(waiter) = &patch.waiter {
                updated.waiter = Some(waiter.clone());
            }
            updated
        })
        .collect()
}

/// Set the status of the table with `id`. Transitions are unconstrained;
/// the attached order/time fields are left as they are.
pub fn set_table_status(tables: &[DiningTable], id: &str, status: TableStatus) -> Vec<DiningTable> {
    tables
        .iter()
        .map(|table| {
            if table.id == id {
                let mut updated = table.clone();
                updated.status = status;
                updated
            } else {
                table.clone()
            }
        })
        .collect()
}

/// Seat guests: mark the table occupied and attach their order (安排就座).
pub fn assign_order(tables: &[DiningTable], id: &str, order_id: &str) -> Vec<DiningTable> {
    tables
        .iter()
        .map(|table| {
            if table.id == id {
                let mut updated = table.clone();
                updated.status = TableStatus::Occupied;
                updated.current_order = Some(order_id.to_string());
                updated
            } else {
                table.clone()
            }
        })
        .collect()
}

/// Check out: send the table to cleaning and detach the order and the
/// time estimate. The waiter assignment survives the turnover.
pub fn clear_table(tables: &[DiningTable], id: &str) -> Vec<DiningTable> {
    tables
        .iter()
        .map(|table| {
            if table.id == id {
                let mut updated = table.clone();
                updated.status = TableStatus::Cleaning;
                updated.current_order = None;
                updated.estimated_time = None;
                updated
            } else {
                table.clone()
            }
        })
        .collect()
}

/// Remove the table with `id`; unknown ids are a no-op.
pub fn delete_table(tables: &[DiningTable], id: &str) -> Vec<DiningTable> {
    tables
        .iter()
        .filter(|table| table.id != id)
        .cloned()
        .collect()
}
