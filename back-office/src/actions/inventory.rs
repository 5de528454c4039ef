//! Inventory mutation handlers
//!
//! All handlers that change a record also stamp `last_updated`, which is
//! why they take `today` explicitly: the container supplies the clock.

use chrono::NaiveDate;
use shared::models::{InventoryItem, InventoryItemCreate, InventoryItemUpdate};

use crate::utils::next_record_id;

/// Id prefix for inventory records
pub const INVENTORY_ID_PREFIX: &str = "INV";

/// Step used by the quick stock in/out actions (快速入库/出库)
pub const STOCK_ADJUST_STEP: f64 = 10.0;

/// Append a new inventory item stamped with today's date.
pub fn create_item(
    items: &[InventoryItem],
    input: InventoryItemCreate,
    today: NaiveDate,
) -> Vec<InventoryItem> {
    let item = InventoryItem {
        id: next_record_id(INVENTORY_ID_PREFIX, items.len()),
        name: input.name,
        category: input.category,
        quantity: input.quantity,
        unit: input.unit,
        min_stock: input.min_stock,
        supplier: input.supplier,
        last_updated: today,
        price: input.price,
        expiry_date: input.expiry_date,
    };
    let mut next = items.to_vec();
    next.push(item);
    next
}

/// Merge `patch` over the item with `id` and refresh `last_updated`.
/// Unknown ids leave the collection unchanged.
pub fn update_item(
    items: &[InventoryItem],
    id: &str,
    patch: &InventoryItemUpdate,
    today: NaiveDate,
) -> Vec<InventoryItem> {
    items
        .iter()
        .map(|item| {
            if item.id != id {
                return item.clone();
            }
            let mut updated = item.clone();
            if let Some(name) = &patch.name {
                updated.name = name.clone();
            }
            if let Some(category) = patch.category {
                updated.category = category;
            }
            if let Some(quantity) = patch.quantity {
                updated.quantity = quantity;
            }
            if let Some(unit) = &patch.unit {
                updated.unit = unit.clone();
            }
            if let Some(min_stock) = patch.min_stock {
                updated.min_stock = min_stock;
            }
            if let Some(supplier) = &patch.supplier {
                updated.supplier = supplier.clone();
            }
            if let Some(price) = patch.price {
                updated.price = price;
            }
            if let Some(expiry_date) = patch.expiry_date {
                updated.expiry_date = Some(expiry_date);
            }
            updated.last_updated = today;
            updated
        })
        .collect()
}

/// Adjust the quantity of the item with `id` by `delta` and refresh
/// `last_updated`. No floor is enforced; the quick-out action is only
/// offered above the step size, but the handler itself accepts any delta.
pub fn adjust_quantity(
    items: &[InventoryItem],
    id: &str,
    delta: f64,
    today: NaiveDate,
) -> Vec<InventoryItem> {
    items
        .iter()
        .map(|item| {
            if item.id == id {
                let mut updated = item.clone();
                updated.quantity = item.quantity + delta;
                updated.last_updated = today;
                updated
            } else {
                item.clone()
            }
        })
        .collect()
}

/// Remove the item with `id`; unknown ids are a no-op.
pub fn delete_item(items: &[InventoryItem], id: &str) -> Vec<InventoryItem> {
    items.iter().filter(|item| item.id != id).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;
    use shared::models::InventoryCategory;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn new_item_input() -> InventoryItemCreate {
        InventoryItemCreate {
            name: "花生油".to_string(),
            category: InventoryCategory::Seasoning,
            quantity: 30.0,
            unit: "桶".to_string(),
            min_stock: 10.0,
            supplier: "调料专营店".to_string(),
            price: 65.0,
            expiry_date: Some(day(2024, 6, 1)),
        }
    }

    #[test]
    fn create_appends_and_stamps_today() {
        let items = seed::inventory();
        assert_eq!(items.len(), 6);

        let today = day(2024, 1, 16);
        let next = create_item(&items, new_item_input(), today);
        assert_eq!(next.len(), 7);
        let item = next.last().unwrap();
        assert_eq!(item.id, "INV-007");
        assert_eq!(item.last_updated, today);
    }

    #[test]
    fn update_refreshes_last_updated() {
        let items = seed::inventory();
        let today = day(2024, 1, 16);
        let patch = InventoryItemUpdate {
            quantity: Some(40.0),
            ..InventoryItemUpdate::default()
        };
        let next = update_item(&items, "INV-002", &patch, today);
        let item = next.iter().find(|i| i.id == "INV-002").unwrap();
        assert_eq!(item.quantity, 40.0);
        assert_eq!(item.last_updated, today);
        // Absent patch fields keep their values.
        assert_eq!(item.supplier, "农产品直供");
        assert_eq!(item.min_stock, 20.0);
    }

    #[test]
    fn adjust_moves_quantity_by_delta() {
        let items = seed::inventory();
        let today = day(2024, 1, 16);

        let next = adjust_quantity(&items, "INV-001", STOCK_ADJUST_STEP, today);
        let item = next.iter().find(|i| i.id == "INV-001").unwrap();
        assert_eq!(item.quantity, 35.0);
        assert_eq!(item.last_updated, today);

        let next = adjust_quantity(&next, "INV-001", -STOCK_ADJUST_STEP, today);
        let item = next.iter().find(|i| i.id == "INV-001").unwrap();
        assert_eq!(item.quantity, 25.0);
    }

    #[test]
    fn adjust_enforces_no_floor() {
        let items = seed::inventory();
        let today = day(2024, 1, 16);
        // INV-006 (牛肉) holds 5kg; drawing a full step goes negative.
        let next = adjust_quantity(&items, "INV-006", -STOCK_ADJUST_STEP, today);
        let item = next.iter().find(|i| i.id == "INV-006").unwrap();
        assert_eq!(item.quantity, -5.0);
    }

    #[test]
    fn update_unknown_id_is_a_deep_noop() {
        let items = seed::inventory();
        let patch = InventoryItemUpdate {
            quantity: Some(1.0),
            ..InventoryItemUpdate::default()
        };
        let next = update_item(&items, "INV-099", &patch, day(2024, 1, 16));
        assert_eq!(next, items);
    }
}
