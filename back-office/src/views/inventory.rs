//! Inventory list views and stock statistics

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use shared::models::{InventoryCategory, InventoryItem};

use super::{Selector, contains_ci};

/// Per-category totals for the filter dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct InventoryCategoryCounts {
    pub all: usize,
    pub meat: usize,
    pub vegetable: usize,
    pub seasoning: usize,
    pub beverage: usize,
    pub supplies: usize,
}

/// Headline stock numbers for the page's stat cards.
///
/// `low_stock` counts everything at or below the minimum threshold, so it
/// includes the `critical` items; `expiring_soon` only considers items
/// that carry an expiry date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct StockStats {
    pub total: usize,
    pub low_stock: usize,
    pub critical: usize,
    pub expiring_soon: usize,
}

/// Filter items by search term (name or supplier, case-insensitive) and
/// category. Stable: collection order is preserved.
pub fn filter_inventory<'a>(
    items: &'a [InventoryItem],
    search: &str,
    category: Selector<InventoryCategory>,
) -> Vec<&'a InventoryItem> {
    let term = search.to_lowercase();
    items
        .iter()
        .filter(|item| {
            let matches_search =
                contains_ci(&item.name, &term) || contains_ci(&item.supplier, &term);
            matches_search && category.matches(&item.category)
        })
        .collect()
}

/// Count items per category over the unfiltered collection.
pub fn category_counts(items: &[InventoryItem]) -> InventoryCategoryCounts {
    let mut counts = InventoryCategoryCounts {
        all: items.len(),
        ..InventoryCategoryCounts::default()
    };
    for item in items {
        match item.category {
            InventoryCategory::Meat => counts.meat += 1,
            InventoryCategory::Vegetable => counts.vegetable += 1,
            InventoryCategory::Seasoning => counts.seasoning += 1,
            InventoryCategory::Beverage => counts.beverage += 1,
            InventoryCategory::Supplies => counts.supplies += 1,
        }
    }
    counts
}

/// Compute the stock statistics over the unfiltered collection, relative
/// to `today`.
pub fn stock_stats(items: &[InventoryItem], today: NaiveDate) -> StockStats {
    StockStats {
        total: items.len(),
        low_stock: items.iter().filter(|i| i.quantity <= i.min_stock).count(),
        critical: items
            .iter()
            .filter(|i| i.quantity <= i.min_stock * 0.5)
            .count(),
        expiring_soon: items.iter().filter(|i| i.is_expiring_soon(today)).count(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn search_covers_name_and_supplier() {
        let items = seed::inventory();
        let by_name = filter_inventory(&items, "土豆", Selector::All);
        assert_eq!(by_name.len(), 1);

        // Two meats share the same supplier.
        let by_supplier = filter_inventory(&items, "新鲜肉类", Selector::All);
        assert_eq!(by_supplier.len(), 2);
    }

    #[test]
    fn category_and_search_combine_with_and() {
        let items = seed::inventory();
        let view = filter_inventory(
            &items,
            "新鲜肉类",
            Selector::Only(InventoryCategory::Vegetable),
        );
        assert!(view.is_empty());

        let view = filter_inventory(&items, "", Selector::Only(InventoryCategory::Meat));
        assert_eq!(view.len(), 2);
    }

    #[test]
    fn counts_partition_the_collection() {
        let items = seed::inventory();
        let counts = category_counts(&items);
        assert_eq!(counts.all, 6);
        assert_eq!(counts.meat, 2);
        assert_eq!(counts.vegetable, 1);
        assert_eq!(counts.seasoning, 1);
        assert_eq!(counts.beverage, 1);
        assert_eq!(counts.supplies, 1);
    }

    #[test]
    fn stock_stats_include_critical_in_low_stock() {
        let items = seed::inventory();
        // 生抽 8/15 is low; 牛肉 5/15 is critical (and therefore low too).
        let stats = stock_stats(&items, day(2024, 1, 15));
        assert_eq!(stats.total, 6);
        assert_eq!(stats.low_stock, 2);
        assert_eq!(stats.critical, 1);
    }

    #[test]
    fn expiring_soon_honours_the_three_day_window() {
        let items = seed::inventory();
        // 牛肉 expires 01-18, 鸡胸肉 01-20; the rest carry no expiry date.
        let stats = stock_stats(&items, day(2024, 1, 15));
        assert_eq!(stats.expiring_soon, 1);

        // Two days later both fall inside the window.
        let stats = stock_stats(&items, day(2024, 1, 17));
        assert_eq!(stats.expiring_soon, 2);

        // Past the beef's date: only the chicken is still pending expiry.
        let stats = stock_stats(&items, day(2024, 1, 19));
        assert_eq!(stats.expiring_soon, 1);
    }
}
