//! Menu list views

use serde::{Deserialize, Serialize};
use shared::models::{Dish, DishCategory};

use super::{Selector, contains_ci};

/// Per-category totals for the filter dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct DishCategoryCounts {
    pub all: usize,
    pub appetizer: usize,
    pub soup: usize,
    pub main_course: usize,
    pub dessert: usize,
    pub beverage: usize,
    pub special: usize,
}

/// Filter dishes by search term (name or description, case-insensitive)
/// and category. Stable: collection order is preserved.
pub fn filter_dishes<'a>(
    dishes: &'a [Dish],
    search: &str,
    category: Selector<DishCategory>,
) -> Vec<&'a Dish> {
    let term = search.to_lowercase();
    dishes
        .iter()
        .filter(|dish| {
            let matches_search =
                contains_ci(&dish.name, &term) || contains_ci(&dish.description, &term);
            matches_search && category.matches(&dish.category)
        })
        .collect()
}

/// Count dishes per category over the unfiltered collection.
pub fn category_counts(dishes: &[Dish]) -> DishCategoryCounts {
    let mut counts = DishCategoryCounts {
        all: dishes.len(),
        ..DishCategoryCounts::default()
    };
    for dish in dishes {
        match dish.category {
            DishCategory::Appetizer => counts.appetizer += 1,
            DishCategory::Soup => counts.soup += 1,
            DishCategory::MainCourse => counts.main_course += 1,
            DishCategory::Dessert => counts.dessert += 1,
            DishCategory::Beverage => counts.beverage += 1,
            DishCategory::Special => counts.special += 1,
        }
    }
    counts
}
