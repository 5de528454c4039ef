//! Dish mutation handlers

use shared::models::{Dish, DishCreate, DishUpdate};

use crate::utils::next_record_id;

/// Id prefix for dish records
pub const DISH_ID_PREFIX: &str = "DISH";

/// Image shown until a photo is uploaded for the dish
const DEFAULT_DISH_IMAGE: &str = "/dishes/default.jpg";
/// Starting rating for a dish nobody has reviewed yet
const DEFAULT_RATING: f64 = 4.5;

/// Append a new dish. Image, rating and order count start at their
/// defaults; the form only collects the descriptive fields.
pub fn create_dish(dishes: &[Dish], input: DishCreate) -> Vec<Dish> {
    let dish = Dish {
        id: next_record_id(DISH_ID_PREFIX, dishes.len()),
        name: input.name,
        category: input.category,
        price: input.price,
        description: input.description,
        image: DEFAULT_DISH_IMAGE.to_string(),
        available: input.available,
        rating: DEFAULT_RATING,
        order_count: 0,
    };
    let mut next = dishes.to_vec();
    next.push(dish);
    next
}

/// Merge `patch` over the dish with `id`; unknown ids are a no-op.
pub fn update_dish(dishes: &[Dish], id: &str, patch: &DishUpdate) -> Vec<Dish> {
    dishes
        .iter()
        .map(|dish| {
            if dish.id != id {
                return dish.clone();
            }
            let mut updated = dish.clone();
            if let Some(name) = &patch.name {
                updated.name = name.clone();
            }
            if let Some(category) = patch.category {
                updated.category = category;
            }
            if let Some(price) = patch.price {
                updated.price = price;
            }
            if let Some(description) = &patch.description {
                updated.description = description.clone();
            }
            if let Some(image) = &patch.image {
                updated.image = image.clone();
            }
            if let Some(available) = patch.available {
                updated.available = available;
            }
            if let Some(rating) = patch.rating {
                updated.rating = rating;
            }
            if let Some(order_count) = patch.order_count {
                updated.order_count = order_count;
            }
            updated
        })
        .collect()
}

/// Flip the availability flag of the dish with `id` (上架/下架).
pub fn toggle_dish_availability(dishes: &[Dish], id: &str) -> Vec<Dish> {
    dishes
        .iter()
        .map(|dish| {
            if dish.id == id {
                let mut updated = dish.clone();
                updated.available = !dish.available;
                updated
            } else {
                dish.clone()
            }
        })
        .collect()
}

/// Remove the dish with `id`; unknown ids are a no-op.
pub fn delete_dish(dishes: &[Dish], id: &str) -> Vec<Dish> {
    dishes.iter().filter(|dish| dish.id != id).cloned().collect()
}
