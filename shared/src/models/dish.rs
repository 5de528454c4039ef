//! Dish Model

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Menu category (菜品分类)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum DishCategory {
    Appetizer,
    Soup,
    MainCourse,
    Dessert,
    Beverage,
    Special,
}

impl DishCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            DishCategory::Appetizer => "appetizer",
            DishCategory::Soup => "soup",
            DishCategory::MainCourse => "mainCourse",
            DishCategory::Dessert => "dessert",
            DishCategory::Beverage => "beverage",
            DishCategory::Special => "special",
        }
    }
}

impl std::fmt::Display for DishCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for DishCategory {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "appetizer" => Ok(DishCategory::Appetizer),
            "soup" => Ok(DishCategory::Soup),
            "mainCourse" => Ok(DishCategory::MainCourse),
            "dessert" => Ok(DishCategory::Dessert),
            "beverage" => Ok(DishCategory::Beverage),
            "special" => Ok(DishCategory::Special),
            other => Err(AppError::invalid(format!("unknown dish category: {other}"))),
        }
    }
}

/// Dish entity (菜品)
///
/// `rating` and `order_count` are display values maintained by hand; they
/// are never recomputed from the order collection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Dish {
    pub id: String,
    pub name: String,
    pub category: DishCategory,
    pub price: f64,
    pub description: String,
    pub image: String,
    pub available: bool,
    pub rating: f64,
    pub order_count: i32,
}

/// Create dish payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DishCreate {
    pub name: String,
    pub category: DishCategory,
    pub price: f64,
    pub description: String,
    pub available: bool,
}

/// Update dish payload
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct DishUpdate {
    pub name: Option<String>,
    pub category: Option<DishCategory>,
    pub price: Option<f64>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub available: Option<bool>,
    pub rating: Option<f64>,
    pub order_count: Option<i32>,
}
