//! Form input validation
//!
//! Required-field checks run at the form boundary, before any mutation
//! handler is invoked; the handlers themselves never re-validate. Only
//! presence is checked; numeric ranges are not.

use shared::error::{AppError, AppResult};
use shared::models::{DishCreate, InventoryItemCreate, OrderCreate, StaffMemberCreate};

/// Validate that a required string is non-empty after trimming.
pub fn validate_required_text(value: &str, field: &str) -> AppResult<()> {
    if value.trim().is_empty() {
        return Err(AppError::validation(format!("{field} must not be empty")));
    }
    Ok(())
}

/// Validate a new-order form: customer, table and at least one item.
pub fn validate_order_form(input: &OrderCreate) -> AppResult<()> {
    validate_required_text(&input.customer_name, "customerName")?;
    validate_required_text(&input.table_number, "tableNumber")?;
    if input.items.is_empty() {
        return Err(AppError::validation("items must not be empty"));
    }
    Ok(())
}

/// Validate a new-dish form.
pub fn validate_dish_form(input: &DishCreate) -> AppResult<()> {
    validate_required_text(&input.name, "name")?;
    validate_required_text(&input.description, "description")?;
    Ok(())
}

/// Validate a new-inventory-item form.
pub fn validate_inventory_form(input: &InventoryItemCreate) -> AppResult<()> {
    validate_required_text(&input.name, "name")?;
    validate_required_text(&input.unit, "unit")?;
    validate_required_text(&input.supplier, "supplier")?;
    Ok(())
}

/// Validate a new-staff form.
pub fn validate_staff_form(input: &StaffMemberCreate) -> AppResult<()> {
    validate_required_text(&input.name, "name")?;
    validate_required_text(&input.phone, "phone")?;
    validate_required_text(&input.email, "email")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::{DishCategory, InventoryCategory};

    #[test]
    fn rejects_empty_and_whitespace_text() {
        assert!(validate_required_text("李小明", "name").is_ok());
        assert!(validate_required_text("", "name").is_err());
        assert!(validate_required_text("   ", "name").is_err());
    }

    #[test]
    fn order_form_requires_items() {
        let mut input = OrderCreate {
            table_number: "桌号5".to_string(),
            customer_name: "张先生".to_string(),
            items: vec!["宫保鸡丁".to_string()],
            total: 38.0,
        };
        assert!(validate_order_form(&input).is_ok());

        input.items.clear();
        assert!(validate_order_form(&input).is_err());
    }

    #[test]
    fn dish_form_requires_name_and_description() {
        let input = DishCreate {
            name: String::new(),
            category: DishCategory::MainCourse,
            price: 38.0,
            description: "经典川菜".to_string(),
            available: true,
        };
        assert!(validate_dish_form(&input).is_err());
    }

    #[test]
    fn inventory_form_requires_text_fields_only() {
        // Numeric fields are unchecked; a zero quantity passes.
        let input = InventoryItemCreate {
            name: "土豆".to_string(),
            category: InventoryCategory::Vegetable,
            quantity: 0.0,
            unit: "公斤".to_string(),
            min_stock: 20.0,
            supplier: "农产品直供".to_string(),
            price: 3.2,
            expiry_date: None,
        };
        assert!(validate_inventory_form(&input).is_ok());

        let mut missing_supplier = input.clone();
        missing_supplier.supplier = String::new();
        assert!(validate_inventory_form(&missing_supplier).is_err());
    }
}
