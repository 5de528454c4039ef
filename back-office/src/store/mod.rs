//! 状态容器 - dashboard session state
//!
//! One logical session owns exactly one [`Dashboard`]. The container
//! holds the five entity collections and is the only mutable state in
//! the core: mutation methods delegate to the pure handlers in
//! [`crate::actions`] and swap the touched collection for the returned
//! copy. Derived views read the collections through the accessors and
//! recompute on every render; nothing is cached here.
//!
//! All methods run synchronously on the caller's thread; there is no
//! background work, no locking and no async boundary.

use chrono::{NaiveDate, Utc};
use shared::models::{
    DiningTable, DiningTableCreate, DiningTableUpdate, Dish, DishCreate, DishUpdate,
    InventoryItem, InventoryItemCreate, InventoryItemUpdate, Order, OrderCreate, OrderStatus,
    OrderUpdate, StaffMember, StaffMemberCreate, StaffMemberUpdate, StaffStatus, TableStatus,
};
use tracing::debug;

use crate::actions;
use crate::seed;

/// In-memory dashboard state (单会话数据容器)
#[derive(Debug, Clone, Default)]
pub struct Dashboard {
    orders: Vec<Order>,
    dishes: Vec<Dish>,
    inventory: Vec<InventoryItem>,
    staff: Vec<StaffMember>,
    tables: Vec<DiningTable>,
}

impl Dashboard {
    /// Empty container with no records at all.
    pub fn new() -> Self {
        Self::default()
    }

    /// Container holding the built-in demo collections.
    pub fn with_seed_data() -> Self {
        Self {
            orders: seed::orders(),
            dishes: seed::dishes(),
            inventory: seed::inventory(),
            staff: seed::staff(),
            tables: seed::tables(),
        }
    }

    /// Container loaded from caller-provided collections. This is the
    /// whole persistence story: loading is injection, not I/O.
    pub fn from_collections(
        orders: Vec<Order>,
        dishes: Vec<Dish>,
        inventory: Vec<InventoryItem>,
        staff: Vec<StaffMember>,
        tables: Vec<DiningTable>,
    ) -> Self {
        Self {
            orders,
            dishes,
            inventory,
            staff,
            tables,
        }
    }

    /// Today's date as the frontend records it (UTC calendar date).
    fn today() -> NaiveDate {
        Utc::now().date_naive()
    }

    // ── Collections ─────────────────────────────────────────────────

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn dishes(&self) -> &[Dish] {
        &self.dishes
    }

    pub fn inventory(&self) -> &[InventoryItem] {
        &self.inventory
    }

    pub fn staff(&self) -> &[StaffMember] {
        &self.staff
    }

    pub fn tables(&self) -> &[DiningTable] {
        &self.tables
    }

    // ── Orders ──────────────────────────────────────────────────────

    pub fn create_order(&mut self, input: OrderCreate) {
        debug!(customer = %input.customer_name, table = %input.table_number, "create order");
        self.orders = actions::create_order(&self.orders, input);
    }

    pub fn update_order(&mut self, id: &str, patch: &OrderUpdate) {
        debug!(id, "update order");
        self.orders = actions::update_order(&self.orders, id, patch);
    }

    pub fn set_order_status(&mut self, id: &str, status: OrderStatus) {
        debug!(id, status = %status, "set order status");
        self.orders = actions::set_order_status(&self.orders, id, status);
    }

    pub fn delete_order(&mut self, id: &str) {
        debug!(id, "delete order");
        self.orders = actions::delete_order(&self.orders, id);
    }

    // ── Menu ────────────────────────────────────────────────────────

    pub fn create_dish(&mut self, input: DishCreate) {
        debug!(name = %input.name, "create dish");
        self.dishes = actions::create_dish(&self.dishes, input);
    }

    pub fn update_dish(&mut self, id: &str, patch: &DishUpdate) {
        debug!(id, "update dish");
        self.dishes = actions::update_dish(&self.dishes, id, patch);
    }

    pub fn toggle_dish_availability(&mut self, id: &str) {
        debug!(id, "toggle dish availability");
        self.dishes = actions::toggle_dish_availability(&self.dishes, id);
    }

    pub fn delete_dish(&mut self, id: &str) {
        debug!(id, "delete dish");
        self.dishes = actions::delete_dish(&self.dishes, id);
    }

    // ── Inventory ───────────────────────────────────────────────────

    pub fn create_inventory_item(&mut self, input: InventoryItemCreate) {
        debug!(name = %input.name, "create inventory item");
        self.inventory = actions::create_item(&self.inventory, input, Self::today());
    }

    pub fn update_inventory_item(&mut self, id: &str, patch: &InventoryItemUpdate) {
        debug!(id, "update inventory item");
        self.inventory = actions::update_item(&self.inventory, id, patch, Self::today());
    }

    pub fn adjust_inventory_quantity(&mut self, id: &str, delta: f64) {
        debug!(id, delta, "adjust inventory quantity");
        self.inventory = actions::adjust_quantity(&self.inventory, id, delta, Self::today());
    }

    pub fn delete_inventory_item(&mut self, id: &str) {
        debug!(id, "delete inventory item");
        self.inventory = actions::delete_item(&self.inventory, id);
    }

    // ── Staff ───────────────────────────────────────────────────────

    pub fn create_staff(&mut self, input: StaffMemberCreate) {
        debug!(name = %input.name, "create staff member");
        self.staff = actions::create_staff(&self.staff, input);
    }

    pub fn update_staff(&mut self, id: &str, patch: &StaffMemberUpdate) {
        debug!(id, "update staff member");
        self.staff = actions::update_staff(&self.staff, id, patch);
    }

    pub fn set_staff_status(&mut self, id: &str, status: StaffStatus) {
        debug!(id, status = %status, "set staff status");
        self.staff = actions::set_staff_status(&self.staff, id, status);
    }

    pub fn delete_staff(&mut self, id: &str) {
        debug!(id, "delete staff member");
        self.staff = actions::delete_staff(&self.staff, id);
    }

    // ── Tables ──────────────────────────────────────────────────────

    pub fn create_table(&mut self, input: DiningTableCreate) {
        debug!(number = %input.number, "create table");
        self.tables = actions::create_table(&self.tables, input);
    }

    pub fn update_table(&mut self, id: &str, patch: &DiningTableUpdate) {
        debug!(id, "update table");
        self.tables = actions::update_table(&self.tables, id, patch);
    }

    pub fn set_table_status(&mut self, id: &str, status: TableStatus) {
        debug!(id, status = %status, "set table status");
        self.tables = actions::set_table_status(&self.tables, id, status);
    }

    pub fn assign_table_order(&mut self, id: &str, order_id: &str) {
        debug!(id, order_id, "assign order to table");
        self.tables = actions::assign_order(&self.tables, id, order_id);
    }

    pub fn clear_table(&mut self, id: &str) {
        debug!(id, "clear table");
        self.tables = actions::clear_table(&self.tables, id);
    }

    pub fn delete_table(&mut self, id: &str) {
        debug!(id, "delete table");
        self.tables = actions::delete_table(&self.tables, id);
    }
}
