//! 种子数据 - built-in demo collections
//!
//! The collections every fresh session starts from. Loading is plain
//! injection: [`crate::store::Dashboard`] accepts any well-formed
//! collections, these are merely the defaults the pages render on first
//! open.

use chrono::NaiveDate;
use shared::models::{
    DiningTable, Dish, DishCategory, InventoryCategory, InventoryItem, Order, OrderStatus,
    StaffMember, StaffPosition, StaffStatus, TableStatus,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("seed dates are valid")
}

/// 模拟订单数据
pub fn orders() -> Vec<Order> {
    vec![
        Order {
            id: "ORD-001".to_string(),
            table_number: "桌号5".to_string(),
            customer_name: "张先生".to_string(),
            items: vec![
                "宫保鸡丁".to_string(),
                "白米饭".to_string(),
                "可乐".to_string(),
            ],
            total: 68.0,
            status: OrderStatus::Preparing,
            time: "10分钟前".to_string(),
            waiter: "李小明".to_string(),
        },
        Order {
            id: "ORD-002".to_string(),
            table_number: "桌号12".to_string(),
            customer_name: "王女士".to_string(),
            items: vec![
                "红烧肉".to_string(),
                "青菜".to_string(),
                "米饭".to_string(),
            ],
            total: 85.0,
            status: OrderStatus::Ready,
            time: "15分钟前".to_string(),
            waiter: "张小丽".to_string(),
        },
        Order {
            id: "ORD-003".to_string(),
            table_number: "桌号3".to_string(),
            customer_name: "刘先生".to_string(),
            items: vec!["麻婆豆腐".to_string(), "紫菜蛋花汤".to_string()],
            total: 45.0,
            status: OrderStatus::Served,
            time: "20分钟前".to_string(),
            waiter: "李小明".to_string(),
        },
        Order {
            id: "ORD-004".to_string(),
            table_number: "桌号8".to_string(),
            customer_name: "陈女士".to_string(),
            items: vec!["糖醋里脊".to_string(), "蒸蛋".to_string()],
            total: 72.0,
            status: OrderStatus::Confirmed,
            time: "25分钟前".to_string(),
            waiter: "张小丽".to_string(),
        },
        Order {
            id: "ORD-005".to_string(),
            table_number: "桌号15".to_string(),
            customer_name: "赵先生".to_string(),
            items: vec!["鱼香茄子".to_string(), "白米饭".to_string()],
            total: 38.0,
            status: OrderStatus::Pending,
            time: "30分钟前".to_string(),
            waiter: "李小明".to_string(),
        },
    ]
}

/// 模拟菜品数据
pub fn dishes() -> Vec<Dish> {
    vec![
        Dish {
            id: "DISH-001".to_string(),
            name: "宫保鸡丁".to_string(),
            category: DishCategory::MainCourse,
            price: 38.0,
            description: "经典川菜，鸡肉丁配花生米，香辣可口".to_string(),
            image: "/dishes/gongbao.jpg".to_string(),
            available: true,
            rating: 4.8,
            order_count: 156,
        },
        Dish {
            id: "DISH-002".to_string(),
            name: "红烧肉".to_string(),
            category: DishCategory::MainCourse,
            price: 48.0,
            description: "传统名菜，肥瘦相间，入口即化".to_string(),
            image: "/dishes/hongshaorou.jpg".to_string(),
            available: true,
            rating: 4.9,
            order_count: 98,
        },
        Dish {
            id: "DISH-003".to_string(),
            name: "麻婆豆腐".to_string(),
            category: DishCategory::MainCourse,
            price: 28.0,
            description: "经典川菜，豆腐嫩滑，麻辣鲜香".to_string(),
            image: "/dishes/mapo.jpg".to_string(),
            available: true,
            rating: 4.7,
            order_count: 203,
        },
        Dish {
            id: "DISH-004".to_string(),
            name: "紫菜蛋花汤".to_string(),
            category: DishCategory::Soup,
            price: 18.0,
            description: "清淡营养，紫菜配鸡蛋，汤鲜味美".to_string(),
            image: "/dishes/soup.jpg".to_string(),
            available: true,
            rating: 4.5,
            order_count: 67,
        },
        Dish {
            id: "DISH-005".to_string(),
            name: "凉拌黄瓜".to_string(),
            category: DishCategory::Appetizer,
            price: 15.0,
            description: "清爽开胃，黄瓜脆嫩，调味适中".to_string(),
            image: "/dishes/cucumber.jpg".to_string(),
            available: true,
            rating: 4.3,
            order_count: 89,
        },
        Dish {
            id: "DISH-006".to_string(),
            name: "红豆沙".to_string(),
            category: DishCategory::Dessert,
            price: 25.0,
            description: "传统甜品，红豆香甜，口感细腻".to_string(),
            image: "/dishes/redbean.jpg".to_string(),
            available: false,
            rating: 4.6,
            order_count: 34,
        },
        Dish {
            id: "DISH-007".to_string(),
            name: "可乐".to_string(),
            category: DishCategory::Beverage,
            price: 8.0,
            description: "经典碳酸饮料，冰爽解腻".to_string(),
            image: "/dishes/cola.jpg".to_string(),
            available: true,
            rating: 4.2,
            order_count: 145,
        },
        Dish {
            id: "DISH-008".to_string(),
            name: "特色烤鸭".to_string(),
            category: DishCategory::Special,
            price: 88.0,
            description: "招牌特色菜，皮脆肉嫩，配薄饼和蘸料".to_string(),
            image: "/dishes/duck.jpg".to_string(),
            available: true,
            rating: 4.9,
            order_count: 67,
        },
    ]
}

/// 模拟库存数据
pub fn inventory() -> Vec<InventoryItem> {
    vec![
        InventoryItem {
            id: "INV-001".to_string(),
            name: "鸡胸肉".to_string(),
            category: InventoryCategory::Meat,
            quantity: 25.0,
            unit: "公斤".to_string(),
            min_stock: 10.0,
            supplier: "新鲜肉类批发".to_string(),
            last_updated: date(2024, 1, 15),
            price: 18.5,
            expiry_date: Some(date(2024, 1, 20)),
        },
        InventoryItem {
            id: "INV-002".to_string(),
            name: "土豆".to_string(),
            category: InventoryCategory::Vegetable,
            quantity: 50.0,
            unit: "公斤".to_string(),
            min_stock: 20.0,
            supplier: "农产品直供".to_string(),
            last_updated: date(2024, 1, 14),
            price: 3.2,
            expiry_date: None,
        },
        InventoryItem {
            id: "INV-003".to_string(),
            name: "生抽".to_string(),
            category: InventoryCategory::Seasoning,
            quantity: 8.0,
            unit: "瓶".to_string(),
            min_stock: 15.0,
            supplier: "调料专营店".to_string(),
            last_updated: date(2024, 1, 13),
            price: 12.8,
            expiry_date: None,
        },
        InventoryItem {
            id: "INV-004".to_string(),
            name: "可口可乐".to_string(),
            category: InventoryCategory::Beverage,
            quantity: 120.0,
            unit: "瓶".to_string(),
            min_stock: 50.0,
            supplier: "饮料批发商".to_string(),
            last_updated: date(2024, 1, 15),
            price: 2.5,
            expiry_date: None,
        },
        InventoryItem {
            id: "INV-005".to_string(),
            name: "餐具".to_string(),
            category: InventoryCategory::Supplies,
            quantity: 200.0,
            unit: "套".to_string(),
            min_stock: 100.0,
            supplier: "餐具用品店".to_string(),
            last_updated: date(2024, 1, 10),
            price: 8.0,
            expiry_date: None,
        },
        InventoryItem {
            id: "INV-006".to_string(),
            name: "牛肉".to_string(),
            category: InventoryCategory::Meat,
            quantity: 5.0,
            unit: "公斤".to_string(),
            min_stock: 15.0,
            supplier: "新鲜肉类批发".to_string(),
            last_updated: date(2024, 1, 12),
            price: 45.0,
            expiry_date: Some(date(2024, 1, 18)),
        },
    ]
}

/// 模拟员工数据
pub fn staff() -> Vec<StaffMember> {
    vec![
        StaffMember {
            id: "STAFF-001".to_string(),
            name: "李小明".to_string(),
            position: StaffPosition::Waiter,
            phone: "13800138001".to_string(),
            email: "lixiaoming@restaurant.com".to_string(),
            status: StaffStatus::Active,
            hire_date: date(2023, 3, 15),
            salary: 4500.0,
        },
        StaffMember {
            id: "STAFF-002".to_string(),
            name: "张小丽".to_string(),
            position: StaffPosition::Waiter,
            phone: "13800138002".to_string(),
            email: "zhangxiaoli@restaurant.com".to_string(),
            status: StaffStatus::Active,
            hire_date: date(2023, 5, 20),
            salary: 4200.0,
        },
        StaffMember {
            id: "STAFF-003".to_string(),
            name: "王大厨".to_string(),
            position: StaffPosition::Chef,
            phone: "13800138003".to_string(),
            email: "wangdachu@restaurant.com".to_string(),
            status: StaffStatus::Active,
            hire_date: date(2022, 8, 10),
            salary: 8000.0,
        },
        StaffMember {
            id: "STAFF-004".to_string(),
            name: "陈经理".to_string(),
            position: StaffPosition::Manager,
            phone: "13800138004".to_string(),
            email: "chenjingli@restaurant.com".to_string(),
            status: StaffStatus::Active,
            hire_date: date(2021, 12, 1),
            salary: 12000.0,
        },
        StaffMember {
            id: "STAFF-005".to_string(),
            name: "刘收银".to_string(),
            position: StaffPosition::Cashier,
            phone: "13800138005".to_string(),
            email: "liushouyin@restaurant.com".to_string(),
            status: StaffStatus::Active,
            hire_date: date(2023, 1, 8),
            salary: 5000.0,
        },
        StaffMember {
            id: "STAFF-006".to_string(),
            name: "赵小厨".to_string(),
            position: StaffPosition::Chef,
            phone: "13800138006".to_string(),
            email: "zhaoxiaochu@restaurant.com".to_string(),
            status: StaffStatus::OnLeave,
            hire_date: date(2022, 11, 15),
            salary: 7500.0,
        },
    ]
}

/// 模拟桌台数据
pub fn tables() -> Vec<DiningTable> {
    vec![
        DiningTable {
            id: "TABLE-001".to_string(),
            number: "桌号1".to_string(),
            seats: 4,
            status: TableStatus::Occupied,
            current_order: Some("ORD-001".to_string()),
            estimated_time: Some("15分钟".to_string()),
            waiter: Some("李小明".to_string()),
        },
        DiningTable {
            id: "TABLE-002".to_string(),
            number: "桌号2".to_string(),
            seats: 2,
            status: TableStatus::Available,
            current_order: None,
            estimated_time: None,
            waiter: None,
        },
        DiningTable {
            id: "TABLE-003".to_string(),
            number: "桌号3".to_string(),
            seats: 6,
            status: TableStatus::Reserved,
            current_order: None,
            estimated_time: Some("30分钟".to_string()),
            waiter: None,
        },
        DiningTable {
            id: "TABLE-004".to_string(),
            number: "桌号4".to_string(),
            seats: 4,
            status: TableStatus::Cleaning,
            current_order: None,
            estimated_time: None,
            waiter: None,
        },
        DiningTable {
            id: "TABLE-005".to_string(),
            number: "桌号5".to_string(),
            seats: 8,
            status: TableStatus::Occupied,
            current_order: Some("ORD-005".to_string()),
            estimated_time: Some("25分钟".to_string()),
            waiter: Some("张小丽".to_string()),
        },
        DiningTable {
            id: "TABLE-006".to_string(),
            number: "桌号6".to_string(),
            seats: 2,
            status: TableStatus::Available,
            current_order: None,
            estimated_time: None,
            waiter: None,
        },
        DiningTable {
            id: "TABLE-007".to_string(),
            number: "桌号7".to_string(),
            seats: 4,
            status: TableStatus::Maintenance,
            current_order: None,
            estimated_time: None,
            waiter: None,
        },
        DiningTable {
            id: "TABLE-008".to_string(),
            number: "桌号8".to_string(),
            seats: 6,
            status: TableStatus::Available,
            current_order: None,
            estimated_time: None,
            waiter: None,
        },
        DiningTable {
            id: "TABLE-009".to_string(),
            number: "桌号9".to_string(),
            seats: 2,
            status: TableStatus::Occupied,
            current_order: Some("ORD-009".to_string()),
            estimated_time: Some("10分钟".to_string()),
            waiter: Some("李小明".to_string()),
        },
        DiningTable {
            id: "TABLE-010".to_string(),
            number: "桌号10".to_string(),
            seats: 4,
            status: TableStatus::Reserved,
            current_order: None,
            estimated_time: Some("1小时".to_string()),
            waiter: None,
        },
    ]
}
