//! Back-Office Dashboard Core - 餐厅后台管理数据核心
//!
//! # 架构概述
//!
//! In-memory core behind the back-office pages (orders, menu, inventory,
//! staff, tables). One logical session owns one [`Dashboard`]; every user
//! action runs synchronously against it and completes before the next:
//!
//! - **状态容器** (`store`): the five entity collections, swapped
//!   wholesale on every mutation (copy-on-write)
//! - **变更操作** (`actions`): pure create/update/delete/transition
//!   handlers, one module per page
//! - **派生视图** (`views`): search/filter plus aggregate counts and
//!   stock/expiry statistics, recomputed from the collections on every
//!   read
//! - **种子数据** (`seed`): the built-in demo collections
//!
//! # 模块结构
//!
//! ```text
//! back-office/src/
//! ├── store/         # 状态容器
//! ├── actions/       # 变更操作
//! ├── views/         # 派生视图
//! ├── seed.rs        # 种子数据
//! └── utils/         # 工具函数 (ids, validation, logger)
//! ```

pub mod actions;
pub mod seed;
pub mod store;
pub mod utils;
pub mod views;

// Re-export 公共类型
pub use store::Dashboard;
pub use views::Selector;

// Re-export error types from shared
pub use shared::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_level};
