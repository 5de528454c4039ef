//! 变更操作 - per-page mutation handlers
//!
//! Every handler is a pure function `(collection, command) → new
//! collection`: the input slice is never touched and the caller swaps in
//! the returned `Vec` (copy-on-write). Unknown ids are silent no-ops,
//! not errors: the frontend simply re-renders the unchanged snapshot.

pub mod inventory;
pub mod menu;
pub mod orders;
pub mod staff;
pub mod tables;

pub use inventory::*;
pub use menu::*;
pub use orders::*;
pub use staff::*;
pub use tables::*;
