//! Shared types for the back-office dashboard
//!
//! Entity models, create/update payloads and error types shared between
//! the dashboard core and the presentation layer embedding it.

pub mod error;
pub mod models;

// Re-exports
pub use error::{AppError, AppResult};
pub use serde::{Deserialize, Serialize};
