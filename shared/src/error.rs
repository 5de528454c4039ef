//! 统一错误处理
//!
//! The dashboard core itself is total over well-formed input: mutation
//! handlers treat unknown ids as no-ops and derived views never fail.
//! Errors only arise at the boundary with the presentation layer:
//! incomplete form input and unknown enum literals.

/// 应用错误枚举
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Required form field missing or empty, surfaced to the user as a
    /// blocking message before any mutation is attempted
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Unknown enum literal at a construction boundary
    #[error("Invalid value: {0}")]
    Invalid(String),
}

/// Result alias for boundary operations
pub type AppResult<T> = Result<T, AppError>;

// ========== Helper Constructors ==========

impl AppError {
    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create an invalid-value error
    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::Invalid(msg.into())
    }
}
