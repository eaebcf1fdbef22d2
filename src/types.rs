use crate::errors::AppError;

/// Result type used by request handlers
pub type Result<T> = std::result::Result<T, AppError>;
