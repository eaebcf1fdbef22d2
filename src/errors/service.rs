use thiserror::Error;

/// Error type for service operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ServiceError {
    /// No short URL was ever minted for the identifier
    #[error("Not found: {0}")]
    NotFound(String),
}
