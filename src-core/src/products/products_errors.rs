use diesel::result::Error as DieselError;
use thiserror::Error;

use crate::errors::DatabaseError;

/// Custom error type for product-related operations
#[derive(Debug, Error)]
pub enum ProductError {
    #[error("Database error: {0}")]
    DatabaseError(String),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Invalid data: {0}")]
    InvalidData(String),
    #[error("Seed error: {0}")]
    SeedError(String),
}

impl From<DieselError> for ProductError {
    fn from(err: DieselError) -> Self {
        match err {
            DieselError::NotFound => ProductError::NotFound("Record not found".to_string()),
            _ => ProductError::DatabaseError(err.to_string()),
        }
    }
}

impl From<DatabaseError> for ProductError {
    fn from(err: DatabaseError) -> Self {
        match err {
            DatabaseError::QueryFailed(DieselError::NotFound) => {
                ProductError::NotFound("Record not found".to_string())
            }
            _ => ProductError::DatabaseError(err.to_string()),
        }
    }
}

impl From<crate::errors::Error> for ProductError {
    fn from(err: crate::errors::Error) -> Self {
        match err {
            crate::errors::Error::Product(e) => e,
            crate::errors::Error::Database(e) => e.into(),
            other => ProductError::DatabaseError(other.to_string()),
        }
    }
}

impl From<std::io::Error> for ProductError {
    fn from(err: std::io::Error) -> Self {
        ProductError::SeedError(err.to_string())
    }
}

impl From<serde_json::Error> for ProductError {
    fn from(err: serde_json::Error) -> Self {
        ProductError::SeedError(err.to_string())
    }
}

/// Result type for product operations
pub type Result<T> = std::result::Result<T, ProductError>;
