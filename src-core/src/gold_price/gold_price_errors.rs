use thiserror::Error;

/// Custom error type for gold price operations
#[derive(Error, Debug)]
pub enum GoldPriceError {
    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("Provider error: {0}")]
    ProviderError(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),
}

/// Result type for gold price operations
pub type Result<T> = std::result::Result<T, GoldPriceError>;
