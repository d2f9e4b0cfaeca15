pub(crate) mod gold_price_constants;
pub(crate) mod gold_price_errors;
pub(crate) mod gold_price_model;
pub(crate) mod gold_price_service;
pub(crate) mod gold_price_traits;
pub(crate) mod providers;

// Re-export the public interface
pub use gold_price_constants::*;
pub use gold_price_model::RateSnapshot;
pub use gold_price_service::GoldPriceService;
pub use gold_price_traits::GoldPriceServiceTrait;

// Re-export provider types
pub use providers::gold_api_provider::GoldApiProvider;
pub use providers::gold_price_provider::GoldPriceProvider;

// Re-export error types for convenience
pub use gold_price_errors::GoldPriceError;
