pub mod gold_api_provider;
pub mod gold_price_provider;

pub use gold_api_provider::GoldApiProvider;
pub use gold_price_provider::GoldPriceProvider;
