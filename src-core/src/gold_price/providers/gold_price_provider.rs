use async_trait::async_trait;

use super::super::gold_price_errors::Result;

/// Capability consumed by the rate cache: one fetch of the current gold
/// price per gram from some upstream source.
#[async_trait]
pub trait GoldPriceProvider: Send + Sync {
    async fn fetch_price_per_gram(&self) -> Result<f64>;
}
