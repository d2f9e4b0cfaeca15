use async_trait::async_trait;

/// Trait defining the contract for gold price lookups.
#[async_trait]
pub trait GoldPriceServiceTrait: Send + Sync {
    /// Current gold price per gram. Total: always resolves to a usable value,
    /// falling back to the last known rate or a fixed constant when the
    /// upstream source is unavailable.
    async fn price_per_gram(&self) -> f64;
}
