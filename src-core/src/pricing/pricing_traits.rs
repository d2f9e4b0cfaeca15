use async_trait::async_trait;

use crate::products::products_model::{PricedProduct, Product};

/// Trait defining the contract for price derivation.
#[async_trait]
pub trait PriceServiceTrait: Send + Sync {
    /// Prices a batch of products with a single rate lookup, so every item
    /// in the batch reflects the same rate snapshot.
    async fn price_products(&self, products: Vec<Product>) -> Vec<PricedProduct>;
}
