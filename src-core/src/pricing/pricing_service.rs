use async_trait::async_trait;
use log::debug;
use std::sync::Arc;

use crate::gold_price::GoldPriceServiceTrait;
use crate::products::products_model::{PricedProduct, Product};

use super::pricing_traits::PriceServiceTrait;

/// Derives product prices from the current gold rate.
pub struct PriceService {
    gold_price_service: Arc<dyn GoldPriceServiceTrait>,
}

impl PriceService {
    pub fn new(gold_price_service: Arc<dyn GoldPriceServiceTrait>) -> Self {
        Self { gold_price_service }
    }

    /// Price formula: (popularityScore + 1) * weight * goldPricePerGram
    pub fn price(popularity_score: f64, weight: f64, price_per_gram: f64) -> f64 {
        (popularity_score + 1.0) * weight * price_per_gram
    }
}

#[async_trait]
impl PriceServiceTrait for PriceService {
    async fn price_products(&self, products: Vec<Product>) -> Vec<PricedProduct> {
        // One rate lookup per batch, taken before any product is priced.
        // This also keeps the cache refresh cadence for empty batches.
        let price_per_gram = self.gold_price_service.price_per_gram().await;
        debug!(
            "Calculating prices for {} products at {} per gram",
            products.len(),
            price_per_gram
        );

        products
            .into_iter()
            .map(|product| {
                let price =
                    Self::price(product.popularity_score, product.weight, price_per_gram);
                PricedProduct::new(product, price)
            })
            .collect()
    }
}
