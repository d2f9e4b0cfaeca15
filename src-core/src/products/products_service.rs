use async_trait::async_trait;
use log::{error, info};
use std::path::Path;
use std::sync::Arc;

use crate::pricing::PriceServiceTrait;

use super::products_errors::Result;
use super::products_model::{PricedProduct, ProductFilter, SeedProduct, SortDirection};
use super::products_traits::{ProductRepositoryTrait, ProductServiceTrait};

/// Service answering catalog queries.
///
/// Every query runs the same pipeline: narrow by intrinsic attributes in the
/// store, derive prices for the narrowed set in one batch, then apply price
/// bounds in memory. Price bounds can only run after derivation, so this
/// order is fixed.
pub struct ProductService {
    repository: Arc<dyn ProductRepositoryTrait>,
    price_service: Arc<dyn PriceServiceTrait>,
}

impl ProductService {
    /// Creates a new ProductService instance
    pub fn new(
        repository: Arc<dyn ProductRepositoryTrait>,
        price_service: Arc<dyn PriceServiceTrait>,
    ) -> Self {
        Self {
            repository,
            price_service,
        }
    }

    /// Loads the static product dataset into the store, skipped when the
    /// store already holds records. Best-effort: a read or parse failure is
    /// logged and leaves the catalog as it was. Returns the number of
    /// records inserted.
    pub fn load_seed_products(&self, path: &Path) -> usize {
        match self.try_load_seed_products(path) {
            Ok(inserted) => inserted,
            Err(e) => {
                error!("Error loading products from {}: {}", path.display(), e);
                0
            }
        }
    }

    fn try_load_seed_products(&self, path: &Path) -> Result<usize> {
        if self.repository.count()? > 0 {
            info!("Products already exist in database, skipping seed load");
            return Ok(0);
        }

        let contents = std::fs::read_to_string(path)?;
        let seeds: Vec<SeedProduct> = serde_json::from_str(&contents)?;

        let inserted = self
            .repository
            .save_all(seeds.into_iter().map(Into::into).collect())?;

        info!("Successfully loaded {} products into database", inserted);
        Ok(inserted)
    }

    /// Inclusive price range filter; an absent bound is unbounded on that side.
    fn apply_price_filter(
        priced: Vec<PricedProduct>,
        min_price: Option<f64>,
        max_price: Option<f64>,
    ) -> Vec<PricedProduct> {
        priced
            .into_iter()
            .filter(|product| {
                if let Some(min) = min_price {
                    if product.price < min {
                        return false;
                    }
                }
                if let Some(max) = max_price {
                    if product.price > max {
                        return false;
                    }
                }
                true
            })
            .collect()
    }
}

#[async_trait]
impl ProductServiceTrait for ProductService {
    async fn get_all_products(&self) -> Result<Vec<PricedProduct>> {
        let products = self.repository.list()?;
        Ok(self.price_service.price_products(products).await)
    }

    async fn get_products_by_popularity(
        &self,
        direction: SortDirection,
    ) -> Result<Vec<PricedProduct>> {
        let products = self.repository.list_by_popularity(direction)?;
        Ok(self.price_service.price_products(products).await)
    }

    async fn search_products_by_name(&self, name: &str) -> Result<Vec<PricedProduct>> {
        let products = self.repository.search_by_name(name)?;
        Ok(self.price_service.price_products(products).await)
    }

    async fn filter_by_popularity(
        &self,
        min_score: Option<f64>,
        max_score: Option<f64>,
    ) -> Result<Vec<PricedProduct>> {
        let products = self
            .repository
            .list_by_popularity_range(min_score, max_score)?;
        Ok(self.price_service.price_products(products).await)
    }

    async fn filter_by_price_range(
        &self,
        min_price: Option<f64>,
        max_price: Option<f64>,
    ) -> Result<Vec<PricedProduct>> {
        let products = self.repository.list()?;
        let priced = self.price_service.price_products(products).await;
        Ok(Self::apply_price_filter(priced, min_price, max_price))
    }

    async fn filter_products(&self, filter: ProductFilter) -> Result<Vec<PricedProduct>> {
        // Popularity bounds go to the store first, price bounds last.
        let products = self
            .repository
            .list_by_popularity_range(filter.min_popularity, filter.max_popularity)?;

        let mut priced = self.price_service.price_products(products).await;

        if filter.has_price_filter() {
            priced = Self::apply_price_filter(priced, filter.min_price, filter.max_price);
        }

        Ok(priced)
    }
}
