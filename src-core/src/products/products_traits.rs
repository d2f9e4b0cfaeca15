use async_trait::async_trait;

use super::products_errors::Result;
use super::products_model::{NewProduct, PricedProduct, Product, ProductFilter, SortDirection};

/// Trait defining the contract for the catalog query surface. Every
/// operation returns priced products; rate unavailability is absorbed
/// below this layer and never surfaces here.
#[async_trait]
pub trait ProductServiceTrait: Send + Sync {
    async fn get_all_products(&self) -> Result<Vec<PricedProduct>>;
    async fn get_products_by_popularity(
        &self,
        direction: SortDirection,
    ) -> Result<Vec<PricedProduct>>;
    async fn search_products_by_name(&self, name: &str) -> Result<Vec<PricedProduct>>;
    async fn filter_by_popularity(
        &self,
        min_score: Option<f64>,
        max_score: Option<f64>,
    ) -> Result<Vec<PricedProduct>>;
    async fn filter_by_price_range(
        &self,
        min_price: Option<f64>,
        max_price: Option<f64>,
    ) -> Result<Vec<PricedProduct>>;
    async fn filter_products(&self, filter: ProductFilter) -> Result<Vec<PricedProduct>>;
}

/// Trait defining the contract for product store operations.
pub trait ProductRepositoryTrait: Send + Sync {
    fn list(&self) -> Result<Vec<Product>>;
    fn list_by_popularity(&self, direction: SortDirection) -> Result<Vec<Product>>;
    fn search_by_name(&self, name: &str) -> Result<Vec<Product>>;
    fn list_by_popularity_range(
        &self,
        min_score: Option<f64>,
        max_score: Option<f64>,
    ) -> Result<Vec<Product>>;
    fn count(&self) -> Result<i64>;
    fn save_all(&self, new_products: Vec<NewProduct>) -> Result<usize>;
}
