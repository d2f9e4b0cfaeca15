use std::io::Write;
use std::sync::Arc;

use productify_core::gold_price::{GoldPriceError, GoldPriceProvider, GoldPriceService};
use productify_core::pricing::PriceService;
use productify_core::products::{
    NewProduct, ProductFilter, ProductImages, ProductRepository, ProductRepositoryTrait,
    ProductService, ProductServiceTrait, SortDirection,
};

mod common;

struct FixedProvider(f64);

#[async_trait::async_trait]
impl GoldPriceProvider for FixedProvider {
    async fn fetch_price_per_gram(&self) -> Result<f64, GoldPriceError> {
        Ok(self.0)
    }
}

fn new_product(name: &str, popularity_score: f64, weight: f64) -> NewProduct {
    NewProduct {
        id: None,
        name: name.to_string(),
        popularity_score,
        weight,
        images: ProductImages::default(),
    }
}

fn build_service(
    pool: Arc<productify_core::db::DbPool>,
    rate: f64,
) -> (ProductService, Arc<ProductRepository>) {
    let repository = Arc::new(ProductRepository::new(pool));
    let gold_price_service = Arc::new(GoldPriceService::new(Arc::new(FixedProvider(rate))));
    let price_service = Arc::new(PriceService::new(gold_price_service));
    (
        ProductService::new(repository.clone(), price_service),
        repository,
    )
}

#[tokio::test]
async fn test_store_query_semantics() {
    let (_dir, pool) = common::setup_test_db();
    let (_, repository) = build_service(pool, 100.0);

    repository
        .save_all(vec![
            new_product("Golden Ring", 0.5, 2.0),
            new_product("Silver Bracelet", 3.0, 4.0),
            new_product("Pendant", 3.0, 1.0),
        ])
        .unwrap();

    // Case-insensitive substring match
    let hits = repository.search_by_name("golden").unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].name, "Golden Ring");

    // Inclusive popularity range, boundary included
    let in_range = repository
        .list_by_popularity_range(Some(0.5), Some(3.0))
        .unwrap();
    assert_eq!(in_range.len(), 3);
    let above = repository
        .list_by_popularity_range(Some(3.5), None)
        .unwrap();
    assert!(above.is_empty());

    // Stable popularity sort: ties stay in insertion order
    let sorted = repository
        .list_by_popularity(SortDirection::Ascending)
        .unwrap();
    let names: Vec<_> = sorted.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Golden Ring", "Silver Bracelet", "Pendant"]);
}

#[tokio::test]
async fn test_ring_end_to_end() {
    let (_dir, pool) = common::setup_test_db();
    let (service, repository) = build_service(pool, 100.0);

    repository
        .save_all(vec![new_product("Ring", 0.2, 5.0)])
        .unwrap();

    // price = (0.2 + 1) * 5 * 100 = 600
    let all = service.get_all_products().await.unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].price, 600.0);

    let within = service
        .filter_products(ProductFilter {
            min_price: Some(500.0),
            max_price: Some(700.0),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(within.len(), 1);
    assert_eq!(within[0].name, "Ring");

    let above = service
        .filter_products(ProductFilter {
            min_price: Some(700.0),
            ..Default::default()
        })
        .await
        .unwrap();
    assert!(above.is_empty());
}

#[tokio::test]
async fn test_seed_load_is_idempotent_against_store() {
    let (_dir, pool) = common::setup_test_db();
    let (service, repository) = build_service(pool, 100.0);

    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"[
            {{"name": "Engagement Ring 1", "popularityScore": 0.85, "weight": 2.1,
              "images": {{"yellow": "https://cdn.example.com/EG085-Y.jpg"}}}},
            {{"name": "Engagement Ring 2", "popularityScore": 0.51, "weight": 3.7}}
        ]"#
    )
    .unwrap();

    assert_eq!(service.load_seed_products(file.path()), 2);
    assert_eq!(repository.count().unwrap(), 2);

    // Simulated restart: the second load must not duplicate records.
    assert_eq!(service.load_seed_products(file.path()), 0);
    assert_eq!(repository.count().unwrap(), 2);

    let seeded = repository.search_by_name("Engagement Ring 1").unwrap();
    assert_eq!(
        seeded[0].images.yellow.as_deref(),
        Some("https://cdn.example.com/EG085-Y.jpg")
    );
    assert!(!seeded[0].id.is_empty());
}
