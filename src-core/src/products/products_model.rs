use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::schema::products;

use super::products_errors::{ProductError, Result};

/// Image variant URLs for a product. Opaque to pricing and filtering.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProductImages {
    pub yellow: Option<String>,
    pub rose: Option<String>,
    pub white: Option<String>,
}

/// Domain model representing a catalog product. Immutable after seeding;
/// carries no price field, price is derived at query time.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    pub popularity_score: f64,
    pub weight: f64,
    pub images: ProductImages,
    pub created_at: NaiveDateTime,
}

/// Input model for seeding a product into the store
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    pub id: Option<String>,
    pub name: String,
    pub popularity_score: f64,
    pub weight: f64,
    pub images: ProductImages,
}

impl NewProduct {
    /// Validates the new product data
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(ProductError::InvalidData(
                "Product name cannot be empty".to_string(),
            ));
        }
        if self.popularity_score < 0.0 {
            return Err(ProductError::InvalidData(
                "Popularity score cannot be negative".to_string(),
            ));
        }
        if self.weight < 0.0 {
            return Err(ProductError::InvalidData(
                "Weight cannot be negative".to_string(),
            ));
        }
        Ok(())
    }
}

/// One record of the static seed dataset
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedProduct {
    pub name: String,
    pub popularity_score: f64,
    pub weight: f64,
    #[serde(default)]
    pub images: ProductImages,
}

impl From<SeedProduct> for NewProduct {
    fn from(seed: SeedProduct) -> Self {
        NewProduct {
            id: None,
            name: seed.name,
            popularity_score: seed.popularity_score,
            weight: seed.weight,
            images: seed.images,
        }
    }
}

/// Database model for a product row
#[derive(Debug, Clone, Queryable, Insertable, Identifiable)]
#[diesel(table_name = products)]
pub struct ProductDB {
    pub id: String,
    pub name: String,
    pub popularity_score: f64,
    pub weight: f64,
    pub image_yellow: Option<String>,
    pub image_rose: Option<String>,
    pub image_white: Option<String>,
    pub created_at: NaiveDateTime,
}

impl From<ProductDB> for Product {
    fn from(db: ProductDB) -> Self {
        Product {
            id: db.id,
            name: db.name,
            popularity_score: db.popularity_score,
            weight: db.weight,
            images: ProductImages {
                yellow: db.image_yellow,
                rose: db.image_rose,
                white: db.image_white,
            },
            created_at: db.created_at,
        }
    }
}

impl From<NewProduct> for ProductDB {
    fn from(new_product: NewProduct) -> Self {
        ProductDB {
            id: new_product
                .id
                .unwrap_or_else(|| Uuid::new_v4().to_string()),
            name: new_product.name,
            popularity_score: new_product.popularity_score,
            weight: new_product.weight,
            image_yellow: new_product.images.yellow,
            image_rose: new_product.images.rose,
            image_white: new_product.images.white,
            created_at: chrono::Utc::now().naive_utc(),
        }
    }
}

/// Response-only view of a product with its derived price. Never persisted,
/// never shared across requests.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PricedProduct {
    pub id: String,
    pub name: String,
    pub popularity_score: f64,
    pub weight: f64,
    pub images: ProductImages,
    pub price: f64,
}

impl PricedProduct {
    pub fn new(product: Product, price: f64) -> Self {
        Self {
            id: product.id,
            name: product.name,
            popularity_score: product.popularity_score,
            weight: product.weight,
            images: product.images,
            price,
        }
    }
}

/// Optional bounds of a combined catalog query. An absent bound is unbounded
/// on that side; a present pair is an inclusive closed range.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ProductFilter {
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub min_popularity: Option<f64>,
    pub max_popularity: Option<f64>,
}

impl ProductFilter {
    pub fn has_price_filter(&self) -> bool {
        self.min_price.is_some() || self.max_price.is_some()
    }
}

/// Popularity sort order for the explicit sort entry point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortDirection {
    Ascending,
    Descending,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_product_validation() {
        let valid = NewProduct {
            name: "Ring".to_string(),
            popularity_score: 0.5,
            weight: 2.5,
            ..Default::default()
        };
        assert!(valid.validate().is_ok());

        let empty_name = NewProduct {
            name: "  ".to_string(),
            ..Default::default()
        };
        assert!(empty_name.validate().is_err());

        let negative_weight = NewProduct {
            name: "Ring".to_string(),
            weight: -1.0,
            ..Default::default()
        };
        assert!(negative_weight.validate().is_err());
    }

    #[test]
    fn test_seed_product_parses_camel_case() {
        let json = r#"{
            "name": "Engagement Ring 1",
            "popularityScore": 0.85,
            "weight": 2.1,
            "images": { "yellow": "https://cdn.example.com/EG085-Y.jpg" }
        }"#;

        let seed: SeedProduct = serde_json::from_str(json).unwrap();
        assert_eq!(seed.name, "Engagement Ring 1");
        assert_eq!(seed.popularity_score, 0.85);
        assert_eq!(seed.weight, 2.1);
        assert!(seed.images.yellow.is_some());
        assert!(seed.images.rose.is_none());
    }

    #[test]
    fn test_has_price_filter() {
        assert!(!ProductFilter::default().has_price_filter());
        assert!(ProductFilter {
            min_price: Some(100.0),
            ..Default::default()
        }
        .has_price_filter());
        assert!(ProductFilter {
            max_price: Some(100.0),
            ..Default::default()
        }
        .has_price_filter());
    }
}
