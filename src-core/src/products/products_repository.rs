use diesel::prelude::*;
use std::sync::Arc;

use crate::db::{get_connection, DbPool};
use crate::schema::products;

use super::products_errors::Result;
use super::products_model::{NewProduct, Product, ProductDB, SortDirection};
use super::products_traits::ProductRepositoryTrait;

/// Repository for reading catalog products from the database
pub struct ProductRepository {
    pool: Arc<DbPool>,
}

impl ProductRepository {
    /// Creates a new ProductRepository instance
    pub fn new(pool: Arc<DbPool>) -> Self {
        Self { pool }
    }
}

impl ProductRepositoryTrait for ProductRepository {
    /// Lists all products in store order
    fn list(&self) -> Result<Vec<Product>> {
        let mut conn = get_connection(&self.pool)?;

        let results = products::table.load::<ProductDB>(&mut conn)?;

        Ok(results.into_iter().map(Product::from).collect())
    }

    /// Lists all products ordered by popularity, ties resolved by insertion
    /// order so the result is stable
    fn list_by_popularity(&self, direction: SortDirection) -> Result<Vec<Product>> {
        let mut conn = get_connection(&self.pool)?;

        let results = match direction {
            SortDirection::Ascending => products::table
                .order(products::popularity_score.asc())
                .then_order_by(products::created_at.asc())
                .load::<ProductDB>(&mut conn)?,
            SortDirection::Descending => products::table
                .order(products::popularity_score.desc())
                .then_order_by(products::created_at.asc())
                .load::<ProductDB>(&mut conn)?,
        };

        Ok(results.into_iter().map(Product::from).collect())
    }

    /// Case-insensitive substring match on name. An empty string matches
    /// every product.
    fn search_by_name(&self, name: &str) -> Result<Vec<Product>> {
        let mut conn = get_connection(&self.pool)?;

        // SQLite LIKE is case-insensitive for ASCII
        let results = products::table
            .filter(products::name.like(format!("%{}%", name)))
            .load::<ProductDB>(&mut conn)?;

        Ok(results.into_iter().map(Product::from).collect())
    }

    /// Inclusive popularity range query. Exactly one query is issued,
    /// picked by which bounds are present; both absent is a full scan.
    fn list_by_popularity_range(
        &self,
        min_score: Option<f64>,
        max_score: Option<f64>,
    ) -> Result<Vec<Product>> {
        let mut conn = get_connection(&self.pool)?;

        let results = match (min_score, max_score) {
            (Some(min), Some(max)) => products::table
                .filter(products::popularity_score.between(min, max))
                .load::<ProductDB>(&mut conn)?,
            (Some(min), None) => products::table
                .filter(products::popularity_score.ge(min))
                .load::<ProductDB>(&mut conn)?,
            (None, Some(max)) => products::table
                .filter(products::popularity_score.le(max))
                .load::<ProductDB>(&mut conn)?,
            (None, None) => products::table.load::<ProductDB>(&mut conn)?,
        };

        Ok(results.into_iter().map(Product::from).collect())
    }

    /// Counts products currently in the store
    fn count(&self) -> Result<i64> {
        let mut conn = get_connection(&self.pool)?;

        Ok(products::table.count().get_result::<i64>(&mut conn)?)
    }

    /// Inserts seed products. Used only by the one-time startup load.
    fn save_all(&self, new_products: Vec<NewProduct>) -> Result<usize> {
        let mut conn = get_connection(&self.pool)?;

        let rows = new_products
            .into_iter()
            .map(|new_product| {
                new_product.validate()?;
                Ok(ProductDB::from(new_product))
            })
            .collect::<Result<Vec<_>>>()?;

        let inserted = diesel::insert_into(products::table)
            .values(&rows)
            .execute(&mut conn)?;

        Ok(inserted)
    }
}
