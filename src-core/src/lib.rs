pub mod db;

pub mod errors;
pub mod gold_price;
pub mod pricing;
pub mod products;
pub mod schema;

pub use errors::{Error, Result};
