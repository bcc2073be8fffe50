//! Storage driver - connection pool, schema and product stores
//!
//! # Design Principles
//!
//! - One statement per call, values always bound as parameters
//! - Rows decoded by column name, never by position
//! - Connections come from the pool and go back on every exit path
//! - Absence is `None` / an empty `Vec`, never an error

pub mod memory;
pub mod pool;
pub mod postgres;
pub mod schema;
pub mod seed;

use async_trait::async_trait;

use crate::models::Product;

pub use memory::MemoryProductStore;
pub use pool::{create_pool, create_pool_with_options, ConnectionSettings};
pub use postgres::PgProductStore;

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),
}

/// Result of an insert: the generated id and how many rows were written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InsertOutcome {
    pub id: i32,
    pub rows_affected: u64,
}

/// Operations the repository needs from a product table.
#[async_trait]
pub trait ProductStore: Send + Sync + 'static {
    /// All products, ascending by id.
    async fn list_all(&self) -> Result<Vec<Product>, DbError>;

    async fn get_by_id(&self, id: i32) -> Result<Option<Product>, DbError>;

    /// Products whose category equals `category`, ignoring case, ascending by id.
    async fn list_by_category(&self, category: &str) -> Result<Vec<Product>, DbError>;

    /// Insert with a store-generated id. `product.id` is ignored.
    async fn insert(&self, product: &Product) -> Result<InsertOutcome, DbError>;

    /// Overwrite every column of the row with `product.id`. Returns rows affected.
    async fn update(&self, product: &Product) -> Result<u64, DbError>;

    /// Returns rows affected (0 when the id does not exist).
    async fn delete(&self, id: i32) -> Result<u64, DbError>;

    /// Whether the store can be reached. Failures are logged, not returned.
    async fn health_check(&self) -> bool;
}
