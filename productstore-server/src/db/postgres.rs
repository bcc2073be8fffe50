//! PostgreSQL product store
//!
//! Every method is one statement against `products`; values are always bound.

use async_trait::async_trait;
use sqlx::PgPool;

use super::{DbError, InsertOutcome, ProductStore};
use crate::models::Product;

/// Product store backed by a PostgreSQL pool
#[derive(Debug, Clone)]
pub struct PgProductStore {
    pool: PgPool,
}

impl PgProductStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl ProductStore for PgProductStore {
    async fn list_all(&self) -> Result<Vec<Product>, DbError> {
        let products = sqlx::query_as::<_, Product>(
            "SELECT id, name, category, price FROM products ORDER BY id ASC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(products)
    }

    async fn get_by_id(&self, id: i32) -> Result<Option<Product>, DbError> {
        let product = sqlx::query_as::<_, Product>(
            "SELECT id, name, category, price FROM products WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(product)
    }

    async fn list_by_category(&self, category: &str) -> Result<Vec<Product>, DbError> {
        // lower() depends on the database LC_CTYPE (ASCII-only under C), so
        // the case fold happens here with the same rule as every other store.
        let products = sqlx::query_as::<_, Product>(
            r#"
            SELECT id, name, category, price
            FROM products
            WHERE category IS NOT NULL
            ORDER BY id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(products
            .into_iter()
            .filter(|p| p.in_category(category))
            .collect())
    }

    async fn insert(&self, product: &Product) -> Result<InsertOutcome, DbError> {
        let id: i32 = sqlx::query_scalar(
            "INSERT INTO products (name, category, price) VALUES ($1, $2, $3) RETURNING id",
        )
        .bind(&product.name)
        .bind(product.category.as_deref())
        .bind(product.price)
        .fetch_one(&self.pool)
        .await?;

        Ok(InsertOutcome {
            id,
            rows_affected: 1,
        })
    }

    async fn update(&self, product: &Product) -> Result<u64, DbError> {
        let result = sqlx::query(
            "UPDATE products SET name = $2, category = $3, price = $4 WHERE id = $1",
        )
        .bind(product.id)
        .bind(&product.name)
        .bind(product.category.as_deref())
        .bind(product.price)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    async fn delete(&self, id: i32) -> Result<u64, DbError> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    async fn health_check(&self) -> bool {
        let mut conn = match self.pool.acquire().await {
            Ok(conn) => conn,
            Err(e) => {
                tracing::warn!(error = %e, "database unreachable");
                return false;
            }
        };

        match sqlx::query("SELECT 1").execute(&mut *conn).await {
            Ok(_) => true,
            Err(e) => {
                tracing::warn!(error = %e, "database ping failed");
                false
            }
        }
    }
}
