//! Product repository - a thin facade over the storage driver
//!
//! Adds the not-found and argument checks the HTTP layer relies on. The store
//! is injected at construction; there is no shared global instance.

use std::sync::Arc;

use crate::db::{DbError, ProductStore};
use crate::models::Product;

/// Repository error type
#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    /// Caller passed no item where one is required
    #[error("invalid argument: {name} must be provided")]
    InvalidArgument { name: &'static str },

    #[error(transparent)]
    Store(#[from] DbError),
}

/// Product repository over any [`ProductStore`]
#[derive(Clone)]
pub struct ProductRepository {
    store: Arc<dyn ProductStore>,
}

impl ProductRepository {
    pub fn new(store: Arc<dyn ProductStore>) -> Self {
        Self { store }
    }

    /// Every product, ascending by id. Empty when the table is.
    pub async fn get_all(&self) -> Result<Vec<Product>, RepoError> {
        Ok(self.store.list_all().await?)
    }

    pub async fn get(&self, id: i32) -> Result<Option<Product>, RepoError> {
        Ok(self.store.get_by_id(id).await?)
    }

    /// Products in `category`, compared case-insensitively by the store.
    pub async fn get_by_category(&self, category: &str) -> Result<Vec<Product>, RepoError> {
        Ok(self.store.list_by_category(category).await?)
    }

    /// Insert `item` and return it with the generated id.
    pub async fn add(&self, item: Option<Product>) -> Result<Product, RepoError> {
        let mut item = item.ok_or(RepoError::InvalidArgument { name: "item" })?;
        let outcome = self.store.insert(&item).await?;
        item.id = outcome.id;

        tracing::debug!(id = item.id, "product added");
        Ok(item)
    }

    /// Overwrite the stored row with `item`.
    ///
    /// Returns `false` without writing when no row has `item.id`.
    pub async fn update(&self, item: Option<Product>) -> Result<bool, RepoError> {
        let item = item.ok_or(RepoError::InvalidArgument { name: "item" })?;
        if self.store.get_by_id(item.id).await?.is_none() {
            return Ok(false);
        }

        let rows = self.store.update(&item).await?;
        tracing::debug!(id = item.id, rows, "product updated");
        Ok(true)
    }

    /// Delete by id. Deleting a missing id is a no-op.
    pub async fn remove(&self, id: i32) -> Result<(), RepoError> {
        let rows = self.store.delete(id).await?;
        tracing::debug!(id, rows, "product removed");
        Ok(())
    }

    pub async fn is_healthy(&self) -> bool {
        self.store.health_check().await
    }
}
