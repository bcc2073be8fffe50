//! In-process product store
//!
//! Behaves like the PostgreSQL store (sequential ids, id ordering,
//! case-insensitive category match) without a database. Used by the test
//! suites and by `serve --in-memory`.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{DbError, InsertOutcome, ProductStore};
use crate::models::Product;

#[derive(Debug)]
struct Table {
    next_id: i32,
    rows: BTreeMap<i32, Product>,
}

/// Product store kept in a map behind a `RwLock`
#[derive(Debug)]
pub struct MemoryProductStore {
    table: RwLock<Table>,
    available: AtomicBool,
}

impl Default for MemoryProductStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryProductStore {
    pub fn new() -> Self {
        Self {
            table: RwLock::new(Table {
                next_id: 1,
                rows: BTreeMap::new(),
            }),
            available: AtomicBool::new(true),
        }
    }

    /// Simulate the store going away. While unavailable every operation
    /// fails the way an exhausted pool does and the health check is false.
    pub fn set_available(&self, available: bool) {
        self.available.store(available, Ordering::SeqCst);
    }

    fn ensure_available(&self) -> Result<(), DbError> {
        if self.available.load(Ordering::SeqCst) {
            Ok(())
        } else {
            Err(DbError::Sqlx(sqlx::Error::PoolTimedOut))
        }
    }
}

#[async_trait]
impl ProductStore for MemoryProductStore {
    async fn list_all(&self) -> Result<Vec<Product>, DbError> {
        self.ensure_available()?;
        Ok(self.table.read().await.rows.values().cloned().collect())
    }

    async fn get_by_id(&self, id: i32) -> Result<Option<Product>, DbError> {
        self.ensure_available()?;
        Ok(self.table.read().await.rows.get(&id).cloned())
    }

    async fn list_by_category(&self, category: &str) -> Result<Vec<Product>, DbError> {
        self.ensure_available()?;
        let table = self.table.read().await;
        Ok(table
            .rows
            .values()
            .filter(|p| p.in_category(category))
            .cloned()
            .collect())
    }

    async fn insert(&self, product: &Product) -> Result<InsertOutcome, DbError> {
        self.ensure_available()?;
        let mut table = self.table.write().await;
        let id = table.next_id;
        table.next_id += 1;
        table.rows.insert(
            id,
            Product {
                id,
                ..product.clone()
            },
        );

        Ok(InsertOutcome {
            id,
            rows_affected: 1,
        })
    }

    async fn update(&self, product: &Product) -> Result<u64, DbError> {
        self.ensure_available()?;
        let mut table = self.table.write().await;
        match table.rows.get_mut(&product.id) {
            Some(row) => {
                *row = product.clone();
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete(&self, id: i32) -> Result<u64, DbError> {
        self.ensure_available()?;
        let removed = self.table.write().await.rows.remove(&id);
        Ok(u64::from(removed.is_some()))
    }

    async fn health_check(&self) -> bool {
        self.available.load(Ordering::SeqCst)
    }
}
