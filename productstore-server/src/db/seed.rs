//! Sample catalog rows for fresh databases

use rust_decimal::Decimal;

use super::{DbError, ProductStore};
use crate::models::Product;

/// The starter catalog.
pub fn default_products() -> Vec<Product> {
    vec![
        Product::new("Tomato soup", Some("Groceries"), Decimal::new(139, 2)),
        Product::new("Yo-yo", Some("Toys"), Decimal::new(375, 2)),
        Product::new("Hammer", Some("Hardware"), Decimal::new(1699, 2)),
    ]
}

/// Insert the starter catalog when the table is empty.
///
/// Returns how many rows were written (0 when the table already had data).
pub async fn seed_defaults(store: &dyn ProductStore) -> Result<u64, DbError> {
    if !store.list_all().await?.is_empty() {
        tracing::info!("Catalog already populated, skipping seed");
        return Ok(0);
    }

    let mut written = 0;
    for product in default_products() {
        let outcome = store.insert(&product).await?;
        tracing::debug!(id = outcome.id, name = %product.name, "seeded product");
        written += outcome.rows_affected;
    }

    tracing::info!(count = written, "Seeded starter catalog");
    Ok(written)
}
