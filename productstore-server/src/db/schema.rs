//! Schema bootstrap for the products table

use sqlx::PgPool;

use super::DbError;

/// Create the `products` table if it does not exist yet.
///
/// Columns are `(id, name, category, price)`; `id` is the auto-increment key.
pub async fn ensure_schema(pool: &PgPool) -> Result<(), DbError> {
    tracing::info!("Ensuring products schema...");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS products (
            id SERIAL PRIMARY KEY,
            name TEXT NOT NULL,
            category TEXT,
            price NUMERIC(12, 2)
        )
        "#,
    )
    .execute(pool)
    .await?;

    tracing::info!("Products schema ready");
    Ok(())
}
