//! HTTP server command
//!
//! Runs the product catalog API on PostgreSQL or, with `--in-memory`, on a
//! throwaway in-process store.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use productstore_server::db::{schema, seed};
use productstore_server::http::{run_server, ServerConfig};
use productstore_server::{MemoryProductStore, ProductRepository, ProductStore};

use super::db::DbArgs;

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, short = 'b', env = "PRODUCTSTORE_BIND", default_value = "127.0.0.1:3030")]
    pub bind: SocketAddr,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,

    /// Keep products in memory instead of PostgreSQL (data is lost on exit)
    #[arg(long)]
    pub in_memory: bool,

    /// Load the starter catalog if the store is empty
    #[arg(long)]
    pub seed: bool,

    #[command(flatten)]
    pub db: DbArgs,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    tracing::info!("Starting productstore server on {}", args.bind);

    let store: Arc<dyn ProductStore> = if args.in_memory {
        tracing::warn!("Using in-memory store; products will not persist");
        Arc::new(MemoryProductStore::new())
    } else {
        let store = args.db.open_store().await?;
        schema::ensure_schema(store.pool())
            .await
            .context("Failed to create products table")?;
        Arc::new(store)
    };

    if args.seed {
        seed::seed_defaults(store.as_ref())
            .await
            .context("Failed to seed products")?;
    }

    let config = ServerConfig {
        bind_addr: args.bind,
        cors_permissive: args.cors_permissive,
    };

    // Blocks until shutdown
    run_server(ProductRepository::new(store), config)
        .await
        .context("Server error")?;

    Ok(())
}
