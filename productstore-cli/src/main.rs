//! productstore CLI - product catalog service
//!
//! Entry point for the `productstore` binary:
//! - `serve`: run the HTTP API
//! - `health`: check database reachability
//! - `init-db`: create the products table
//! - `seed`: load the starter catalog into an empty table

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod tracing_setup;

use tracing_setup::TracingConfig;

#[derive(Parser, Debug)]
#[command(
    name = "productstore",
    author,
    version,
    about = "Product catalog HTTP service backed by PostgreSQL"
)]
struct Cli {
    /// Debug logging (when RUST_LOG is not set)
    #[arg(long, global = true)]
    debug: bool,

    /// Export traces over OTLP (requires the `telemetry` feature)
    #[arg(long, global = true)]
    otel: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP API server
    Serve(commands::serve::ServeArgs),
    /// Check whether the database is reachable
    Health(commands::db::DbArgs),
    /// Create the products table if it does not exist
    InitDb(commands::db::DbArgs),
    /// Load the starter catalog into an empty products table
    Seed(commands::db::DbArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env before clap reads env-backed arguments
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    tracing_setup::init(&TracingConfig {
        debug: cli.debug,
        otel: cli.otel,
    })?;

    let result = match cli.command {
        Commands::Serve(args) => commands::run_serve(args).await,
        Commands::Health(args) => commands::run_health(args).await,
        Commands::InitDb(args) => commands::run_init_db(args).await,
        Commands::Seed(args) => commands::run_seed(args).await,
    };

    tracing_setup::shutdown_otel();
    result
}
