//! Command implementations for the productstore CLI

pub mod db;
pub mod serve;

// Re-export dispatcher functions for flat access from main.rs
pub use db::{run_health, run_init_db, run_seed};
pub use serve::run_serve;
