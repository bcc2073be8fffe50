//! productstore-server: product catalog over HTTP
//!
//! Three layers, leaf first:
//! - `db`: storage driver issuing parameterized SQL against `products`
//! - `repository`: facade adding not-found and argument checks
//! - `http`: axum routes mapping CRUD actions onto the repository

pub mod db;
pub mod http;
pub mod models;
pub mod repository;

pub use db::{DbError, MemoryProductStore, PgProductStore, ProductStore};
pub use http::{build_router, run_server, ApiError, AppState, ServerConfig};
pub use models::{Product, ProductPayload};
pub use repository::{ProductRepository, RepoError};
