//! Comptoir — read-only sales analytics over a graph engine
//!
//! A stateless HTTP façade over a graph of clients (`Client`), products
//! (`Produit`) and orders (`Commande`): each API operation maps to one
//! parameterized graph query whose records are shaped into a stable JSON
//! contract. All storage, indexing and query execution belong to the
//! engine; this service validates input, dispatches, and projects.
//!
//! # Architecture
//!
//! - [`store`] — the engine seam: [`store::AnalyticsStore`] trait with a
//!   bolt-backed [`store::Neo4jStore`] and an in-process
//!   [`store::MemoryStore`]
//! - [`analytics`] — parameter validation and dispatch, plus the wire models
//! - [`http`] — axum router, handlers, error mapping and the embedded
//!   dashboard page
//! - [`config`] — environment-driven configuration
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use comptoir::analytics::AnalyticsService;
//! use comptoir::store::MemoryStore;
//!
//! let mut store = MemoryStore::new();
//! store.add_client("Alice", "alice@example.com");
//! store.add_product("Cafetiere", 49.90);
//! store.add_order("CMD-1", "2024-01-12", 49.90, "Alice", &[("Cafetiere", 1)]);
//!
//! let service = AnalyticsService::new(Arc::new(store));
//! # let rt = tokio::runtime::Runtime::new().unwrap();
//! # rt.block_on(async {
//! let products = service.products_by_client("Alice").await.unwrap();
//! assert_eq!(products[0].produit, "Cafetiere");
//! # });
//! ```

#![warn(clippy::all)]

pub mod analytics;
pub mod config;
pub mod http;
pub mod store;

// Re-export main types for convenience
pub use analytics::{
    AnalyticsError, AnalyticsResult, AnalyticsService, ClientName, ProductBuyer, ProductName,
    ProductOrder, PurchasedProduct, Stats, Suggestion,
};
pub use config::{Backend, ServiceConfig};
pub use http::HttpServer;
pub use store::{AnalyticsStore, MemoryStore, Neo4jSettings, Neo4jStore, StoreError, StoreResult};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}
