//! Graph engine access layer
//!
//! The analytics dispatcher never talks to a graph engine directly; it goes
//! through the [`AnalyticsStore`] trait. Implemented by:
//! - [`Neo4jStore`] — executes parameterized Cypher against a Neo4j-compatible
//!   server over bolt
//! - [`MemoryStore`] — in-process stand-in for tests, demos and offline use

pub mod memory;
pub mod neo4j;

use async_trait::async_trait;
use thiserror::Error;

use crate::analytics::models::{
    ClientName, ProductBuyer, ProductName, ProductOrder, PurchasedProduct, Stats, Suggestion,
};

/// Errors raised by a graph engine backend
#[derive(Error, Debug)]
pub enum StoreError {
    /// The engine call itself failed (connectivity, query rejected, ...)
    #[error("graph engine error: {0}")]
    Engine(String),

    /// The engine answered, but a record is missing an expected column
    /// or carries a value of an unexpected type
    #[error("malformed record: column '{0}' missing or of unexpected type")]
    Malformed(String),
}

impl From<neo4rs::Error> for StoreError {
    fn from(e: neo4rs::Error) -> Self {
        StoreError::Engine(e.to_string())
    }
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Read-only analytic operations over the Client/Produit/Commande graph.
///
/// One method per operation; every method returns the complete, already
/// ordered result set. Zero rows is a valid outcome, never an error.
#[async_trait]
pub trait AnalyticsStore: Send + Sync {
    /// Short backend identifier reported by the status endpoint
    fn backend(&self) -> &'static str;

    /// All client names, ascending
    async fn clients(&self) -> StoreResult<Vec<ClientName>>;

    /// All product names, ascending
    async fn products(&self) -> StoreResult<Vec<ProductName>>;

    /// Node counts and total revenue. Each count is computed independently;
    /// any sub-query failure fails the whole call.
    async fn stats(&self) -> StoreResult<Stats>;

    /// Distinct products bought by the named client, by product name ascending
    async fn products_by_client(&self, client: &str) -> StoreResult<Vec<PurchasedProduct>>;

    /// Distinct clients who bought the named product, by client name ascending
    async fn clients_by_product(&self, product: &str) -> StoreResult<Vec<ProductBuyer>>;

    /// Co-purchase suggestions for the named client: top 5 candidates by
    /// score descending, ties by product name ascending
    async fn suggestions(&self, client: &str) -> StoreResult<Vec<Suggestion>>;

    /// Every order containing the named product, by order date ascending
    async fn orders_by_product(&self, product: &str) -> StoreResult<Vec<ProductOrder>>;
}

pub use memory::MemoryStore;
pub use neo4j::{Neo4jSettings, Neo4jStore};
