//! Analytic queries over the sales graph
//!
//! Seven read-only operations: client and product listings, graph-wide
//! statistics, purchases by client, buyers by product, co-purchase
//! suggestions, and order lines by product.

pub mod models;
pub mod service;

pub use models::{
    ClientName, ProductBuyer, ProductName, ProductOrder, PurchasedProduct, Stats, Suggestion,
};
pub use service::{AnalyticsError, AnalyticsResult, AnalyticsService};
