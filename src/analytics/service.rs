//! Analytics dispatcher
//!
//! Validates request parameters, then delegates to the injected
//! [`AnalyticsStore`]. Validation happens before any engine call; an engine
//! returning zero rows is a valid outcome, never an error.

use std::sync::Arc;

use thiserror::Error;

use crate::store::{AnalyticsStore, StoreError};

use super::models::{
    ClientName, ProductBuyer, ProductName, ProductOrder, PurchasedProduct, Stats, Suggestion,
};

/// Errors surfaced by the dispatcher
#[derive(Error, Debug)]
pub enum AnalyticsError {
    /// A required request parameter is missing or empty
    #[error("missing required parameter '{0}'")]
    Validation(&'static str),

    /// The engine call failed
    #[error(transparent)]
    Query(#[from] StoreError),
}

pub type AnalyticsResult<T> = Result<T, AnalyticsError>;

/// Stateless façade over the graph engine.
///
/// Owns nothing but the injected store handle; cheap to share behind an
/// `Arc` across request handlers.
pub struct AnalyticsService {
    store: Arc<dyn AnalyticsStore>,
}

impl AnalyticsService {
    pub fn new(store: Arc<dyn AnalyticsStore>) -> Self {
        Self { store }
    }

    /// Backend identifier of the underlying store
    pub fn backend(&self) -> &'static str {
        self.store.backend()
    }

    pub async fn clients(&self) -> AnalyticsResult<Vec<ClientName>> {
        Ok(self.store.clients().await?)
    }

    pub async fn products(&self) -> AnalyticsResult<Vec<ProductName>> {
        Ok(self.store.products().await?)
    }

    pub async fn stats(&self) -> AnalyticsResult<Stats> {
        Ok(self.store.stats().await?)
    }

    pub async fn products_by_client(&self, client: &str) -> AnalyticsResult<Vec<PurchasedProduct>> {
        require("client", client)?;
        Ok(self.store.products_by_client(client).await?)
    }

    pub async fn clients_by_product(&self, product: &str) -> AnalyticsResult<Vec<ProductBuyer>> {
        require("product", product)?;
        Ok(self.store.clients_by_product(product).await?)
    }

    pub async fn suggestions(&self, client: &str) -> AnalyticsResult<Vec<Suggestion>> {
        require("client", client)?;
        Ok(self.store.suggestions(client).await?)
    }

    pub async fn orders_by_product(&self, product: &str) -> AnalyticsResult<Vec<ProductOrder>> {
        require("product", product)?;
        Ok(self.store.orders_by_product(product).await?)
    }
}

fn require(name: &'static str, value: &str) -> AnalyticsResult<()> {
    if value.is_empty() {
        return Err(AnalyticsError::Validation(name));
    }
    Ok(())
}
