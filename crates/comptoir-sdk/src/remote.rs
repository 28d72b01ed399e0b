//! RemoteClient — network client for a running Comptoir service

use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::error::{SdkError, SdkResult};
use crate::models::{
    ClientName, ProductBuyer, ProductName, ProductOrder, PurchasedProduct, ServiceStatus, Stats,
    Suggestion,
};

/// HTTP client for the analytics API.
///
/// All methods are read-only; the service exposes no mutations.
pub struct RemoteClient {
    base_url: String,
    http: Client,
}

impl RemoteClient {
    /// Create a new client for the given base URL.
    ///
    /// # Example
    /// ```no_run
    /// # use comptoir_sdk::RemoteClient;
    /// let client = RemoteClient::new("http://localhost:5001");
    /// ```
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http: Client::new(),
        }
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, &str)],
    ) -> SdkResult<T> {
        let url = format!("{}{}", self.base_url, path);
        let response = self.http.get(&url).query(params).send().await?;

        if response.status().is_success() {
            Ok(response.json().await?)
        } else {
            let status = response.status().as_u16();
            let body: serde_json::Value = response
                .json()
                .await
                .unwrap_or_else(|_| serde_json::json!({ "error": "unknown error" }));
            let message = body
                .get("error")
                .and_then(|v| v.as_str())
                .unwrap_or("unknown error")
                .to_string();
            Err(SdkError::Api { status, message })
        }
    }

    /// All client names, ascending
    pub async fn clients(&self) -> SdkResult<Vec<ClientName>> {
        self.get_json("/api/clients", &[]).await
    }

    /// All product names, ascending
    pub async fn products(&self) -> SdkResult<Vec<ProductName>> {
        self.get_json("/api/products", &[]).await
    }

    /// Graph-wide counters and revenue
    pub async fn stats(&self) -> SdkResult<Stats> {
        self.get_json("/api/stats", &[]).await
    }

    /// Distinct products bought by the named client
    pub async fn products_by_client(&self, client: &str) -> SdkResult<Vec<PurchasedProduct>> {
        self.get_json("/api/products-by-client", &[("client", client)])
            .await
    }

    /// Distinct clients who bought the named product
    pub async fn clients_by_product(&self, product: &str) -> SdkResult<Vec<ProductBuyer>> {
        self.get_json("/api/clients-by-product", &[("product", product)])
            .await
    }

    /// Top 5 co-purchase suggestions for the named client
    pub async fn suggestions(&self, client: &str) -> SdkResult<Vec<Suggestion>> {
        self.get_json("/api/suggestions", &[("client", client)]).await
    }

    /// Orders containing the named product, by date ascending
    pub async fn orders_by_product(&self, product: &str) -> SdkResult<Vec<ProductOrder>> {
        self.get_json("/api/orders-by-product", &[("product", product)])
            .await
    }

    /// Service liveness and build information
    pub async fn status(&self) -> SdkResult<ServiceStatus> {
        self.get_json("/api/status", &[]).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let client = RemoteClient::new("http://localhost:5001/");
        assert_eq!(client.base_url, "http://localhost:5001");
    }
}
