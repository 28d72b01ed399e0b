//! HTTP server for the analytics API and the dashboard page

use std::sync::Arc;

use axum::{
    response::{Html, IntoResponse},
    routing::get,
    Router,
};
use axum::http::StatusCode;
use rust_embed::RustEmbed;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::analytics::AnalyticsService;

use super::handler::{
    clients_by_product_handler, clients_handler, orders_by_product_handler, products_by_client_handler,
    products_handler, stats_handler, status_handler, suggestions_handler,
};

#[derive(RustEmbed)]
#[folder = "src/http/static/"]
struct Assets;

async fn index_handler() -> impl IntoResponse {
    match Assets::get("index.html") {
        Some(page) => Html(String::from_utf8_lossy(page.data.as_ref()).into_owned()).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

/// HTTP server owning the bound address and the shared dispatcher
pub struct HttpServer {
    service: Arc<AnalyticsService>,
    addr: String,
    port: u16,
}

impl HttpServer {
    pub fn new(service: Arc<AnalyticsService>, addr: &str, port: u16) -> Self {
        Self {
            service,
            addr: addr.to_string(),
            port,
        }
    }

    /// The full application router. Public so tests can drive it in-process.
    pub fn router(service: Arc<AnalyticsService>) -> Router {
        Router::new()
            .route("/", get(index_handler))
            .route("/api/clients", get(clients_handler))
            .route("/api/products", get(products_handler))
            .route("/api/stats", get(stats_handler))
            .route("/api/products-by-client", get(products_by_client_handler))
            .route("/api/clients-by-product", get(clients_by_product_handler))
            .route("/api/suggestions", get(suggestions_handler))
            .route("/api/orders-by-product", get(orders_by_product_handler))
            .route("/api/status", get(status_handler))
            .layer(CorsLayer::permissive())
            .with_state(service)
    }

    /// Bind and serve until the process is stopped
    pub async fn serve(&self) -> anyhow::Result<()> {
        let app = Self::router(Arc::clone(&self.service));
        let addr = format!("{}:{}", self.addr, self.port);
        let listener = tokio::net::TcpListener::bind(&addr).await?;

        info!("dashboard available at http://{}", addr);

        axum::serve(listener, app).await?;

        Ok(())
    }
}
