//! HTTP handlers for the analytics API

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use serde_json::json;
use tracing::error;

use crate::analytics::models::{
    ClientName, ProductBuyer, ProductName, ProductOrder, PurchasedProduct, Stats, Suggestion,
};
use crate::analytics::{AnalyticsError, AnalyticsService};

/// `?client=` parameter; absent and empty are treated alike
#[derive(Deserialize)]
pub struct ClientParam {
    #[serde(default)]
    client: Option<String>,
}

/// `?product=` parameter
#[derive(Deserialize)]
pub struct ProductParam {
    #[serde(default)]
    product: Option<String>,
}

/// Dispatcher errors mapped onto HTTP responses
pub struct ApiError(AnalyticsError);

impl From<AnalyticsError> for ApiError {
    fn from(e: AnalyticsError) -> Self {
        ApiError(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self.0 {
            AnalyticsError::Validation(_) => StatusCode::BAD_REQUEST,
            AnalyticsError::Query(_) => {
                error!("engine call failed: {}", self.0);
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        (status, Json(json!({ "error": self.0.to_string() }))).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

pub async fn clients_handler(
    State(service): State<Arc<AnalyticsService>>,
) -> ApiResult<Json<Vec<ClientName>>> {
    Ok(Json(service.clients().await?))
}

pub async fn products_handler(
    State(service): State<Arc<AnalyticsService>>,
) -> ApiResult<Json<Vec<ProductName>>> {
    Ok(Json(service.products().await?))
}

pub async fn stats_handler(
    State(service): State<Arc<AnalyticsService>>,
) -> ApiResult<Json<Stats>> {
    Ok(Json(service.stats().await?))
}

pub async fn products_by_client_handler(
    State(service): State<Arc<AnalyticsService>>,
    Query(params): Query<ClientParam>,
) -> ApiResult<Json<Vec<PurchasedProduct>>> {
    let client = params.client.as_deref().unwrap_or_default();
    Ok(Json(service.products_by_client(client).await?))
}

pub async fn clients_by_product_handler(
    State(service): State<Arc<AnalyticsService>>,
    Query(params): Query<ProductParam>,
) -> ApiResult<Json<Vec<ProductBuyer>>> {
    let product = params.product.as_deref().unwrap_or_default();
    Ok(Json(service.clients_by_product(product).await?))
}

pub async fn suggestions_handler(
    State(service): State<Arc<AnalyticsService>>,
    Query(params): Query<ClientParam>,
) -> ApiResult<Json<Vec<Suggestion>>> {
    let client = params.client.as_deref().unwrap_or_default();
    Ok(Json(service.suggestions(client).await?))
}

pub async fn orders_by_product_handler(
    State(service): State<Arc<AnalyticsService>>,
    Query(params): Query<ProductParam>,
) -> ApiResult<Json<Vec<ProductOrder>>> {
    let product = params.product.as_deref().unwrap_or_default();
    Ok(Json(service.orders_by_product(product).await?))
}

/// Liveness and build information
pub async fn status_handler(State(service): State<Arc<AnalyticsService>>) -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "version": crate::VERSION,
        "backend": service.backend(),
    }))
}
