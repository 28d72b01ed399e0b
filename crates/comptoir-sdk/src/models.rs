//! Response models of the analytics API
//!
//! Mirrors the service's JSON contract; field names follow the graph
//! schema's French property names.

use serde::{Deserialize, Serialize};

/// One entry of `/api/clients`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientName {
    pub nom: String,
}

/// One entry of `/api/products`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductName {
    pub nom: String,
}

/// Body of `/api/stats`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stats {
    pub total_clients: i64,
    pub total_produits: i64,
    pub total_commandes: i64,
    /// `null` when the graph holds no orders
    pub chiffre_affaires: Option<f64>,
}

/// One entry of `/api/products-by-client`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PurchasedProduct {
    pub produit: String,
    pub prix: f64,
}

/// One entry of `/api/clients-by-product`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductBuyer {
    pub client: String,
    pub email: String,
}

/// One entry of `/api/suggestions`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Suggestion {
    pub produit_suggere: String,
    pub prix: f64,
    pub score: i64,
}

/// One entry of `/api/orders-by-product`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductOrder {
    pub commande_id: String,
    pub date: String,
    pub client: String,
    pub quantite: i64,
}

/// Body of `/api/status`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceStatus {
    pub status: String,
    pub version: String,
    pub backend: String,
}
