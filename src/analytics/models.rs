//! Wire models for the analytics API
//!
//! Field names are the JSON contract consumed by the dashboard and the SDK;
//! they follow the graph schema's French property names.

use serde::{Deserialize, Serialize};

/// One client name, from the client listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientName {
    pub nom: String,
}

/// One product name, from the product listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductName {
    pub nom: String,
}

/// Graph-wide counters and total revenue
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stats {
    pub total_clients: i64,
    pub total_produits: i64,
    pub total_commandes: i64,
    /// Sum of order totals; `None` when the engine aggregates over no orders
    pub chiffre_affaires: Option<f64>,
}

/// A product bought by a given client
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchasedProduct {
    pub produit: String,
    pub prix: f64,
}

/// A client who bought a given product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductBuyer {
    pub client: String,
    pub email: String,
}

/// A co-purchase recommendation with its raw co-occurrence score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    pub produit_suggere: String,
    pub prix: f64,
    pub score: i64,
}

/// One order line for a given product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductOrder {
    pub commande_id: String,
    pub date: String,
    pub client: String,
    pub quantite: i64,
}
