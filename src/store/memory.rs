//! In-memory store
//!
//! Holds the Client/Produit/Commande graph in process and answers the same
//! operations as the Neo4j backend, with identical ordering and scoring
//! semantics. Used by tests, demos and offline development; no engine
//! required.

use std::collections::{BTreeMap, BTreeSet, HashSet};

use async_trait::async_trait;

use super::{AnalyticsStore, StoreResult};
use crate::analytics::models::{
    ClientName, ProductBuyer, ProductName, ProductOrder, PurchasedProduct, Stats, Suggestion,
};

#[derive(Debug, Clone)]
struct ClientRecord {
    nom: String,
    email: String,
}

#[derive(Debug, Clone)]
struct ProductRecord {
    nom: String,
    prix: f64,
}

#[derive(Debug, Clone)]
struct OrderRecord {
    id: String,
    date: String,
    total: f64,
    client: String,
    /// (product name, quantity), one line per product
    lines: Vec<(String, i64)>,
}

/// In-process graph of clients, products and orders
#[derive(Debug, Default)]
pub struct MemoryStore {
    clients: Vec<ClientRecord>,
    products: Vec<ProductRecord>,
    orders: Vec<OrderRecord>,
}

impl MemoryStore {
    /// Empty graph
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_client(&mut self, nom: &str, email: &str) {
        self.clients.push(ClientRecord {
            nom: nom.to_string(),
            email: email.to_string(),
        });
    }

    pub fn add_product(&mut self, nom: &str, prix: f64) {
        self.products.push(ProductRecord {
            nom: nom.to_string(),
            prix,
        });
    }

    /// Record an order placed by `client`, with one line per (product, quantity)
    pub fn add_order(&mut self, id: &str, date: &str, total: f64, client: &str, lines: &[(&str, i64)]) {
        self.orders.push(OrderRecord {
            id: id.to_string(),
            date: date.to_string(),
            total,
            client: client.to_string(),
            lines: lines
                .iter()
                .map(|(p, q)| (p.to_string(), *q))
                .collect(),
        });
    }

    /// Small sample catalog for the demo backend
    pub fn with_demo_data() -> Self {
        let mut store = Self::new();
        store.add_client("Alice Martin", "alice.martin@example.fr");
        store.add_client("Bruno Lefevre", "bruno.lefevre@example.fr");
        store.add_client("Chloe Dubois", "chloe.dubois@example.fr");
        store.add_client("David Moreau", "david.moreau@example.fr");

        store.add_product("Cafetiere", 49.90);
        store.add_product("Moulin a cafe", 29.50);
        store.add_product("Tasse en gres", 12.00);
        store.add_product("Bouilloire", 39.00);
        store.add_product("Theiere en fonte", 59.00);
        store.add_product("Filtre reutilisable", 8.50);

        store.add_order("CMD-1001", "2024-01-12", 79.40, "Alice Martin",
            &[("Cafetiere", 1), ("Moulin a cafe", 1)]);
        store.add_order("CMD-1002", "2024-01-19", 61.90, "Bruno Lefevre",
            &[("Cafetiere", 1), ("Tasse en gres", 1)]);
        store.add_order("CMD-1003", "2024-02-02", 47.50, "Bruno Lefevre",
            &[("Bouilloire", 1), ("Filtre reutilisable", 1)]);
        store.add_order("CMD-1004", "2024-02-15", 98.00, "Chloe Dubois",
            &[("Theiere en fonte", 1), ("Bouilloire", 1)]);
        store.add_order("CMD-1005", "2024-03-01", 24.00, "David Moreau",
            &[("Tasse en gres", 2)]);
        store
    }

    fn price_of(&self, nom: &str) -> Option<f64> {
        self.products.iter().find(|p| p.nom == nom).map(|p| p.prix)
    }

    /// Distinct names of products the client has ever ordered
    fn purchased_by(&self, client: &str) -> BTreeSet<String> {
        self.orders
            .iter()
            .filter(|o| o.client == client)
            .flat_map(|o| o.lines.iter().map(|(p, _)| p.clone()))
            .collect()
    }
}

#[async_trait]
impl AnalyticsStore for MemoryStore {
    fn backend(&self) -> &'static str {
        "memory"
    }

    async fn clients(&self) -> StoreResult<Vec<ClientName>> {
        let mut names: Vec<String> = self.clients.iter().map(|c| c.nom.clone()).collect();
        names.sort();
        Ok(names.into_iter().map(|nom| ClientName { nom }).collect())
    }

    async fn products(&self) -> StoreResult<Vec<ProductName>> {
        let mut names: Vec<String> = self.products.iter().map(|p| p.nom.clone()).collect();
        names.sort();
        Ok(names.into_iter().map(|nom| ProductName { nom }).collect())
    }

    async fn stats(&self) -> StoreResult<Stats> {
        let chiffre_affaires = if self.orders.is_empty() {
            None
        } else {
            Some(self.orders.iter().map(|o| o.total).sum())
        };
        Ok(Stats {
            total_clients: self.clients.len() as i64,
            total_produits: self.products.len() as i64,
            total_commandes: self.orders.len() as i64,
            chiffre_affaires,
        })
    }

    async fn products_by_client(&self, client: &str) -> StoreResult<Vec<PurchasedProduct>> {
        let mut seen: BTreeMap<String, f64> = BTreeMap::new();
        for order in self.orders.iter().filter(|o| o.client == client) {
            for (produit, _) in &order.lines {
                if let Some(prix) = self.price_of(produit) {
                    seen.entry(produit.clone()).or_insert(prix);
                }
            }
        }
        Ok(seen
            .into_iter()
            .map(|(produit, prix)| PurchasedProduct { produit, prix })
            .collect())
    }

    async fn clients_by_product(&self, product: &str) -> StoreResult<Vec<ProductBuyer>> {
        let mut seen: BTreeMap<String, String> = BTreeMap::new();
        for order in &self.orders {
            if order.lines.iter().any(|(p, _)| p == product) {
                if let Some(c) = self.clients.iter().find(|c| c.nom == order.client) {
                    seen.entry(c.nom.clone()).or_insert_with(|| c.email.clone());
                }
            }
        }
        Ok(seen
            .into_iter()
            .map(|(client, email)| ProductBuyer { client, email })
            .collect())
    }

    async fn suggestions(&self, client: &str) -> StoreResult<Vec<Suggestion>> {
        let purchased = self.purchased_by(client);
        if purchased.is_empty() {
            return Ok(Vec::new());
        }

        // Other clients sharing at least one purchased product
        let neighbours: HashSet<&str> = self
            .orders
            .iter()
            .filter(|o| o.client != client)
            .filter(|o| o.lines.iter().any(|(p, _)| purchased.contains(p)))
            .map(|o| o.client.as_str())
            .collect();

        // One point per neighbour order line naming a candidate product;
        // repeat orders weight the candidate again on purpose.
        let mut scores: BTreeMap<String, i64> = BTreeMap::new();
        for order in self
            .orders
            .iter()
            .filter(|o| neighbours.contains(o.client.as_str()))
        {
            for (produit, _) in &order.lines {
                if !purchased.contains(produit) {
                    *scores.entry(produit.clone()).or_insert(0) += 1;
                }
            }
        }

        let mut ranked: Vec<Suggestion> = scores
            .into_iter()
            .filter_map(|(produit, score)| {
                self.price_of(&produit).map(|prix| Suggestion {
                    produit_suggere: produit,
                    prix,
                    score,
                })
            })
            .collect();
        ranked.sort_by(|a, b| {
            b.score
                .cmp(&a.score)
                .then_with(|| a.produit_suggere.cmp(&b.produit_suggere))
        });
        ranked.truncate(5);
        Ok(ranked)
    }

    async fn orders_by_product(&self, product: &str) -> StoreResult<Vec<ProductOrder>> {
        let mut result: Vec<ProductOrder> = Vec::new();
        for order in &self.orders {
            if let Some((_, quantite)) = order.lines.iter().find(|(p, _)| p == product) {
                result.push(ProductOrder {
                    commande_id: order.id.clone(),
                    date: order.date.clone(),
                    client: order.client.clone(),
                    quantite: *quantite,
                });
            }
        }
        result.sort_by(|a, b| a.date.cmp(&b.date));
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_client_store() -> MemoryStore {
        let mut store = MemoryStore::new();
        store.add_client("Alice", "alice@example.com");
        store.add_client("Bob", "bob@example.com");
        store.add_product("Widget", 9.99);
        store.add_product("Gadget", 19.99);
        store.add_product("Thingamajig", 5.00);
        store.add_order("C1", "2024-01-01", 29.98, "Alice", &[("Widget", 1), ("Gadget", 1)]);
        store.add_order("C2", "2024-01-02", 24.99, "Bob", &[("Gadget", 1), ("Thingamajig", 1)]);
        store
    }

    #[tokio::test]
    async fn test_suggestions_exclude_purchased() {
        let store = two_client_store();
        let result = store.suggestions("Alice").await.unwrap();
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].produit_suggere, "Thingamajig");
        assert_eq!(result[0].prix, 5.00);
        assert_eq!(result[0].score, 1);
    }

    #[tokio::test]
    async fn test_suggestions_weight_repeat_orders() {
        let mut store = two_client_store();
        // Bob buys the same candidate again in a second order
        store.add_order("C3", "2024-01-03", 5.00, "Bob", &[("Thingamajig", 1)]);
        let result = store.suggestions("Alice").await.unwrap();
        assert_eq!(result[0].produit_suggere, "Thingamajig");
        assert_eq!(result[0].score, 2);
    }

    #[tokio::test]
    async fn test_suggestions_no_history_is_empty() {
        let store = two_client_store();
        assert!(store.suggestions("Nobody").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_products_by_client_distinct() {
        let mut store = two_client_store();
        // Alice buys Widget a second time; it must not appear twice
        store.add_order("C4", "2024-02-01", 9.99, "Alice", &[("Widget", 3)]);
        let result = store.products_by_client("Alice").await.unwrap();
        let names: Vec<&str> = result.iter().map(|p| p.produit.as_str()).collect();
        assert_eq!(names, vec!["Gadget", "Widget"]);
    }

    #[tokio::test]
    async fn test_stats_on_empty_graph() {
        let store = MemoryStore::new();
        let stats = store.stats().await.unwrap();
        assert_eq!(stats.total_clients, 0);
        assert_eq!(stats.total_produits, 0);
        assert_eq!(stats.total_commandes, 0);
        assert_eq!(stats.chiffre_affaires, None);
    }

    #[tokio::test]
    async fn test_orders_by_product_sorted_by_date() {
        let mut store = two_client_store();
        store.add_order("C0", "2023-12-25", 19.99, "Alice", &[("Gadget", 2)]);
        let result = store.orders_by_product("Gadget").await.unwrap();
        let dates: Vec<&str> = result.iter().map(|o| o.date.as_str()).collect();
        assert_eq!(dates, vec!["2023-12-25", "2024-01-01", "2024-01-02"]);
        assert_eq!(result[0].quantite, 2);
    }
}
