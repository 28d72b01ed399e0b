//! Neo4j-backed store
//!
//! Each operation maps to one parameterized Cypher query (statistics run
//! four). The driver owns connection pooling; a handle is opened once at
//! startup and dropped at shutdown.

use async_trait::async_trait;
use neo4rs::{query, Graph, Row};
use tracing::debug;

use super::{AnalyticsStore, StoreError, StoreResult};
use crate::analytics::models::{
    ClientName, ProductBuyer, ProductName, ProductOrder, PurchasedProduct, Stats, Suggestion,
};

const CLIENTS: &str = "MATCH (c:Client) RETURN c.nom AS nom ORDER BY nom";

const PRODUCTS: &str = "MATCH (p:Produit) RETURN p.nom AS nom ORDER BY nom";

const COUNT_CLIENTS: &str = "MATCH (c:Client) RETURN count(c) AS total";
const COUNT_PRODUCTS: &str = "MATCH (p:Produit) RETURN count(p) AS total";
const COUNT_ORDERS: &str = "MATCH (cmd:Commande) RETURN count(cmd) AS total";
const REVENUE: &str = "MATCH (cmd:Commande) RETURN sum(cmd.total) AS total";

const PRODUCTS_BY_CLIENT: &str = "\
MATCH (c:Client {nom: $client})-[:A_EFFECTUE]->(:Commande)-[:CONTIENT]->(p:Produit)
RETURN DISTINCT p.nom AS produit, p.prix AS prix
ORDER BY produit";

const CLIENTS_BY_PRODUCT: &str = "\
MATCH (c:Client)-[:A_EFFECTUE]->(:Commande)-[:CONTIENT]->(p:Produit {nom: $product})
RETURN DISTINCT c.nom AS client, c.email AS email
ORDER BY client";

// Scoring counts every qualifying order line, so a repeat buyer weights a
// candidate once per order containing it.
const SUGGESTIONS: &str = "\
MATCH (c:Client {nom: $client})-[:A_EFFECTUE]->(:Commande)-[:CONTIENT]->(p:Produit)
WITH c, collect(DISTINCT p) AS achetes
MATCH (autre:Client)-[:A_EFFECTUE]->(:Commande)-[:CONTIENT]->(partage:Produit)
WHERE autre <> c AND partage IN achetes
WITH achetes, collect(DISTINCT autre) AS voisins
UNWIND voisins AS autre
MATCH (autre)-[:A_EFFECTUE]->(:Commande)-[:CONTIENT]->(s:Produit)
WHERE NOT s IN achetes
RETURN s.nom AS produit_suggere, s.prix AS prix, count(*) AS score
ORDER BY score DESC, produit_suggere
LIMIT 5";

const ORDERS_BY_PRODUCT: &str = "\
MATCH (c:Client)-[:A_EFFECTUE]->(cmd:Commande)-[ct:CONTIENT]->(p:Produit {nom: $product})
RETURN cmd.id AS commande_id, cmd.date AS date, c.nom AS client, ct.quantite AS quantite
ORDER BY date";

/// Connection settings for the bolt endpoint
#[derive(Debug, Clone)]
pub struct Neo4jSettings {
    pub uri: String,
    pub user: String,
    pub password: String,
}

impl Default for Neo4jSettings {
    fn default() -> Self {
        Self {
            uri: "bolt://localhost:7687".to_string(),
            user: "neo4j".to_string(),
            password: "password123".to_string(),
        }
    }
}

/// Store backed by a Neo4j-compatible server
pub struct Neo4jStore {
    graph: Graph,
}

impl Neo4jStore {
    /// Open a driver handle for the given settings
    pub async fn connect(settings: &Neo4jSettings) -> StoreResult<Self> {
        let graph = Graph::new(&settings.uri, &settings.user, &settings.password).await?;
        Ok(Self { graph })
    }

    /// Wrap an existing driver handle
    pub fn with_graph(graph: Graph) -> Self {
        Self { graph }
    }

    async fn collect_rows(&self, q: neo4rs::Query, op: &str) -> StoreResult<Vec<Row>> {
        debug!(operation = op, "executing graph query");
        let mut stream = self.graph.execute(q).await?;
        let mut rows = Vec::new();
        while let Some(row) = stream.next().await? {
            rows.push(row);
        }
        Ok(rows)
    }

    async fn single_count(&self, cypher: &str, op: &str) -> StoreResult<i64> {
        let rows = self.collect_rows(query(cypher), op).await?;
        let row = rows
            .first()
            .ok_or_else(|| StoreError::Malformed("total".to_string()))?;
        column_i64(row, "total")
    }
}

#[async_trait]
impl AnalyticsStore for Neo4jStore {
    fn backend(&self) -> &'static str {
        "neo4j"
    }

    async fn clients(&self) -> StoreResult<Vec<ClientName>> {
        let rows = self.collect_rows(query(CLIENTS), "clients").await?;
        rows.iter()
            .map(|row| Ok(ClientName { nom: column_string(row, "nom")? }))
            .collect()
    }

    async fn products(&self) -> StoreResult<Vec<ProductName>> {
        let rows = self.collect_rows(query(PRODUCTS), "products").await?;
        rows.iter()
            .map(|row| Ok(ProductName { nom: column_string(row, "nom")? }))
            .collect()
    }

    async fn stats(&self) -> StoreResult<Stats> {
        let total_clients = self.single_count(COUNT_CLIENTS, "stats.clients").await?;
        let total_produits = self.single_count(COUNT_PRODUCTS, "stats.products").await?;
        let total_commandes = self.single_count(COUNT_ORDERS, "stats.orders").await?;

        let rows = self.collect_rows(query(REVENUE), "stats.revenue").await?;
        let chiffre_affaires = match rows.first() {
            Some(row) => column_opt_f64(row, "total")?,
            None => None,
        };

        Ok(Stats {
            total_clients,
            total_produits,
            total_commandes,
            chiffre_affaires,
        })
    }

    async fn products_by_client(&self, client: &str) -> StoreResult<Vec<PurchasedProduct>> {
        let q = query(PRODUCTS_BY_CLIENT).param("client", client);
        let rows = self.collect_rows(q, "products_by_client").await?;
        rows.iter()
            .map(|row| {
                Ok(PurchasedProduct {
                    produit: column_string(row, "produit")?,
                    prix: column_f64(row, "prix")?,
                })
            })
            .collect()
    }

    async fn clients_by_product(&self, product: &str) -> StoreResult<Vec<ProductBuyer>> {
        let q = query(CLIENTS_BY_PRODUCT).param("product", product);
        let rows = self.collect_rows(q, "clients_by_product").await?;
        rows.iter()
            .map(|row| {
                Ok(ProductBuyer {
                    client: column_string(row, "client")?,
                    email: column_string(row, "email")?,
                })
            })
            .collect()
    }

    async fn suggestions(&self, client: &str) -> StoreResult<Vec<Suggestion>> {
        let q = query(SUGGESTIONS).param("client", client);
        let rows = self.collect_rows(q, "suggestions").await?;
        rows.iter()
            .map(|row| {
                Ok(Suggestion {
                    produit_suggere: column_string(row, "produit_suggere")?,
                    prix: column_f64(row, "prix")?,
                    score: column_i64(row, "score")?,
                })
            })
            .collect()
    }

    async fn orders_by_product(&self, product: &str) -> StoreResult<Vec<ProductOrder>> {
        let q = query(ORDERS_BY_PRODUCT).param("product", product);
        let rows = self.collect_rows(q, "orders_by_product").await?;
        rows.iter()
            .map(|row| {
                Ok(ProductOrder {
                    commande_id: column_display(row, "commande_id")?,
                    date: column_display(row, "date")?,
                    client: column_string(row, "client")?,
                    quantite: column_i64(row, "quantite")?,
                })
            })
            .collect()
    }
}

// Column readers. The dataset is engine-owned, so numeric properties may
// arrive as bolt integers or floats depending on how they were loaded;
// the readers accept either.

fn column_string(row: &Row, col: &str) -> StoreResult<String> {
    row.get::<String>(col)
        .map_err(|_| StoreError::Malformed(col.to_string()))
}

fn column_i64(row: &Row, col: &str) -> StoreResult<i64> {
    row.get::<i64>(col)
        .map_err(|_| StoreError::Malformed(col.to_string()))
}

fn column_f64(row: &Row, col: &str) -> StoreResult<f64> {
    if let Ok(v) = row.get::<f64>(col) {
        return Ok(v);
    }
    row.get::<i64>(col)
        .map(|v| v as f64)
        .map_err(|_| StoreError::Malformed(col.to_string()))
}

fn column_opt_f64(row: &Row, col: &str) -> StoreResult<Option<f64>> {
    if let Ok(v) = row.get::<Option<f64>>(col) {
        return Ok(v);
    }
    row.get::<Option<i64>>(col)
        .map(|v| v.map(|n| n as f64))
        .map_err(|_| StoreError::Malformed(col.to_string()))
}

/// Ids and dates pass through as text whatever their stored type
fn column_display(row: &Row, col: &str) -> StoreResult<String> {
    if let Ok(v) = row.get::<String>(col) {
        return Ok(v);
    }
    row.get::<i64>(col)
        .map(|v| v.to_string())
        .map_err(|_| StoreError::Malformed(col.to_string()))
}
