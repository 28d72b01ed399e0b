use std::sync::Arc;

use comptoir::analytics::{AnalyticsError, AnalyticsService};
use comptoir::store::MemoryStore;

/// Small boutique: three clients, four products, four orders.
fn boutique_store() -> MemoryStore {
    let mut store = MemoryStore::new();
    store.add_client("Alice", "alice@example.com");
    store.add_client("Bob", "bob@example.com");
    store.add_client("Claire", "claire@example.com");

    store.add_product("Bouilloire", 39.00);
    store.add_product("Cafetiere", 49.90);
    store.add_product("Tasse", 12.00);
    store.add_product("Theiere", 59.00);

    store.add_order("CMD-1", "2024-01-10", 61.90, "Alice", &[("Cafetiere", 1), ("Tasse", 1)]);
    store.add_order("CMD-2", "2024-01-15", 49.90, "Bob", &[("Cafetiere", 1)]);
    store.add_order("CMD-3", "2024-02-01", 98.00, "Bob", &[("Bouilloire", 1), ("Theiere", 1)]);
    store.add_order("CMD-4", "2024-02-20", 12.00, "Claire", &[("Tasse", 1)]);
    store
}

fn boutique_service() -> AnalyticsService {
    AnalyticsService::new(Arc::new(boutique_store()))
}

#[tokio::test]
async fn test_clients_sorted_ascending() {
    let service = boutique_service();
    let clients = service.clients().await.unwrap();
    let names: Vec<&str> = clients.iter().map(|c| c.nom.as_str()).collect();
    assert_eq!(names, vec!["Alice", "Bob", "Claire"]);
}

#[tokio::test]
async fn test_products_sorted_ascending() {
    let service = boutique_service();
    let products = service.products().await.unwrap();
    let names: Vec<&str> = products.iter().map(|p| p.nom.as_str()).collect();
    assert_eq!(names, vec!["Bouilloire", "Cafetiere", "Tasse", "Theiere"]);
}

#[tokio::test]
async fn test_stats_totals() {
    let service = boutique_service();
    let stats = service.stats().await.unwrap();
    assert_eq!(stats.total_clients, 3);
    assert_eq!(stats.total_produits, 4);
    assert_eq!(stats.total_commandes, 4);
    let revenue = stats.chiffre_affaires.unwrap();
    assert!((revenue - 221.80).abs() < 1e-9);
}

#[tokio::test]
async fn test_stats_empty_graph() {
    let service = AnalyticsService::new(Arc::new(MemoryStore::new()));
    let stats = service.stats().await.unwrap();
    assert_eq!(stats.total_clients, 0);
    assert_eq!(stats.total_produits, 0);
    assert_eq!(stats.total_commandes, 0);
    assert_eq!(stats.chiffre_affaires, None);
}

#[tokio::test]
async fn test_products_by_client_distinct_and_sorted() {
    let mut store = boutique_store();
    // A second order repeating a product must not duplicate it
    store.add_order("CMD-5", "2024-03-01", 49.90, "Alice", &[("Cafetiere", 2)]);
    let service = AnalyticsService::new(Arc::new(store));

    let products = service.products_by_client("Alice").await.unwrap();
    let names: Vec<&str> = products.iter().map(|p| p.produit.as_str()).collect();
    assert_eq!(names, vec!["Cafetiere", "Tasse"]);
}

#[tokio::test]
async fn test_products_by_client_unknown_client_is_empty() {
    let service = boutique_service();
    assert!(service.products_by_client("Zo").await.unwrap().is_empty());
}

#[tokio::test]
async fn test_clients_by_product_distinct_and_sorted() {
    let service = boutique_service();
    let buyers = service.clients_by_product("Cafetiere").await.unwrap();
    let names: Vec<&str> = buyers.iter().map(|b| b.client.as_str()).collect();
    assert_eq!(names, vec!["Alice", "Bob"]);
    assert_eq!(buyers[0].email, "alice@example.com");
}

#[tokio::test]
async fn test_suggestions_exclude_purchased_and_requester() {
    let service = boutique_service();
    // Alice shares Cafetiere with Bob and Tasse with Claire. Candidates are
    // Bob's Bouilloire and Theiere; nothing Alice already owns may appear.
    let suggestions = service.suggestions("Alice").await.unwrap();
    let names: Vec<&str> = suggestions.iter().map(|s| s.produit_suggere.as_str()).collect();
    assert_eq!(names, vec!["Bouilloire", "Theiere"]);
    assert!(suggestions.iter().all(|s| s.score >= 1));
    assert!(!names.contains(&"Cafetiere"));
    assert!(!names.contains(&"Tasse"));
}

#[tokio::test]
async fn test_suggestions_scenario_widget_gadget_thingamajig() {
    let mut store = MemoryStore::new();
    store.add_client("Alice", "alice@example.com");
    store.add_client("Bob", "bob@example.com");
    store.add_product("Widget", 9.99);
    store.add_product("Gadget", 19.99);
    store.add_product("Thingamajig", 5.00);
    store.add_order("C1", "2024-01-01", 29.98, "Alice", &[("Widget", 1), ("Gadget", 1)]);
    store.add_order("C2", "2024-01-02", 24.99, "Bob", &[("Gadget", 1), ("Thingamajig", 1)]);

    let service = AnalyticsService::new(Arc::new(store));
    let suggestions = service.suggestions("Alice").await.unwrap();
    assert_eq!(suggestions.len(), 1);
    assert_eq!(suggestions[0].produit_suggere, "Thingamajig");
    assert_eq!(suggestions[0].prix, 5.00);
    assert_eq!(suggestions[0].score, 1);
}

#[tokio::test]
async fn test_suggestions_capped_at_five_and_ordered() {
    let mut store = MemoryStore::new();
    store.add_client("Alice", "alice@example.com");
    store.add_client("Bob", "bob@example.com");
    store.add_product("Socle", 10.0);
    for i in 1..=7 {
        store.add_product(&format!("Extra-{i}"), 5.0);
    }
    // Shared purchase qualifies Bob as a neighbour
    store.add_order("C1", "2024-01-01", 10.0, "Alice", &[("Socle", 1)]);
    store.add_order("C2", "2024-01-02", 10.0, "Bob", &[("Socle", 1)]);
    // Bob orders Extra-3 twice so it outranks the alphabetical tie group
    store.add_order("C3", "2024-01-03", 35.0, "Bob",
        &[("Extra-1", 1), ("Extra-2", 1), ("Extra-3", 1), ("Extra-4", 1),
          ("Extra-5", 1), ("Extra-6", 1), ("Extra-7", 1)]);
    store.add_order("C4", "2024-01-04", 5.0, "Bob", &[("Extra-3", 1)]);

    let service = AnalyticsService::new(Arc::new(store));
    let suggestions = service.suggestions("Alice").await.unwrap();
    assert_eq!(suggestions.len(), 5);
    assert_eq!(suggestions[0].produit_suggere, "Extra-3");
    assert_eq!(suggestions[0].score, 2);
    // Remaining ties resolve alphabetically
    let rest: Vec<&str> = suggestions[1..].iter().map(|s| s.produit_suggere.as_str()).collect();
    assert_eq!(rest, vec!["Extra-1", "Extra-2", "Extra-4", "Extra-5"]);
    // Scores never increase down the list
    for pair in suggestions.windows(2) {
        assert!(pair[0].score >= pair[1].score);
    }
}

#[tokio::test]
async fn test_suggestions_no_history_is_empty() {
    let service = boutique_service();
    assert!(service.suggestions("Claire-inconnue").await.unwrap().is_empty());
}

#[tokio::test]
async fn test_orders_by_product_sorted_by_date() {
    let service = boutique_service();
    let orders = service.orders_by_product("Cafetiere").await.unwrap();
    assert_eq!(orders.len(), 2);
    assert_eq!(orders[0].commande_id, "CMD-1");
    assert_eq!(orders[0].client, "Alice");
    assert_eq!(orders[1].commande_id, "CMD-2");
    assert!(orders[0].date <= orders[1].date);
}

#[tokio::test]
async fn test_empty_parameters_fail_validation() {
    let service = boutique_service();
    for err in [
        service.products_by_client("").await.unwrap_err(),
        service.suggestions("").await.unwrap_err(),
        service.clients_by_product("").await.unwrap_err(),
        service.orders_by_product("").await.unwrap_err(),
    ] {
        assert!(matches!(err, AnalyticsError::Validation(_)));
    }
}

#[tokio::test]
async fn test_repeated_reads_are_identical() {
    let service = boutique_service();
    let first = service.suggestions("Alice").await.unwrap();
    let second = service.suggestions("Alice").await.unwrap();
    assert_eq!(first, second);
}
