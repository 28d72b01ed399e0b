use std::sync::Arc;

use comptoir::analytics::AnalyticsService;
use comptoir::config::{Backend, ServiceConfig};
use comptoir::http::HttpServer;
use comptoir::store::{AnalyticsStore, MemoryStore, Neo4jStore};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let config = ServiceConfig::from_env();
    info!(
        "comptoir v{} starting (backend: {:?})",
        comptoir::version(),
        config.backend
    );

    let store: Arc<dyn AnalyticsStore> = match config.backend {
        Backend::Neo4j => {
            info!("connecting to graph engine at {}", config.neo4j.uri);
            Arc::new(Neo4jStore::connect(&config.neo4j).await?)
        }
        Backend::Memory => {
            info!("using in-process demo graph");
            Arc::new(MemoryStore::with_demo_data())
        }
    };

    let service = Arc::new(AnalyticsService::new(store));
    HttpServer::new(service, &config.http_addr, config.http_port)
        .serve()
        .await
}
