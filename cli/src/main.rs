//! Comptoir CLI — command-line front end for the analytics service
//!
//! Uses the comptoir-sdk RemoteClient to query a running instance.

use clap::{Parser, Subcommand};
use comfy_table::{ContentArrangement, Table};
use comptoir_sdk::RemoteClient;
use serde::Serialize;

#[derive(Parser)]
#[command(name = "comptoir", version, about = "Comptoir sales analytics CLI")]
struct Cli {
    /// Service HTTP URL
    #[arg(long, default_value = "http://localhost:5001", global = true, env = "COMPTOIR_URL")]
    url: String,

    /// Output format
    #[arg(long, default_value = "table", global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, clap::ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// List all clients
    Clients,
    /// List all products
    Products,
    /// Show graph-wide statistics
    Stats,
    /// Products bought by a client
    ProductsByClient {
        /// Client name
        client: String,
    },
    /// Clients who bought a product
    ClientsByProduct {
        /// Product name
        product: String,
    },
    /// Co-purchase suggestions for a client
    Suggestions {
        /// Client name
        client: String,
    },
    /// Orders containing a product
    OrdersByProduct {
        /// Product name
        product: String,
    },
    /// Service status
    Status,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let client = RemoteClient::new(&cli.url);

    let result = match cli.command {
        Commands::Clients => run_clients(&client, &cli.format).await,
        Commands::Products => run_products(&client, &cli.format).await,
        Commands::Stats => run_stats(&client, &cli.format).await,
        Commands::ProductsByClient { client: name } => {
            run_products_by_client(&client, &name, &cli.format).await
        }
        Commands::ClientsByProduct { product } => {
            run_clients_by_product(&client, &product, &cli.format).await
        }
        Commands::Suggestions { client: name } => {
            run_suggestions(&client, &name, &cli.format).await
        }
        Commands::OrdersByProduct { product } => {
            run_orders_by_product(&client, &product, &cli.format).await
        }
        Commands::Status => run_status(&client, &cli.format).await,
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

type CliResult = Result<(), Box<dyn std::error::Error>>;

fn print_table(header: &[&str], rows: Vec<Vec<String>>) {
    let mut table = Table::new();
    table
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(header.to_vec());
    for row in rows {
        table.add_row(row);
    }
    println!("{table}");
}

fn print_json<T: Serialize>(value: &T) -> CliResult {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

async fn run_clients(client: &RemoteClient, format: &OutputFormat) -> CliResult {
    let clients = client.clients().await?;
    match format {
        OutputFormat::Json => print_json(&clients)?,
        OutputFormat::Table => print_table(
            &["Client"],
            clients.into_iter().map(|c| vec![c.nom]).collect(),
        ),
    }
    Ok(())
}

async fn run_products(client: &RemoteClient, format: &OutputFormat) -> CliResult {
    let products = client.products().await?;
    match format {
        OutputFormat::Json => print_json(&products)?,
        OutputFormat::Table => print_table(
            &["Produit"],
            products.into_iter().map(|p| vec![p.nom]).collect(),
        ),
    }
    Ok(())
}

async fn run_stats(client: &RemoteClient, format: &OutputFormat) -> CliResult {
    let stats = client.stats().await?;
    match format {
        OutputFormat::Json => print_json(&stats)?,
        OutputFormat::Table => print_table(
            &["Clients", "Produits", "Commandes", "CA total"],
            vec![vec![
                stats.total_clients.to_string(),
                stats.total_produits.to_string(),
                stats.total_commandes.to_string(),
                stats
                    .chiffre_affaires
                    .map_or_else(|| "-".to_string(), |v| format!("{v:.2}")),
            ]],
        ),
    }
    Ok(())
}

async fn run_products_by_client(
    client: &RemoteClient,
    name: &str,
    format: &OutputFormat,
) -> CliResult {
    let products = client.products_by_client(name).await?;
    match format {
        OutputFormat::Json => print_json(&products)?,
        OutputFormat::Table => print_table(
            &["Produit", "Prix"],
            products
                .into_iter()
                .map(|p| vec![p.produit, format!("{:.2}", p.prix)])
                .collect(),
        ),
    }
    Ok(())
}

async fn run_clients_by_product(
    client: &RemoteClient,
    product: &str,
    format: &OutputFormat,
) -> CliResult {
    let buyers = client.clients_by_product(product).await?;
    match format {
        OutputFormat::Json => print_json(&buyers)?,
        OutputFormat::Table => print_table(
            &["Client", "Email"],
            buyers
                .into_iter()
                .map(|b| vec![b.client, b.email])
                .collect(),
        ),
    }
    Ok(())
}

async fn run_suggestions(client: &RemoteClient, name: &str, format: &OutputFormat) -> CliResult {
    let suggestions = client.suggestions(name).await?;
    match format {
        OutputFormat::Json => print_json(&suggestions)?,
        OutputFormat::Table => print_table(
            &["Produit", "Prix", "Score"],
            suggestions
                .into_iter()
                .map(|s| {
                    vec![
                        s.produit_suggere,
                        format!("{:.2}", s.prix),
                        s.score.to_string(),
                    ]
                })
                .collect(),
        ),
    }
    Ok(())
}

async fn run_orders_by_product(
    client: &RemoteClient,
    product: &str,
    format: &OutputFormat,
) -> CliResult {
    let orders = client.orders_by_product(product).await?;
    match format {
        OutputFormat::Json => print_json(&orders)?,
        OutputFormat::Table => print_table(
            &["Commande", "Date", "Client", "Quantite"],
            orders
                .into_iter()
                .map(|o| vec![o.commande_id, o.date, o.client, o.quantite.to_string()])
                .collect(),
        ),
    }
    Ok(())
}

async fn run_status(client: &RemoteClient, format: &OutputFormat) -> CliResult {
    let status = client.status().await?;
    match format {
        OutputFormat::Json => print_json(&status)?,
        OutputFormat::Table => print_table(
            &["Status", "Version", "Backend"],
            vec![vec![status.status, status.version, status.backend]],
        ),
    }
    Ok(())
}
