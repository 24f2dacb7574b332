use bazaar::application::engine::OrderEngine;
use bazaar::application::seed::seed_demo_data;
use bazaar::domain::order::LineRequest;
use bazaar::domain::ports::{CatalogStoreBox, OrderStoreBox, PartnerStoreBox};
use bazaar::infrastructure::in_memory::{
    InMemoryCatalogStore, InMemoryOrderStore, InMemoryPartnerStore,
};
use clap::Parser;
use miette::{IntoDiagnostic, Result};
use std::fs::File;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input order-requests CSV file (buyer, sku, quantity; SKU by name)
    input: Option<PathBuf>,

    /// Populate demo catalog, partners, and orders before processing
    #[arg(long)]
    seed: bool,

    /// Path to persistent database (optional). If provided, uses RocksDB.
    #[cfg(feature = "storage-rocksdb")]
    #[arg(long)]
    db_path: Option<PathBuf>,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .try_init();
}

#[cfg_attr(not(feature = "storage-rocksdb"), allow(unused_variables))]
fn build_engine(cli: &Cli) -> Result<OrderEngine> {
    #[cfg(feature = "storage-rocksdb")]
    if let Some(db_path) = &cli.db_path {
        use bazaar::infrastructure::retry::RetryStore;
        use bazaar::infrastructure::rocksdb::RocksDbStore;

        let store = RocksDbStore::open(db_path).into_diagnostic()?;
        let catalog: CatalogStoreBox = Box::new(RetryStore::new(store.clone()));
        let partners: PartnerStoreBox = Box::new(RetryStore::new(store.clone()));
        let orders: OrderStoreBox = Box::new(RetryStore::new(store));
        return Ok(OrderEngine::new(catalog, partners, orders));
    }

    let catalog: CatalogStoreBox = Box::new(InMemoryCatalogStore::new());
    let partners: PartnerStoreBox = Box::new(InMemoryPartnerStore::new());
    let orders: OrderStoreBox = Box::new(InMemoryOrderStore::new());
    Ok(OrderEngine::new(catalog, partners, orders))
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let engine = build_engine(&cli)?;

    if cli.seed {
        seed_demo_data(&engine).await.into_diagnostic()?;
    }

    if let Some(input) = &cli.input {
        let file = File::open(input).into_diagnostic()?;
        let reader = bazaar::interfaces::csv::order_reader::OrderRequestReader::new(file);

        // Requests reference SKUs by catalog name.
        let catalog = engine.catalog().await.into_diagnostic()?;
        for row in reader.requests() {
            match row {
                Ok(row) => {
                    let Some(sku) = catalog.iter().find(|s| s.name == row.sku) else {
                        eprintln!("Unknown sku in request: {}", row.sku);
                        continue;
                    };
                    let request = LineRequest {
                        sku_id: sku.id,
                        quantity: row.quantity,
                    };
                    if let Err(e) = engine.place_order(&row.buyer, &[request]).await {
                        eprintln!("Error placing order: {e}");
                    }
                }
                Err(e) => {
                    eprintln!("Error reading order request: {e}");
                }
            }
        }
    }

    let partners = engine.partners().await.into_diagnostic()?;
    let catalog = engine.catalog().await.into_diagnostic()?;
    let orders = engine.orders().await.into_diagnostic()?;

    let stdout = io::stdout();
    let mut writer = bazaar::interfaces::csv::report_writer::ReportWriter::new(stdout.lock());
    writer
        .write_report(&partners, &catalog, &orders)
        .into_diagnostic()?;

    Ok(())
}
