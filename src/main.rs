mod logger;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use warehouse_delivery::utils::loader::{load_connections_from_path, load_stocks_from_path};
use warehouse_delivery::{
    DeliveryConfig, DeliveryResponse, GatheringTraversal, OrderRequest, Result,
};

/// Minimum travel time to gather an order across the warehouse network
#[derive(Parser, Debug)]
#[command(name = "warehouse_delivery", version)]
struct Args {
    /// Warehouse the delivery run starts from
    warehouse: String,

    /// Ordered product, repeat once per product
    #[arg(short = 'p', long = "product")]
    products: Vec<String>,

    /// Quantity of the product at the same position
    #[arg(short = 'q', long = "quantity")]
    quantities: Vec<u32>,

    /// JSON config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Overrides the configured connections file
    #[arg(long)]
    connections: Option<PathBuf>,

    /// Overrides the configured stocks file
    #[arg(long)]
    stocks: Option<PathBuf>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => match DeliveryConfig::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error loading config {}: {}", path.display(), e);
                return ExitCode::FAILURE;
            }
        },
        None => DeliveryConfig::default(),
    };
    if let Some(path) = args.connections.clone() {
        config.connections_path = path;
    }
    if let Some(path) = args.stocks.clone() {
        config.stocks_path = path;
    }

    logger::init(&config.log_level);

    match run(args, &config) {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args, config: &DeliveryConfig) -> Result<String> {
    let graph = load_connections_from_path(&config.connections_path)?;
    let stock = load_stocks_from_path(&config.stocks_path)?;

    let request = OrderRequest::new(args.warehouse, args.products, args.quantities);
    let (origin, order) = request.into_order()?;
    log::info!(
        "Gathering {} units of {} products from {}",
        order.total_item_count(),
        order.unique_product_count(),
        origin
    );

    let delivery = GatheringTraversal::new(&graph, &stock, &order).run(&origin);
    DeliveryResponse::from(delivery).to_json()
}
