// Public modules
pub mod algorithms;
pub mod config;
pub mod error;
pub mod models;
pub mod utils;

// Re-exports for convenience
pub use algorithms::gathering::{shortest_distances, GatheringTraversal};
pub use config::DeliveryConfig;
pub use error::{Error, Result};
pub use models::{Delivery, Order, OrderState, StockTable, Trace};
pub use utils::request::OrderRequest;
pub use utils::response::DeliveryResponse;
pub use utils::warehouse_network::AdjacencyGraph;
