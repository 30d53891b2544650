// Models module - exports all model types

mod delivery;
mod order;
mod stock;

// Re-export model types
pub use self::delivery::{Delivery, Trace};
pub use self::order::{Order, OrderState};
pub use self::stock::StockTable;

// Common type aliases for improved code readability
pub type Location = String;
pub type ProductId = String;
pub type Quantity = u32;
pub type Time = f64;
