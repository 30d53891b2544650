// Adapter from an inbound order request to an origin and an Order

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::models::{Location, Order, ProductId, Quantity};

/// Order request as received from a caller: a starting warehouse and
/// parallel lists of products and quantities
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderRequest {
    pub warehouse: Location,

    #[serde(default)]
    pub products: Vec<ProductId>,

    #[serde(default)]
    pub quantities: Vec<Quantity>,
}

impl OrderRequest {
    pub fn new<L: Into<Location>>(
        warehouse: L,
        products: Vec<ProductId>,
        quantities: Vec<Quantity>,
    ) -> Self {
        Self {
            warehouse: warehouse.into(),
            products,
            quantities,
        }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Pairs each product with its quantity.
    ///
    /// The lists must have the same length. A product listed twice has its
    /// quantities summed.
    pub fn into_order(self) -> Result<(Location, Order)> {
        if self.products.len() != self.quantities.len() {
            return Err(Error::MismatchedOrder {
                products: self.products.len(),
                quantities: self.quantities.len(),
            });
        }

        let order = self.products.into_iter().zip(self.quantities).collect();
        Ok((self.warehouse, order))
    }
}
