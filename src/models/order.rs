// Order model and the per-run record of what has been gathered for it

use crate::models::{ProductId, Quantity, StockTable};
use log::trace;
use std::collections::HashMap;

/// Represents a customer's order with products and required quantities
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Order {
    /// Map of product IDs to their required quantities
    pub items: HashMap<ProductId, Quantity>,
}

impl Order {
    /// Creates a new empty order
    pub fn new() -> Self {
        Self {
            items: HashMap::new(),
        }
    }

    /// Adds a product to the order.
    ///
    /// Quantities of a product added more than once are summed. A zero quantity
    /// still registers the product.
    pub fn add_item<P: Into<ProductId>>(&mut self, product: P, quantity: Quantity) {
        let required = self.items.entry(product.into()).or_insert(0);
        *required = required.saturating_add(quantity);
    }

    /// Gets the required quantity of a product, 0 if it is not ordered
    pub fn required(&self, product: &str) -> Quantity {
        self.items.get(product).copied().unwrap_or(0)
    }

    /// Gets the total number of unique products in the order
    pub fn unique_product_count(&self) -> usize {
        self.items.len()
    }

    /// Gets the total number of units (including quantities)
    pub fn total_item_count(&self) -> u64 {
        self.items.values().map(|&quantity| u64::from(quantity)).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<P: Into<ProductId>> FromIterator<(P, Quantity)> for Order {
    fn from_iter<T: IntoIterator<Item = (P, Quantity)>>(iter: T) -> Self {
        let mut order = Order::new();
        for (product, quantity) in iter {
            order.add_item(product, quantity);
        }
        order
    }
}

/// Quantities gathered so far for one order during a single traversal
#[derive(Debug, Clone)]
pub struct OrderState<'a> {
    order: &'a Order,
    gathered: HashMap<ProductId, Quantity>,
}

impl<'a> OrderState<'a> {
    /// Starts with nothing gathered for every ordered product
    pub fn new(order: &'a Order) -> Self {
        let gathered = order.items.keys().map(|product| (product.clone(), 0)).collect();
        Self { order, gathered }
    }

    /// Takes whatever the warehouse holds of each still-missing product,
    /// never more than is missing
    pub fn collect(&mut self, location: &str, stock: &StockTable) {
        let order = self.order;
        for (product, &required) in &order.items {
            let gathered = self.gathered.entry(product.clone()).or_insert(0);
            let remaining = required.saturating_sub(*gathered);
            if remaining == 0 {
                continue;
            }

            let taken = remaining.min(stock.quantity(location, product));
            if taken > 0 {
                *gathered += taken;
                trace!(
                    "took {} of {} at {} ({}/{})",
                    taken,
                    product,
                    location,
                    gathered,
                    required
                );
            }
        }
    }

    /// Gets the gathered quantity of a product
    pub fn gathered(&self, product: &str) -> Quantity {
        self.gathered.get(product).copied().unwrap_or(0)
    }

    /// Gets the quantity of a product still missing
    pub fn remaining(&self, product: &str) -> Quantity {
        self.order.required(product).saturating_sub(self.gathered(product))
    }

    /// True once every product's gathered quantity meets its requirement
    pub fn is_fulfilled(&self) -> bool {
        self.order
            .items
            .iter()
            .all(|(product, &required)| self.gathered(product) >= required)
    }

    pub fn into_gathered(self) -> HashMap<ProductId, Quantity> {
        self.gathered
    }
}
