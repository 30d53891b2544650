// Stock model holding per-warehouse product quantities

use crate::models::{Location, ProductId, Quantity};
use std::collections::HashMap;

/// Read-only lookup of the quantity of each product held at each warehouse
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StockTable {
    /// Warehouse -> (product -> quantity)
    items: HashMap<Location, HashMap<ProductId, Quantity>>,
}

impl StockTable {
    /// Creates an empty stock table
    pub fn new() -> Self {
        Self {
            items: HashMap::new(),
        }
    }

    /// Records the quantity of a product at a warehouse, replacing any earlier record
    pub fn set_quantity<L, P>(&mut self, location: L, product: P, quantity: Quantity)
    where
        L: Into<Location>,
        P: Into<ProductId>,
    {
        self.items
            .entry(location.into())
            .or_default()
            .insert(product.into(), quantity);
    }

    /// Gets the quantity of a product at a warehouse.
    ///
    /// Unknown warehouses and products both yield 0.
    pub fn quantity(&self, location: &str, product: &str) -> Quantity {
        self.items
            .get(location)
            .and_then(|products| products.get(product))
            .copied()
            .unwrap_or(0)
    }

    /// Checks if any stock record exists for the warehouse
    pub fn contains_location(&self, location: &str) -> bool {
        self.items.contains_key(location)
    }

    /// Number of warehouses with at least one stock record
    pub fn location_count(&self) -> usize {
        self.items.len()
    }

    /// Total quantity of a product across every warehouse
    pub fn total_quantity(&self, product: &str) -> u64 {
        self.items
            .values()
            .filter_map(|products| products.get(product))
            .map(|&quantity| u64::from(quantity))
            .sum()
    }
}

impl<L, P> FromIterator<(L, P, Quantity)> for StockTable
where
    L: Into<Location>,
    P: Into<ProductId>,
{
    fn from_iter<T: IntoIterator<Item = (L, P, Quantity)>>(iter: T) -> Self {
        let mut stock = StockTable::new();
        for (location, product, quantity) in iter {
            stock.set_quantity(location, product, quantity);
        }
        stock
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_stock() -> StockTable {
        StockTable::from_iter([("W1", "apple", 5), ("W1", "pear", 3), ("W2", "apple", 7)])
    }

    #[test]
    fn test_quantity() {
        let stock = create_test_stock();
        assert_eq!(stock.quantity("W1", "apple"), 5);
        assert_eq!(stock.quantity("W1", "pear"), 3);
        assert_eq!(stock.quantity("W2", "apple"), 7);
    }

    #[test]
    fn test_unknown_pairs_are_empty() {
        let stock = create_test_stock();
        assert_eq!(stock.quantity("W2", "pear"), 0);
        assert_eq!(stock.quantity("W9", "apple"), 0);
        assert!(!stock.contains_location("W9"));
    }

    #[test]
    fn test_quantity_is_read_only() {
        let stock = create_test_stock();
        let first = stock.quantity("W1", "apple");
        let second = stock.quantity("W1", "apple");
        assert_eq!(first, second);
        assert_eq!(stock, create_test_stock());
    }

    #[test]
    fn test_last_write_wins() {
        let mut stock = create_test_stock();
        stock.set_quantity("W1", "apple", 1);
        assert_eq!(stock.quantity("W1", "apple"), 1);
        assert_eq!(stock.location_count(), 2);
    }

    #[test]
    fn test_total_quantity() {
        let stock = create_test_stock();
        assert_eq!(stock.total_quantity("apple"), 12);
        assert_eq!(stock.total_quantity("plum"), 0);
    }
}
