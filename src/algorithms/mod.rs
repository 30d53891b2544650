pub mod gathering;

pub use gathering::{shortest_distances, ExhaustAll, GatheringTraversal, OrderCollector};

/// Stopping rule consulted by the traversal after every settled warehouse
pub trait StopRule {
    /// Called once for each warehouse as it is settled, the origin included
    fn on_settle(&mut self, location: &str);

    /// The traversal stops as soon as this returns true
    fn is_satisfied(&self) -> bool;
}
