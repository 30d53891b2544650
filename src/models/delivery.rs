// Outcome models for a gathering run

use crate::models::{Location, ProductId, Quantity, Time};
use std::collections::HashMap;

/// Result of computing the delivery time for one order
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Delivery {
    /// Order completed; the time to reach the farthest warehouse visited
    Delivered(Time),

    /// Every reachable warehouse was visited without completing the order
    Infeasible,

    /// The origin is not a warehouse of the network
    NoSuchOrigin,
}

impl Delivery {
    pub fn delivery_time(&self) -> Option<Time> {
        match self {
            Delivery::Delivered(time) => Some(*time),
            _ => None,
        }
    }

    pub fn is_delivered(&self) -> bool {
        matches!(self, Delivery::Delivered(_))
    }
}

/// Full record of one traversal from a known origin
#[derive(Debug, Clone, PartialEq)]
pub struct Trace {
    /// Warehouses in the order they were settled, with their distance from the origin
    pub settled: Vec<(Location, Time)>,

    /// Quantity gathered of each ordered product when the run stopped
    pub gathered: HashMap<ProductId, Quantity>,

    /// Whether the order was completed
    pub fulfilled: bool,
}

impl Trace {
    /// Largest settled distance, 0 when only the origin was settled
    pub fn farthest(&self) -> Time {
        self.settled
            .iter()
            .map(|(_, distance)| *distance)
            .fold(0.0, f64::max)
    }

    /// Checks that distances never decrease along the settle order
    pub fn is_monotonic(&self) -> bool {
        self.settled.windows(2).all(|pair| pair[0].1 <= pair[1].1)
    }

    pub fn delivery(&self) -> Delivery {
        if self.fulfilled {
            Delivery::Delivered(self.farthest())
        } else {
            Delivery::Infeasible
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_trace(fulfilled: bool) -> Trace {
        Trace {
            settled: vec![
                ("A".to_string(), 0.0),
                ("E".to_string(), 1.0),
                ("B".to_string(), 3.0),
            ],
            gathered: HashMap::new(),
            fulfilled,
        }
    }

    #[test]
    fn test_delivery_uses_farthest_settled() {
        let trace = create_test_trace(true);
        assert_eq!(trace.delivery(), Delivery::Delivered(3.0));
        assert_eq!(trace.delivery().delivery_time(), Some(3.0));
    }

    #[test]
    fn test_unfulfilled_trace_is_infeasible() {
        let trace = create_test_trace(false);
        assert_eq!(trace.delivery(), Delivery::Infeasible);
        assert!(!trace.delivery().is_delivered());
    }

    #[test]
    fn test_is_monotonic() {
        let mut trace = create_test_trace(true);
        assert!(trace.is_monotonic());

        trace.settled.push(("C".to_string(), 2.0));
        assert!(!trace.is_monotonic());
    }
}
