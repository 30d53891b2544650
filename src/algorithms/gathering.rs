use std::cmp::{Ordering, Reverse};
use std::collections::{BTreeMap, HashMap};

use log::debug;
use priority_queue::PriorityQueue;

use crate::algorithms::StopRule;
use crate::models::{Delivery, Location, Order, OrderState, StockTable, Time, Trace};
use crate::utils::warehouse_network::AdjacencyGraph;

// Custom wrapper to make f64 implement Eq
#[derive(PartialEq, Copy, Clone, Debug)]
struct F64Wrapper(f64);

impl Eq for F64Wrapper {}

impl PartialOrd for F64Wrapper {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for F64Wrapper {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

// Highest priority is the nearest candidate, then the smallest warehouse name
type FrontierPriority = Reverse<(F64Wrapper, Location)>;

/// Collects stock into an order at every settled warehouse
pub struct OrderCollector<'a> {
    pub state: OrderState<'a>,
    stock: &'a StockTable,
}

impl<'a> OrderCollector<'a> {
    pub fn new(order: &'a Order, stock: &'a StockTable) -> Self {
        Self {
            state: OrderState::new(order),
            stock,
        }
    }
}

impl StopRule for OrderCollector<'_> {
    fn on_settle(&mut self, location: &str) {
        self.state.collect(location, self.stock);
    }

    fn is_satisfied(&self) -> bool {
        self.state.is_fulfilled()
    }
}

/// Never satisfied, so every reachable warehouse gets settled
#[derive(Debug, Clone, Copy, Default)]
pub struct ExhaustAll;

impl StopRule for ExhaustAll {
    fn on_settle(&mut self, _location: &str) {}

    fn is_satisfied(&self) -> bool {
        false
    }
}

/// Shortest-path search that gathers an order along the way.
///
/// Warehouses are settled in non-decreasing distance from the origin, ties
/// going to the lexicographically smallest warehouse name. Every settled
/// warehouse hands over what it holds of the still-missing products. The
/// search stops once the order is complete, or when no unsettled warehouse
/// is reachable. The graph, stock and order are only read, so one traversal
/// can be run any number of times.
#[derive(Debug, Clone, Copy)]
pub struct GatheringTraversal<'a> {
    graph: &'a AdjacencyGraph,
    stock: &'a StockTable,
    order: &'a Order,
}

impl<'a> GatheringTraversal<'a> {
    pub fn new(graph: &'a AdjacencyGraph, stock: &'a StockTable, order: &'a Order) -> Self {
        Self {
            graph,
            stock,
            order,
        }
    }

    /// Computes the delivery time for the order starting at `origin`
    pub fn run(&self, origin: &str) -> Delivery {
        let delivery = match self.trace(origin) {
            Some(trace) => trace.delivery(),
            None => Delivery::NoSuchOrigin,
        };
        debug!("delivery from {}: {:?}", origin, delivery);
        delivery
    }

    /// Runs the search and returns everything it settled and gathered.
    ///
    /// Returns `None` when the origin is not part of the network.
    pub fn trace(&self, origin: &str) -> Option<Trace> {
        let mut collector = OrderCollector::new(self.order, self.stock);
        let settled = settle(self.graph, origin, &mut collector)?;
        let fulfilled = collector.is_satisfied();

        Some(Trace {
            settled,
            gathered: collector.state.into_gathered(),
            fulfilled,
        })
    }
}

/// Distance from `origin` to every warehouse reachable from it
pub fn shortest_distances(graph: &AdjacencyGraph, origin: &str) -> Option<BTreeMap<Location, Time>> {
    settle(graph, origin, &mut ExhaustAll).map(|settled| settled.into_iter().collect())
}

/// Settles warehouses outward from `origin` until `rule` is satisfied or the
/// reachable part of the network is exhausted. Returns the settle order.
fn settle<R: StopRule>(
    graph: &AdjacencyGraph,
    origin: &str,
    rule: &mut R,
) -> Option<Vec<(Location, Time)>> {
    if !graph.contains(origin) {
        return None;
    }

    let mut visited: HashMap<Location, Time> = HashMap::new();
    let mut settle_order = Vec::new();
    let mut frontier: PriorityQueue<Location, FrontierPriority> = PriorityQueue::new();
    let mut current = (origin.to_string(), 0.0);

    loop {
        let (location, distance) = current;
        debug!("settled {} at {}", location, distance);
        visited.insert(location.clone(), distance);
        rule.on_settle(&location);
        settle_order.push((location.clone(), distance));

        if rule.is_satisfied() {
            break;
        }

        for (neighbor, weight) in graph.neighbors(&location) {
            if visited.contains_key(neighbor) {
                continue;
            }

            let candidate = Reverse((F64Wrapper(distance + weight), neighbor.clone()));
            let is_shorter = match frontier.get_priority(neighbor) {
                Some(known) => candidate > *known,
                None => true,
            };
            if is_shorter {
                frontier.push(neighbor.clone(), candidate);
            }
        }

        match frontier.pop() {
            Some((next, Reverse((F64Wrapper(next_distance), _)))) => {
                current = (next, next_distance);
            }
            None => break,
        }
    }

    Some(settle_order)
}
