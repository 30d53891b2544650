use crate::error::{Error, Result};
use crate::models::{Location, Time};
use std::collections::HashMap;

/// Undirected warehouse network with travel times on its connections
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AdjacencyGraph {
    adjacency: HashMap<Location, HashMap<Location, Time>>, // Warehouse -> {neighbour -> travel time}
}

impl AdjacencyGraph {
    /// Create an empty network
    pub fn new() -> Self {
        Self {
            adjacency: HashMap::new(),
        }
    }

    /// Build a network from `(a, b, travel time)` records
    pub fn from_edges<I, L>(edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (L, L, Time)>,
        L: Into<Location>,
    {
        let mut graph = Self::new();
        for (a, b, weight) in edges {
            graph.add_edge(a, b, weight)?;
        }
        Ok(graph)
    }

    /// Connect two warehouses in both directions.
    ///
    /// Connecting the same pair again replaces the earlier travel time. Negative
    /// or non-finite travel times are rejected since settled distances would no
    /// longer be final.
    pub fn add_edge<L: Into<Location>>(&mut self, a: L, b: L, weight: Time) -> Result<()> {
        let (a, b) = (a.into(), b.into());
        if !weight.is_finite() || weight < 0.0 {
            return Err(Error::InvalidWeight {
                from: a,
                to: b,
                weight,
            });
        }

        self.adjacency
            .entry(a.clone())
            .or_default()
            .insert(b.clone(), weight);
        self.adjacency.entry(b).or_default().insert(a, weight);
        Ok(())
    }

    /// Neighbours of a warehouse with their travel times; empty for unknown warehouses
    pub fn neighbors<'a>(&'a self, location: &str) -> impl Iterator<Item = (&'a Location, Time)> + 'a {
        self.adjacency
            .get(location)
            .into_iter()
            .flatten()
            .map(|(neighbor, weight)| (neighbor, *weight))
    }

    /// Travel time of the direct connection between two warehouses
    pub fn weight(&self, a: &str, b: &str) -> Option<Time> {
        self.adjacency.get(a)?.get(b).copied()
    }

    pub fn contains(&self, location: &str) -> bool {
        self.adjacency.contains_key(location)
    }

    pub fn location_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of undirected connections
    pub fn edge_count(&self) -> usize {
        self.adjacency
            .iter()
            .map(|(location, neighbors)| neighbors.keys().filter(|n| *n >= location).count())
            .sum()
    }
}
