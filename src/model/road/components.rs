//! Road network components: nodes, edges, and the key that pairs them.

use std::hash::{Hash, Hasher};

use geo::{Distance, Euclidean, Point};

use crate::Cost;

/// A named point on the map. The address is the node's identity and is
/// unique across the map; adjacency is kept as a list of neighbor addresses
/// and is maintained by [`RoadMap`](super::RoadMap), not by callers.
#[derive(Debug, Clone)]
pub struct LocationNode {
    address: String,
    geometry: Point<f64>,
    neighbors: Vec<String>,
}

impl LocationNode {
    pub(crate) fn new(address: String, geometry: Point<f64>) -> Self {
        Self {
            address,
            geometry,
            neighbors: Vec::new(),
        }
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn point(&self) -> Point<f64> {
        self.geometry
    }

    /// Addresses reachable over one outgoing edge.
    pub fn neighbors(&self) -> &[String] {
        &self.neighbors
    }

    pub fn connects_to(&self, address: &str) -> bool {
        self.neighbors.iter().any(|n| n == address)
    }

    pub(crate) fn add_neighbor(&mut self, address: String) {
        if !self.connects_to(&address) {
            self.neighbors.push(address);
        }
    }

    /// Straight-line distance to another node.
    pub fn distance_to(&self, other: &LocationNode) -> f64 {
        Euclidean.distance(self.geometry, other.geometry)
    }
}

/// Whether an edge is traversable from its first endpoint only, or both ways.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeDirection {
    OneWay,
    TwoWay,
}

/// A street segment between two addresses.
#[derive(Debug, Clone)]
pub struct Edge {
    /// Physical length of the segment, in map units.
    pub distance: f64,
    /// Display name of the street.
    pub street_name: String,
    /// Speed limit, in map units per time unit.
    pub speed_limit: f64,
    pub direction: EdgeDirection,
}

impl Edge {
    /// Time to traverse the segment at its speed limit.
    pub fn travel_time(&self) -> Cost {
        self.distance / self.speed_limit
    }
}

/// Unordered pair of addresses keying an edge. Two tuples are equal if they
/// hold the same two addresses in either order, and hash identically.
#[derive(Debug, Clone)]
pub struct AddressTuple {
    first: String,
    second: String,
}

impl AddressTuple {
    pub fn new(first: impl Into<String>, second: impl Into<String>) -> Self {
        Self {
            first: first.into(),
            second: second.into(),
        }
    }

    pub fn first(&self) -> &str {
        &self.first
    }

    pub fn second(&self) -> &str {
        &self.second
    }
}

impl PartialEq for AddressTuple {
    fn eq(&self, other: &Self) -> bool {
        (self.first == other.first && self.second == other.second)
            || (self.first == other.second && self.second == other.first)
    }
}

impl Eq for AddressTuple {}

impl Hash for AddressTuple {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Hash in a canonical order so both orientations collide.
        let (a, b) = if self.first <= self.second {
            (&self.first, &self.second)
        } else {
            (&self.second, &self.first)
        };
        a.hash(state);
        b.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use std::hash::{BuildHasher, RandomState};

    use super::*;

    #[test]
    fn address_tuple_equality_ignores_order() {
        assert_eq!(AddressTuple::new("A", "B"), AddressTuple::new("B", "A"));
        assert_eq!(AddressTuple::new("A", "B"), AddressTuple::new("A", "B"));
        assert_ne!(AddressTuple::new("A", "B"), AddressTuple::new("A", "C"));
    }

    #[test]
    fn address_tuple_hash_ignores_order() {
        let hasher = RandomState::new();
        assert_eq!(
            hasher.hash_one(AddressTuple::new("A", "B")),
            hasher.hash_one(AddressTuple::new("B", "A"))
        );
    }

    #[test]
    fn travel_time_is_distance_over_speed() {
        let edge = Edge {
            distance: 120.0,
            street_name: "Main St".to_string(),
            speed_limit: 60.0,
            direction: EdgeDirection::TwoWay,
        };
        assert_eq!(edge.travel_time(), 2.0);
    }

    #[test]
    fn neighbors_are_deduplicated() {
        let mut node = LocationNode::new("A".to_string(), Point::new(0.0, 0.0));
        node.add_neighbor("B".to_string());
        node.add_neighbor("B".to_string());
        assert_eq!(node.neighbors(), ["B".to_string()]);
        assert!(node.connects_to("B"));
        assert!(!node.connects_to("C"));
    }
}
