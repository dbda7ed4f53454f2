//! The road map: an address-keyed node index, a central edge table, and the
//! sector buckets derived from both.
//!
//! The map doubles as the search context for route queries: it implements
//! [`SearchGraph`] so the generic engine can traverse it once a goal address
//! has been recorded with [`RoadMap::set_goal`].

use geo::{Distance, Euclidean, Intersects, Point, Rect};
use hashbrown::{HashMap, HashSet};
use log::debug;

use crate::error::Error;
use crate::model::sectors::MapSector;
use crate::routing::{RoutedPath, SearchGraph, find_path};
use crate::{Cost, INFINITE_COST};

use super::components::{AddressTuple, Edge, EdgeDirection, LocationNode};

/// A street map in coordinate space.
///
/// Nodes are indexed by address; each edge is registered once under the
/// unordered pair of addresses it spans, so two addresses define at most one
/// edge. The sector buckets are derived data, rebuilt incrementally on every
/// insertion; they index the nodes and edges, they never own them.
///
/// All mutation belongs to a build phase. Once built, the map may be shared
/// read-only across threads; mutating it concurrently with a search or a
/// sector query is the caller's responsibility to rule out.
#[derive(Debug, Clone, Default)]
pub struct RoadMap {
    /// (address, node) pairs
    addresses: HashMap<String, LocationNode>,
    /// All edges, keyed by the unordered address pair
    edges: HashMap<AddressTuple, Edge>,
    /// Addresses of the nodes inside each sector
    sector_nodes: HashMap<MapSector, Vec<String>>,
    /// Keys of the edges whose bounding box touches each sector
    sector_edges: HashMap<MapSector, Vec<AddressTuple>>,
    /// Address to be reached in the goal state of navigation
    goal: Option<String>,
}

impl RoadMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a node under its address and buckets it in the sector grid.
    ///
    /// # Errors
    ///
    /// `Error::DuplicateAddress` if the address is already registered.
    /// Duplicates are rejected at insertion time, never silently overwritten.
    pub fn add_node(&mut self, address: impl Into<String>, point: Point<f64>) -> Result<(), Error> {
        let address = address.into();
        if self.addresses.contains_key(&address) {
            return Err(Error::DuplicateAddress(address));
        }
        let sector = MapSector::containing(point);
        self.sector_nodes
            .entry(sector)
            .or_default()
            .push(address.clone());
        self.addresses
            .insert(address.clone(), LocationNode::new(address, point));
        Ok(())
    }

    /// Registers an edge between two known addresses, deriving its length
    /// from the straight-line distance between the endpoints.
    ///
    /// Adjacency is updated for one or both endpoints depending on
    /// `direction`. Re-registering an existing pair replaces the stored edge
    /// record; adjacency and sector buckets are only ever widened, since the
    /// index has no removal path.
    ///
    /// # Errors
    ///
    /// `Error::AddressNotFound` if either endpoint is unregistered, and
    /// `Error::InvalidData` for a non-positive speed limit.
    pub fn add_edge(
        &mut self,
        address1: &str,
        address2: &str,
        street_name: &str,
        speed_limit: f64,
        direction: EdgeDirection,
    ) -> Result<(), Error> {
        let (p1, p2) = self.endpoint_points(address1, address2)?;
        let distance = Euclidean.distance(p1, p2);
        self.insert_edge(address1, address2, street_name, distance, speed_limit, direction)
    }

    /// Same as [`RoadMap::add_edge`] but with an explicitly supplied length,
    /// for streets whose surveyed length differs from the straight line.
    pub fn add_edge_with_distance(
        &mut self,
        address1: &str,
        address2: &str,
        street_name: &str,
        distance: f64,
        speed_limit: f64,
        direction: EdgeDirection,
    ) -> Result<(), Error> {
        self.insert_edge(address1, address2, street_name, distance, speed_limit, direction)
    }

    fn endpoint_points(
        &self,
        address1: &str,
        address2: &str,
    ) -> Result<(Point<f64>, Point<f64>), Error> {
        match (self.addresses.get(address1), self.addresses.get(address2)) {
            (Some(n1), Some(n2)) => Ok((n1.point(), n2.point())),
            (None, _) => Err(Error::AddressNotFound(address1.to_string())),
            (_, None) => Err(Error::AddressNotFound(address2.to_string())),
        }
    }

    fn insert_edge(
        &mut self,
        address1: &str,
        address2: &str,
        street_name: &str,
        distance: f64,
        speed_limit: f64,
        direction: EdgeDirection,
    ) -> Result<(), Error> {
        if !speed_limit.is_finite() || speed_limit <= 0.0 {
            return Err(Error::InvalidData(format!(
                "speed limit of \"{street_name}\" must be positive, got {speed_limit}"
            )));
        }
        if !distance.is_finite() || distance < 0.0 {
            return Err(Error::InvalidData(format!(
                "distance of \"{street_name}\" must be non-negative, got {distance}"
            )));
        }

        let (p1, p2) = self.endpoint_points(address1, address2)?;
        let key = AddressTuple::new(address1, address2);
        let replacing = self
            .edges
            .insert(
                key.clone(),
                Edge {
                    distance,
                    street_name: street_name.to_string(),
                    speed_limit,
                    direction,
                },
            )
            .is_some();

        if let Some(node) = self.addresses.get_mut(address1) {
            node.add_neighbor(address2.to_string());
        }
        if direction == EdgeDirection::TwoWay {
            if let Some(node) = self.addresses.get_mut(address2) {
                node.add_neighbor(address1.to_string());
            }
        }

        if !replacing {
            let sectors = MapSector::spanning(p1, p2);
            debug!(
                "indexed edge {address1} - {address2} into {} sector(s)",
                sectors.len()
            );
            for sector in sectors {
                self.sector_edges.entry(sector).or_default().push(key.clone());
            }
        }
        Ok(())
    }

    /// Looks up the edge registered under the unordered pair of addresses.
    ///
    /// # Errors
    ///
    /// `Error::EdgeNotFound` if no such edge exists.
    pub fn edge(&self, address1: &str, address2: &str) -> Result<&Edge, Error> {
        self.edges
            .get(&AddressTuple::new(address1, address2))
            .ok_or_else(|| Error::EdgeNotFound(address1.to_string(), address2.to_string()))
    }

    /// Cost (travel time) of moving from `from` directly to `to`, or
    /// [`INFINITE_COST`] when no edge is traversable in that direction.
    pub fn edge_cost(&self, from: &str, to: &str) -> Cost {
        let traversable = self
            .addresses
            .get(from)
            .is_some_and(|node| node.connects_to(to));
        if !traversable {
            return INFINITE_COST;
        }
        self.edges
            .get(&AddressTuple::new(from, to))
            .map_or(INFINITE_COST, Edge::travel_time)
    }

    pub fn node(&self, address: &str) -> Option<&LocationNode> {
        self.addresses.get(address)
    }

    pub fn nodes(&self) -> impl Iterator<Item = &LocationNode> {
        self.addresses.values()
    }

    pub fn node_count(&self) -> usize {
        self.addresses.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.addresses.is_empty()
    }

    /// Records the address the next searches navigate toward.
    ///
    /// # Errors
    ///
    /// `Error::AddressNotFound` if the address is unregistered.
    pub fn set_goal(&mut self, address: &str) -> Result<(), Error> {
        if !self.addresses.contains_key(address) {
            return Err(Error::AddressNotFound(address.to_string()));
        }
        self.goal = Some(address.to_string());
        Ok(())
    }

    pub fn goal(&self) -> Option<&str> {
        self.goal.as_deref()
    }

    /// Routes from the given address to the current goal.
    ///
    /// An unreachable goal yields a routed path with no nodes, not an error.
    ///
    /// # Errors
    ///
    /// `Error::AddressNotFound` if `from` is unregistered and
    /// `Error::GoalNotSet` if no goal has been recorded.
    pub fn route(&self, from: &str) -> Result<RoutedPath<String>, Error> {
        if !self.addresses.contains_key(from) {
            return Err(Error::AddressNotFound(from.to_string()));
        }
        find_path(self, from.to_string())
    }

    /// Addresses bucketed in the given sector.
    pub fn addresses_in_sector(&self, sector: &MapSector) -> &[String] {
        self.sector_nodes.get(sector).map(Vec::as_slice).unwrap_or_default()
    }

    /// Keys of the edges whose bounding box touches the given sector.
    pub fn edges_in_sector(&self, sector: &MapSector) -> &[AddressTuple] {
        self.sector_edges.get(sector).map(Vec::as_slice).unwrap_or_default()
    }

    /// Nodes lying inside the given region. Only the buckets of intersected
    /// sectors are scanned; each candidate is then checked against the exact
    /// region bounds.
    pub fn nodes_in_region(&self, region: &Rect<f64>) -> Vec<&LocationNode> {
        let mut found = Vec::new();
        for sector in MapSector::intersecting(region) {
            for address in self.addresses_in_sector(&sector) {
                if let Some(node) = self.addresses.get(address) {
                    if region.intersects(&node.point()) {
                        found.push(node);
                    }
                }
            }
        }
        found
    }

    /// Edges whose bounding box touches the given region, deduplicated
    /// across sector buckets. Conservative in the same way the sector index
    /// is: an edge may be reported whose line does not enter the region.
    pub fn edges_in_region(&self, region: &Rect<f64>) -> Vec<(&AddressTuple, &Edge)> {
        let mut seen: HashSet<&AddressTuple> = HashSet::new();
        let mut found = Vec::new();
        for sector in MapSector::intersecting(region) {
            for key in self.edges_in_sector(&sector) {
                if seen.insert(key) {
                    if let Some(edge) = self.edges.get(key) {
                        found.push((key, edge));
                    }
                }
            }
        }
        found
    }
}

impl SearchGraph for RoadMap {
    type Node = String;

    fn neighbors(&self, node: &String) -> Vec<String> {
        self.addresses
            .get(node)
            .map(|n| n.neighbors().to_vec())
            .unwrap_or_default()
    }

    fn edge_cost(&self, from: &String, to: &String) -> Cost {
        RoadMap::edge_cost(self, from, to)
    }

    /// Straight-line distance from the node to the goal.
    ///
    /// Under the travel-time cost model this estimate is only admissible
    /// when speed limits are bounded by a known maximum; with unbounded
    /// speeds it can overestimate and the engine may return a path that is
    /// fast but not provably fastest. Callers must not assume a tighter
    /// optimality guarantee than that.
    fn heuristic(&self, node: &String) -> Result<Cost, Error> {
        let goal = self.goal.as_ref().ok_or(Error::GoalNotSet)?;
        let goal_node = self.addresses.get(goal).ok_or(Error::GoalNotSet)?;
        let node = self
            .addresses
            .get(node)
            .ok_or_else(|| Error::AddressNotFound(node.clone()))?;
        Ok(node.distance_to(goal_node))
    }

    fn is_goal(&self, node: &String) -> Result<bool, Error> {
        match &self.goal {
            Some(goal) => Ok(goal == node),
            None => Err(Error::GoalNotSet),
        }
    }
}
