//! The capability contract a graph must satisfy to be searchable.

use std::hash::Hash;

use crate::error::Error;
use crate::Cost;

/// Context the search engine traverses through.
///
/// The engine is generic over the node-identifier type, so any graph shape
/// (a road map keyed by address strings, a test lattice keyed by integers)
/// can be routed through the same loop.
pub trait SearchGraph {
    type Node: Clone + Eq + Hash;

    /// Nodes reachable from `node` over a single edge. Must be finite, and
    /// must not include `node` itself unless a genuine self-loop exists.
    fn neighbors(&self, node: &Self::Node) -> Vec<Self::Node>;

    /// Non-negative cost of moving from `from` directly to `to`. A missing
    /// edge is reported as [`INFINITE_COST`](crate::INFINITE_COST) rather
    /// than an error, so accumulation stays branch-free.
    fn edge_cost(&self, from: &Self::Node, to: &Self::Node) -> Cost;

    /// Estimate of the remaining cost from `node` to the goal.
    ///
    /// Must be admissible (never overestimate the true remaining cost), and
    /// must be consistent for the engine's optimality guarantee to hold:
    /// `heuristic(a) <= edge_cost(a, b) + heuristic(b)` for every edge. The
    /// engine does not verify either property at runtime; a violating
    /// estimate silently degrades optimality instead of failing.
    ///
    /// # Errors
    ///
    /// `Error::GoalNotSet` if no goal has been designated yet.
    fn heuristic(&self, node: &Self::Node) -> Result<Cost, Error>;

    /// Whether `node` satisfies the goal condition.
    ///
    /// # Errors
    ///
    /// `Error::GoalNotSet` if no goal has been designated yet.
    fn is_goal(&self, node: &Self::Node) -> Result<bool, Error>;
}
