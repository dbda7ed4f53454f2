//! Generic best-first (A*) search over any [`SearchGraph`].
//!
//! The engine keeps its bookkeeping in an arena owned by the call, one
//! record per discovered node, so the graph itself is never mutated and any
//! number of searches can run over the same graph at once.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use fixedbitset::FixedBitSet;
use hashbrown::HashMap;
use serde::Serialize;

use crate::error::Error;
use crate::{Cost, INFINITE_COST};

use super::contract::SearchGraph;

const NO_PARENT: usize = usize::MAX;

/// Per-node search bookkeeping, indexed by a stable arena slot.
struct SearchRecord<N> {
    node: N,
    /// Best known accumulated cost from the start.
    cost: Cost,
    /// Arena index of the node this one was reached from.
    parent: usize,
}

/// Frontier entry: priority value plus the insertion sequence number that
/// breaks ties, so equal-priority pops follow insertion order and runs are
/// deterministic on graphs with several equal-cost optima.
struct FrontierEntry {
    priority: Cost,
    seq: u64,
    idx: usize,
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Min-heap by priority (reversed from standard Rust BinaryHeap),
        // earliest insertion first among equals.
        other
            .priority
            .total_cmp(&self.priority)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FrontierEntry {}

/// An ordered node sequence from start to goal with its accumulated cost.
///
/// No path: empty `nodes` and infinite cost. A search whose start already
/// satisfies the goal yields a single-element path with cost 0, so the two
/// outcomes stay distinguishable.
#[derive(Debug, Clone, Serialize)]
pub struct RoutedPath<N> {
    pub nodes: Vec<N>,
    pub cost: Cost,
}

impl<N> RoutedPath<N> {
    fn not_found() -> Self {
        Self {
            nodes: Vec::new(),
            cost: INFINITE_COST,
        }
    }

    pub fn found(&self) -> bool {
        !self.nodes.is_empty()
    }
}

/// Searches from `start` to the graph's goal, returning the cheapest path
/// the heuristic admits.
///
/// Frontier entries are never removed when a cheaper rediscovery supersedes
/// them; the stale ones are discarded when popped (lazy deletion), which
/// trades a larger heap for a structure with no decrease-key. The loop is
/// iterative; exhaustion of the frontier returns an empty path, not an
/// error.
///
/// # Errors
///
/// Propagates the contract's own state error when the graph has no goal
/// designated. The engine raises no errors of its own.
pub fn find_path<G: SearchGraph>(graph: &G, start: G::Node) -> Result<RoutedPath<G::Node>, Error> {
    let mut arena: Vec<SearchRecord<G::Node>> = Vec::new();
    let mut slots: HashMap<G::Node, usize> = HashMap::new();
    let mut closed = FixedBitSet::new();
    let mut frontier: BinaryHeap<FrontierEntry> = BinaryHeap::new();
    let mut seq: u64 = 0;

    // The start seeds the frontier at priority 0; its heuristic never
    // contributes to the outcome.
    let start_idx = intern(&mut arena, &mut slots, start);
    arena[start_idx].cost = 0.0;
    frontier.push(FrontierEntry {
        priority: 0.0,
        seq,
        idx: start_idx,
    });

    while let Some(entry) = frontier.pop() {
        // Stale duplicate of an already finalized node.
        if closed.contains(entry.idx) {
            continue;
        }

        if graph.is_goal(&arena[entry.idx].node)? {
            return Ok(retrace(&arena, entry.idx));
        }

        closed.grow(arena.len());
        closed.insert(entry.idx);

        let current = arena[entry.idx].node.clone();
        let current_cost = arena[entry.idx].cost;

        for neighbor in graph.neighbors(&current) {
            let slot = intern(&mut arena, &mut slots, neighbor);
            if closed.contains(slot) {
                continue;
            }
            let tentative = current_cost + graph.edge_cost(&current, &arena[slot].node);
            if tentative < arena[slot].cost {
                arena[slot].cost = tentative;
                arena[slot].parent = entry.idx;
                let priority = tentative + graph.heuristic(&arena[slot].node)?;
                seq += 1;
                frontier.push(FrontierEntry {
                    priority,
                    seq,
                    idx: slot,
                });
            }
        }
    }

    Ok(RoutedPath::not_found())
}

fn intern<N: Clone + Eq + std::hash::Hash>(
    arena: &mut Vec<SearchRecord<N>>,
    slots: &mut HashMap<N, usize>,
    node: N,
) -> usize {
    match slots.entry(node) {
        hashbrown::hash_map::Entry::Occupied(entry) => *entry.get(),
        hashbrown::hash_map::Entry::Vacant(entry) => {
            let idx = arena.len();
            arena.push(SearchRecord {
                node: entry.key().clone(),
                cost: INFINITE_COST,
                parent: NO_PARENT,
            });
            entry.insert(idx);
            idx
        }
    }
}

// Retraces parent links from the solution back to the start and reverses.
fn retrace<N: Clone>(arena: &[SearchRecord<N>], goal_idx: usize) -> RoutedPath<N> {
    let mut nodes = Vec::new();
    let mut idx = goal_idx;
    while idx != NO_PARENT {
        nodes.push(arena[idx].node.clone());
        idx = arena[idx].parent;
    }
    nodes.reverse();
    RoutedPath {
        nodes,
        cost: arena[goal_idx].cost,
    }
}
