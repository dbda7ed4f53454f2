//! Road-network pathfinding over a 2-D coordinate plane.
//!
//! The crate is split into three layers:
//!
//! - [`routing`] holds the generic best-first (A*) engine and the
//!   [`routing::SearchGraph`] contract it searches through. The engine is
//!   written once and works for any graph shape that satisfies the contract.
//! - [`model`] holds the concrete road network: named locations, streets
//!   with speed limits, and a uniform sector grid that buckets nodes and
//!   edges for viewport queries.
//! - [`loading`] reads road maps from their plain-text interchange format.
//!
//! A map is mutated only during a distinct build phase (`add_node`,
//! `add_edge`, `set_goal`); afterwards it may be shared read-only across any
//! number of concurrent searches. Mutating a map while a search or spatial
//! query is in flight is not supported and is the caller's obligation to
//! prevent; the model takes no locks of its own.

pub mod error;
pub mod loading;
pub mod model;
pub mod prelude;
pub mod routing;

pub use error::Error;

/// Travel cost, in time units (distance divided by speed limit).
pub type Cost = f64;

/// Sentinel cost of a missing edge. Keeps cost accumulation branch-free:
/// adding it to any accumulated cost makes the move prohibitively expensive
/// without being an error.
pub const INFINITE_COST: Cost = f64::INFINITY;
