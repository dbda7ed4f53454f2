//! Data model for the road network.
//!
//! Contains the concrete map (nodes, edges, adjacency) and the sector grid
//! that buckets both for viewport queries.

pub mod road;
pub mod sectors;

pub use road::{AddressTuple, Edge, EdgeDirection, LocationNode, RoadMap};
pub use sectors::{MapSector, SECTOR_WIDTH};
