//! Route computation: the generic search engine, the contract it consumes,
//! and utilities over computed paths.

pub mod astar;
pub mod bulk;
pub mod contract;
pub mod itinerary;
mod to_geojson;

pub use astar::{RoutedPath, find_path};
pub use bulk::one_to_many;
pub use contract::SearchGraph;
