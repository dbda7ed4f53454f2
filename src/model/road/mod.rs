//! The concrete road network model.

pub mod components;
pub mod network;

pub use components::{AddressTuple, Edge, EdgeDirection, LocationNode};
pub use network::RoadMap;
