// Re-export key components
pub use crate::error::Error;
pub use crate::loading::{load_map, parse_map};
pub use crate::model::{
    AddressTuple, Edge, EdgeDirection, LocationNode, MapSector, RoadMap, SECTOR_WIDTH,
};
pub use crate::routing::itinerary::{directions, path_distance, travel_time};
pub use crate::routing::{RoutedPath, SearchGraph, find_path, one_to_many};

// Core scalar types
pub use crate::{Cost, INFINITE_COST};
