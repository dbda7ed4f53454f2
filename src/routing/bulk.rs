//! One-to-many routing toward a shared goal.

use rayon::prelude::*;

use crate::error::Error;
use crate::model::RoadMap;

use super::RoutedPath;

/// Routes every start toward the map's current goal in parallel.
///
/// The map is shared read-only; each search owns its bookkeeping, so the
/// runs never contaminate one another. Results keep the order of `starts`,
/// with unreachable goals reported as empty paths.
///
/// # Errors
///
/// `Error::GoalNotSet` if the map has no goal and `Error::AddressNotFound`
/// for an unregistered start.
pub fn one_to_many(map: &RoadMap, starts: &[&str]) -> Result<Vec<RoutedPath<String>>, Error> {
    starts.par_iter().map(|start| map.route(start)).collect()
}
