//! Summaries over a computed path: traversal time, physical distance, and
//! human-readable driving directions.

use std::fmt;

use geo::Point;
use itertools::Itertools;

use crate::Cost;
use crate::error::Error;
use crate::model::RoadMap;

/// Eight-way compass heading in screen coordinates: y grows southward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Heading {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl Heading {
    /// Heading of the move from one point toward another, or `None` when
    /// the points coincide.
    pub fn between(from: Point<f64>, to: Point<f64>) -> Option<Heading> {
        let east = to.x() > from.x();
        let west = to.x() < from.x();
        let south = to.y() > from.y();
        let north = to.y() < from.y();
        match (north, south, east, west) {
            (true, _, false, false) => Some(Heading::North),
            (true, _, true, _) => Some(Heading::NorthEast),
            (false, false, true, _) => Some(Heading::East),
            (_, true, true, _) => Some(Heading::SouthEast),
            (_, true, false, false) => Some(Heading::South),
            (_, true, _, true) => Some(Heading::SouthWest),
            (false, false, _, true) => Some(Heading::West),
            (true, _, _, true) => Some(Heading::NorthWest),
            _ => None,
        }
    }
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Heading::North => "North",
            Heading::NorthEast => "NorthEast",
            Heading::East => "East",
            Heading::SouthEast => "SouthEast",
            Heading::South => "South",
            Heading::SouthWest => "SouthWest",
            Heading::West => "West",
            Heading::NorthWest => "NorthWest",
        };
        f.write_str(label)
    }
}

/// Time to travel the sub-path between the two indices, summing each edge's
/// traversal time.
///
/// # Errors
///
/// `Error::InvalidRange` if `start > end` or either index is outside the
/// path, `Error::EdgeNotFound` if consecutive path nodes are not connected
/// on this map.
pub fn travel_time(
    map: &RoadMap,
    path: &[String],
    start: usize,
    end: usize,
) -> Result<Cost, Error> {
    check_range(path, start, end)?;
    let mut total = 0.0;
    for (from, to) in path[start..=end].iter().tuple_windows() {
        total += map.edge(from, to)?.travel_time();
    }
    Ok(total)
}

/// Physical distance of the sub-path between the two indices.
///
/// # Errors
///
/// Same conditions as [`travel_time`].
pub fn path_distance(
    map: &RoadMap,
    path: &[String],
    start: usize,
    end: usize,
) -> Result<f64, Error> {
    check_range(path, start, end)?;
    let mut total = 0.0;
    for (from, to) in path[start..=end].iter().tuple_windows() {
        total += map.edge(from, to)?.distance;
    }
    Ok(total)
}

/// One instruction per traversed edge, e.g. `"Head NorthEast along Sunset
/// Ave"`, closed by an arrival line.
///
/// # Errors
///
/// `Error::AddressNotFound` for a path node the map does not know, and
/// `Error::EdgeNotFound` for consecutive nodes with no edge between them.
pub fn directions(map: &RoadMap, path: &[String]) -> Result<Vec<String>, Error> {
    let mut steps = Vec::with_capacity(path.len());
    for (from, to) in path.iter().tuple_windows() {
        let edge = map.edge(from, to)?;
        let origin = map
            .node(from)
            .ok_or_else(|| Error::AddressNotFound(from.clone()))?;
        let target = map
            .node(to)
            .ok_or_else(|| Error::AddressNotFound(to.clone()))?;
        let step = match Heading::between(origin.point(), target.point()) {
            Some(heading) => format!("Head {heading} along {}", edge.street_name),
            None => format!("Continue along {}", edge.street_name),
        };
        steps.push(step);
    }
    steps.push("Destination reached".to_string());
    Ok(steps)
}

fn check_range(path: &[String], start: usize, end: usize) -> Result<(), Error> {
    if start > end {
        return Err(Error::InvalidRange(format!(
            "start index {start} is past end index {end}"
        )));
    }
    if end >= path.len() {
        return Err(Error::InvalidRange(format!(
            "index {end} is out of bounds for a path of {} node(s)",
            path.len()
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use geo::Point;

    use super::*;
    use crate::model::EdgeDirection;

    fn l_shaped_map() -> (RoadMap, Vec<String>) {
        let mut map = RoadMap::new();
        map.add_node("start", Point::new(0.0, 0.0)).unwrap();
        map.add_node("corner", Point::new(30.0, 0.0)).unwrap();
        map.add_node("finish", Point::new(30.0, -40.0)).unwrap();
        map.add_edge("start", "corner", "FirstSt", 10.0, EdgeDirection::TwoWay)
            .unwrap();
        map.add_edge("corner", "finish", "SecondAve", 20.0, EdgeDirection::TwoWay)
            .unwrap();
        let path = vec![
            "start".to_string(),
            "corner".to_string(),
            "finish".to_string(),
        ];
        (map, path)
    }

    #[test]
    fn travel_time_sums_edge_times() {
        let (map, path) = l_shaped_map();
        // 30/10 + 40/20
        assert_eq!(travel_time(&map, &path, 0, 2).unwrap(), 5.0);
        assert_eq!(travel_time(&map, &path, 1, 2).unwrap(), 2.0);
        // A single node spans no edges.
        assert_eq!(travel_time(&map, &path, 1, 1).unwrap(), 0.0);
    }

    #[test]
    fn path_distance_sums_edge_lengths() {
        let (map, path) = l_shaped_map();
        assert_eq!(path_distance(&map, &path, 0, 2).unwrap(), 70.0);
        assert_eq!(path_distance(&map, &path, 0, 1).unwrap(), 30.0);
    }

    #[test]
    fn inverted_range_is_rejected() {
        let (map, path) = l_shaped_map();
        assert!(matches!(
            travel_time(&map, &path, 2, 0),
            Err(Error::InvalidRange(_))
        ));
    }

    #[test]
    fn out_of_bounds_range_is_rejected() {
        let (map, path) = l_shaped_map();
        assert!(matches!(
            path_distance(&map, &path, 0, 3),
            Err(Error::InvalidRange(_))
        ));
        assert!(matches!(
            travel_time(&map, &[], 0, 0),
            Err(Error::InvalidRange(_))
        ));
    }

    #[test]
    fn directions_follow_compass_and_street_names() {
        let (map, path) = l_shaped_map();
        let steps = directions(&map, &path).unwrap();
        assert_eq!(
            steps,
            [
                "Head East along FirstSt",
                "Head North along SecondAve",
                "Destination reached",
            ]
        );
    }

    #[test]
    fn diagonal_moves_use_combined_headings() {
        let mut map = RoadMap::new();
        map.add_node("a", Point::new(0.0, 0.0)).unwrap();
        map.add_node("b", Point::new(10.0, 10.0)).unwrap();
        map.add_edge("a", "b", "Slant", 5.0, EdgeDirection::TwoWay)
            .unwrap();
        let path = vec!["a".to_string(), "b".to_string()];
        let steps = directions(&map, &path).unwrap();
        assert_eq!(steps[0], "Head SouthEast along Slant");
    }

    #[test]
    fn disconnected_pair_surfaces_missing_edge() {
        let (map, _) = l_shaped_map();
        let path = vec!["start".to_string(), "finish".to_string()];
        assert!(matches!(
            travel_time(&map, &path, 0, 1),
            Err(Error::EdgeNotFound(_, _))
        ));
    }
}
