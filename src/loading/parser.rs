use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use geo::Point;
use log::info;

use crate::error::Error;
use crate::model::{EdgeDirection, RoadMap};

/// Builds a [`RoadMap`] from a map file.
///
/// ```text
/// line 1: number of nodes (n)
/// line 2: number of edges (e)
/// n lines: "<address> <x> <y>"
/// e lines: "<address1> <address2> <street-name> <speed-limit>"
/// ```
///
/// Edges load as two-way streets.
///
/// # Errors
///
/// `Error::IoError` if the file cannot be read and `Error::InvalidData` if
/// its contents cannot be parsed.
pub fn load_map(path: impl AsRef<Path>) -> Result<RoadMap, Error> {
    let path = path.as_ref();
    info!("loading road map from {}", path.display());
    let file = File::open(path)?;
    parse_map(BufReader::new(file))
}

/// Same as [`load_map`], over any buffered reader.
pub fn parse_map<R: BufRead>(reader: R) -> Result<RoadMap, Error> {
    let mut lines = reader.lines();

    let node_count = next_count(&mut lines, "node count")?;
    let edge_count = next_count(&mut lines, "edge count")?;

    let mut map = RoadMap::new();

    for _ in 0..node_count {
        let line = next_line(&mut lines)?;
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.len() < 3 {
            return Err(Error::InvalidData(format!(
                "malformed node record: \"{line}\""
            )));
        }
        let x = parse_number(tokens[1], &line)?;
        let y = parse_number(tokens[2], &line)?;
        map.add_node(tokens[0], Point::new(x, y))?;
    }

    for _ in 0..edge_count {
        let line = next_line(&mut lines)?;
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.len() < 4 {
            return Err(Error::InvalidData(format!(
                "malformed edge record: \"{line}\""
            )));
        }
        let speed_limit = parse_number(tokens[3], &line)?;
        map.add_edge(tokens[0], tokens[1], tokens[2], speed_limit, EdgeDirection::TwoWay)?;
    }

    info!(
        "loaded road map: {} node(s), {} edge(s)",
        map.node_count(),
        map.edge_count()
    );
    Ok(map)
}

fn next_line<I>(lines: &mut I) -> Result<String, Error>
where
    I: Iterator<Item = std::io::Result<String>>,
{
    lines
        .next()
        .ok_or_else(|| Error::InvalidData("unexpected end of map data".to_string()))?
        .map_err(Error::from)
}

fn next_count<I>(lines: &mut I, what: &str) -> Result<usize, Error>
where
    I: Iterator<Item = std::io::Result<String>>,
{
    let line = next_line(lines)?;
    line.trim()
        .parse()
        .map_err(|_| Error::InvalidData(format!("invalid {what}: \"{line}\"")))
}

fn parse_number(token: &str, line: &str) -> Result<f64, Error> {
    token
        .parse()
        .map_err(|_| Error::InvalidData(format!("invalid number \"{token}\" in \"{line}\"")))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
3
2
Depot 0 0
Market 300 400
Harbor 600 0
Depot Market DockRd 50
Market Harbor HillSt 30
";

    #[test]
    fn parses_nodes_and_edges() {
        let map = parse_map(SAMPLE.as_bytes()).unwrap();
        assert_eq!(map.node_count(), 3);
        assert_eq!(map.edge_count(), 2);
        assert_eq!(map.node("Market").unwrap().point(), Point::new(300.0, 400.0));

        let edge = map.edge("Depot", "Market").unwrap();
        assert_eq!(edge.street_name, "DockRd");
        assert_eq!(edge.distance, 500.0);
        assert_eq!(edge.travel_time(), 10.0);
        // Loaded streets run both ways.
        assert!(map.edge_cost("Market", "Depot").is_finite());
    }

    #[test]
    fn ignores_display_hints_on_node_records() {
        let text = "1\n0\nPlaza 10 20 0 0 40 40 #ff0000\n";
        let map = parse_map(text.as_bytes()).unwrap();
        assert_eq!(map.node("Plaza").unwrap().point(), Point::new(10.0, 20.0));
    }

    #[test]
    fn truncated_input_is_invalid() {
        let err = parse_map("2\n0\nOnly 0 0\n".as_bytes()).unwrap_err();
        assert!(matches!(err, Error::InvalidData(_)));
    }

    #[test]
    fn malformed_counts_are_invalid() {
        assert!(matches!(
            parse_map("three\n0\n".as_bytes()),
            Err(Error::InvalidData(_))
        ));
    }

    #[test]
    fn malformed_records_are_invalid() {
        assert!(matches!(
            parse_map("1\n0\nPlaza ten 20\n".as_bytes()),
            Err(Error::InvalidData(_))
        ));
        assert!(matches!(
            parse_map("2\n1\nA 0 0\nB 1 1\nA B Road\n".as_bytes()),
            Err(Error::InvalidData(_))
        ));
    }

    #[test]
    fn duplicate_node_records_surface_model_errors() {
        let err = parse_map("2\n0\nX 0 0\nX 1 1\n".as_bytes()).unwrap_err();
        assert!(matches!(err, Error::DuplicateAddress(a) if a == "X"));
    }
}
