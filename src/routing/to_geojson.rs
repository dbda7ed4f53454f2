use geo::line_string;
use geojson::{FeatureCollection, Geometry, Value as GeoJsonValue};
use itertools::Itertools;
use serde_json::json;

use crate::error::Error;
use crate::model::RoadMap;

use super::RoutedPath;

impl RoutedPath<String> {
    /// Converts the routed path to a `GeoJSON` `FeatureCollection`, one
    /// LineString feature per traversed edge with the street's attributes
    /// as properties. An empty path yields an empty collection.
    pub fn to_geojson(&self, map: &RoadMap) -> Result<FeatureCollection, Error> {
        let mut features = Vec::new();

        for (leg_index, (from, to)) in self.nodes.iter().tuple_windows().enumerate() {
            let edge = map.edge(from, to)?;
            let origin = map
                .node(from)
                .ok_or_else(|| Error::AddressNotFound(from.clone()))?;
            let target = map
                .node(to)
                .ok_or_else(|| Error::AddressNotFound(to.clone()))?;

            let line = line_string![
                (x: origin.point().x(), y: origin.point().y()),
                (x: target.point().x(), y: target.point().y()),
            ];
            let geometry = Geometry::new(GeoJsonValue::from(&line));

            let value = json!({
                "type": "Feature",
                "geometry": geometry,
                "properties": {
                    "leg_index": leg_index,
                    "from": from,
                    "to": to,
                    "street_name": edge.street_name,
                    "speed_limit": edge.speed_limit,
                    "distance": edge.distance,
                    "travel_time": edge.travel_time(),
                }
            });
            features.push(
                serde_json::from_value(value).map_err(|e| Error::GeoJsonError(e.to_string()))?,
            );
        }

        Ok(FeatureCollection {
            features,
            bbox: None,
            foreign_members: None,
        })
    }

    pub fn to_geojson_string(&self, map: &RoadMap) -> Result<String, Error> {
        serde_json::to_string(&self.to_geojson(map)?)
            .map_err(|e| Error::GeoJsonError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use geo::Point;

    use crate::model::{EdgeDirection, RoadMap};
    use crate::routing::find_path;

    #[test]
    fn exports_one_feature_per_edge() {
        let mut map = RoadMap::new();
        map.add_node("a", Point::new(0.0, 0.0)).unwrap();
        map.add_node("b", Point::new(100.0, 0.0)).unwrap();
        map.add_node("c", Point::new(100.0, 100.0)).unwrap();
        map.add_edge("a", "b", "FirstSt", 50.0, EdgeDirection::TwoWay)
            .unwrap();
        map.add_edge("b", "c", "SecondAve", 50.0, EdgeDirection::TwoWay)
            .unwrap();
        map.set_goal("c").unwrap();

        let path = find_path(&map, "a".to_string()).unwrap();
        let collection = path.to_geojson(&map).unwrap();
        assert_eq!(collection.features.len(), path.nodes.len() - 1);

        let first = &collection.features[0];
        let props = first.properties.as_ref().unwrap();
        assert_eq!(props["street_name"], "FirstSt");
        assert_eq!(props["leg_index"], 0);

        let text = path.to_geojson_string(&map).unwrap();
        assert!(text.contains("SecondAve"));
    }

    #[test]
    fn empty_path_exports_empty_collection() {
        let mut map = RoadMap::new();
        map.add_node("a", Point::new(0.0, 0.0)).unwrap();
        map.add_node("b", Point::new(10.0, 0.0)).unwrap();
        map.set_goal("b").unwrap();

        let path = find_path(&map, "a".to_string()).unwrap();
        assert!(!path.found());
        let collection = path.to_geojson(&map).unwrap();
        assert!(collection.features.is_empty());
    }
}
