use crate::domain::{GeoPoint, Geometry};
use serde_json::Value;
use thiserror::Error;

/// Decodes a geometry request: a JSON list of `{"lat": .., "lng": ..}` objects.
///
/// One point selects point proximity, two or more select path proximity.
pub fn parse_geometry_request(raw: &str) -> Result<Geometry, GeometryRequestError> {
    let value = serde_json::from_str::<Value>(raw).map_err(GeometryRequestError::Syntax)?;
    let Value::Array(items) = value else {
        return Err(GeometryRequestError::NotAList);
    };

    let points = items
        .into_iter()
        .enumerate()
        .map(|(index, item)| parse_point(index, item))
        .collect::<Result<Vec<_>, _>>()?;

    Geometry::from_points(points).ok_or(GeometryRequestError::EmptyList)
}

/// Decodes a stored zone, which uses single quotes where JSON expects double quotes.
pub fn parse_zone_geometry(raw: &str) -> Result<Geometry, GeometryRequestError> {
    parse_geometry_request(&raw.replace('\'', "\""))
}

fn parse_point(index: usize, item: Value) -> Result<GeoPoint, GeometryRequestError> {
    let has_keys = item.as_object().is_some_and(|o| o.contains_key("lat") && o.contains_key("lng"));
    if !has_keys {
        return Err(GeometryRequestError::MissingKeys { index });
    }

    serde_json::from_value(item).map_err(|source| GeometryRequestError::InvalidPoint { index, source })
}

#[derive(Error, Debug)]
pub enum GeometryRequestError {
    #[error("Invalid geo parameter format. Expected JSON list of dicts.")]
    Syntax(#[source] serde_json::Error),
    #[error("geo parameter must be a non-empty list")]
    NotAList,
    #[error("geo parameter must be a non-empty list")]
    EmptyList,
    #[error("Each geo point must be a dict with \"lat\" and \"lng\" keys (point {index})")]
    MissingKeys { index: usize },
    #[error("invalid geo point {index}: {source}")]
    InvalidPoint { index: usize, source: serde_json::Error },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::GeoPath;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn single_point_selects_point_mode() {
        let geometry = parse_geometry_request(r#"[{"lat": 34.05, "lng": -118.25}]"#).unwrap();
        assert_eq!(geometry, Geometry::Point(GeoPoint::new(34.05, -118.25)));
    }

    #[test]
    fn multiple_points_select_path_mode_in_order() {
        let geometry = parse_geometry_request(r#"[{"lat": 34.05, "lng": -118.26}, {"lat": 34.06, "lng": -118.24}, {"lat": 34.07, "lng": -118.25}]"#).unwrap();
        let expected = GeoPath::new(vec![
            GeoPoint::new(34.05, -118.26),
            GeoPoint::new(34.06, -118.24),
            GeoPoint::new(34.07, -118.25),
        ])
        .unwrap();

        assert_eq!(geometry, Geometry::Path(expected));
    }

    #[test]
    fn zone_geometry_accepts_single_quotes() {
        let geometry = parse_zone_geometry("[{'lat': 34.05, 'lng': -118.25}]").unwrap();
        assert_eq!(geometry, Geometry::Point(GeoPoint::new(34.05, -118.25)));
    }

    #[rstest]
    #[case::not_json("lat=34&lng=-118")]
    #[case::truncated(r#"[{"lat": 34.05"#)]
    fn fails_for_malformed_json(#[case] raw: &str) {
        assert!(matches!(parse_geometry_request(raw), Err(GeometryRequestError::Syntax(_))));
    }

    #[rstest]
    #[case::object(r#"{"lat": 34.05, "lng": -118.25}"#)]
    #[case::number("42")]
    #[case::string(r#""here""#)]
    fn fails_for_anything_but_a_list(#[case] raw: &str) {
        assert!(matches!(parse_geometry_request(raw), Err(GeometryRequestError::NotAList)));
    }

    #[test]
    fn fails_for_an_empty_list() {
        assert!(matches!(parse_geometry_request("[]"), Err(GeometryRequestError::EmptyList)));
    }

    #[rstest]
    #[case::missing_lng(r#"[{"lat": 34.05}]"#, 0)]
    #[case::wrong_key(r#"[{"lat": 34.05, "lng": -118.25}, {"lat": 34.06, "lon": -118.25}]"#, 1)]
    #[case::not_an_object(r#"[[34.05, -118.25]]"#, 0)]
    fn fails_for_points_without_lat_and_lng(#[case] raw: &str, #[case] expected_index: usize) {
        match parse_geometry_request(raw) {
            Err(GeometryRequestError::MissingKeys { index }) => assert_eq!(index, expected_index),
            other => panic!("expected missing keys, found {:?}", other),
        }
    }

    #[test]
    fn fails_for_points_out_of_range() {
        let result = parse_geometry_request(r#"[{"lat": 134.05, "lng": -118.25}]"#);
        assert!(matches!(result, Err(GeometryRequestError::InvalidPoint { index: 0, .. })));
    }

    #[test]
    fn error_messages_are_fit_for_clients() {
        let error = parse_geometry_request("[]").unwrap_err();
        assert_eq!(error.to_string(), "geo parameter must be a non-empty list");
    }
}
