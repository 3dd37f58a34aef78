use crate::domain::{GeoPath, GeoPoint, Geometry, Record};
use crate::geometry::{distance, point_to_segment_distance};
use ordered_float::OrderedFloat;

/// Whether `record` lies within `radius_m` meters of `geometry`.
///
/// Points match inclusively (`<=`), paths exclusively (`<`) against their closest segment.
/// Records without usable coordinates never match.
pub fn within_radius(record: &Record, geometry: &Geometry, radius_m: f64) -> bool {
    let Some(point) = record.point() else {
        return false;
    };

    match geometry {
        Geometry::Point(center) => distance(&point, center) <= radius_m,
        Geometry::Path(path) => distance_to_path(&point, path).is_some_and(|d| d < radius_m),
    }
}

fn distance_to_path(point: &GeoPoint, path: &GeoPath) -> Option<f64> {
    path.segments()
        .map(|segment| OrderedFloat(point_to_segment_distance(point, segment)))
        .min()
        .map(|d| d.into_inner())
}
