use crate::domain::{GeoPoint, Segment};
use crate::geometry::distance;

const METERS_PER_DEGREE: f64 = 111_000.0;

/// Distance in meters from `point` to the closest point of `segment`.
///
/// The projection onto the segment is computed in a flat frame scaled at the latitude of
/// `point`, which only holds for city-scale spans. The final measurement uses [`distance`].
pub fn point_to_segment_distance(point: &GeoPoint, segment: Segment<'_>) -> f64 {
    let Segment { start, end } = segment;
    if distance(start, end) == 0.0 {
        return distance(point, start);
    }

    let lat_scale = METERS_PER_DEGREE;
    let lon_scale = METERS_PER_DEGREE * point.latitude.to_radians().cos();

    let dx = (end.longitude - start.longitude) * lon_scale;
    let dy = (end.latitude - start.latitude) * lat_scale;
    let px = (point.longitude - start.longitude) * lon_scale;
    let py = (point.latitude - start.latitude) * lat_scale;

    // Zero when the segment runs along a parallel and the frame collapses at a pole
    let length_squared = dx * dx + dy * dy;
    let t = if length_squared > 0.0 {
        ((px * dx + py * dy) / length_squared).clamp(0.0, 1.0)
    } else {
        0.0
    };

    let closest = start.lerp(end, t);
    distance(point, &closest)
}
