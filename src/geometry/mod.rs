mod distance;
mod segment;

pub use distance::distance;
pub use segment::point_to_segment_distance;
