mod geo_point;
mod geometry;
pub mod member;
pub mod motion;
mod radius;
mod record;

pub use geo_point::GeoPoint;
pub use geometry::{GeoPath, Geometry, Segment};
pub use motion::Motion;
pub use radius::Radius;
pub use record::Record;
