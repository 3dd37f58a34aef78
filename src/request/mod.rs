mod geo_point_deserializer;
mod geometry_request;
mod radius_deserializer;

pub use geometry_request::{GeometryRequestError, parse_geometry_request, parse_zone_geometry};
