use crate::domain::GeoPoint;
use serde::{Serialize, Serializer};

/// An ordered sequence of at least two points, each consecutive pair forming a segment.
#[derive(Clone, Debug, PartialEq)]
pub struct GeoPath {
    points: Vec<GeoPoint>,
}

impl GeoPath {
    /// Returns `None` for fewer than two points.
    pub fn new(points: Vec<GeoPoint>) -> Option<Self> {
        if points.len() < 2 {
            return None;
        }
        Some(GeoPath { points })
    }

    pub fn points(&self) -> &[GeoPoint] {
        &self.points
    }

    pub fn segments(&self) -> impl Iterator<Item = Segment<'_>> + '_ {
        self.points.windows(2).map(|pair| Segment {
            start: &pair[0],
            end: &pair[1],
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment<'a> {
    pub start: &'a GeoPoint,
    pub end: &'a GeoPoint,
}

/// What a proximity query is measured against.
#[derive(Clone, Debug, PartialEq)]
pub enum Geometry {
    Point(GeoPoint),
    Path(GeoPath),
}

impl Geometry {
    /// A single point yields [`Geometry::Point`], two or more a [`Geometry::Path`], none yields `None`.
    pub fn from_points(mut points: Vec<GeoPoint>) -> Option<Self> {
        match points.len() {
            0 => None,
            1 => points.pop().map(Geometry::Point),
            _ => GeoPath::new(points).map(Geometry::Path),
        }
    }

    pub fn points(&self) -> &[GeoPoint] {
        match self {
            Geometry::Point(point) => std::slice::from_ref(point),
            Geometry::Path(path) => path.points(),
        }
    }
}

impl Serialize for Geometry {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.points())
    }
}
