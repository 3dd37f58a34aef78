use crate::domain::GeoPoint;
use serde::Serialize;
use serde_json::{Map, Value};

pub const LATITUDE_FIELD: &str = "LAT";
pub const LONGITUDE_FIELD: &str = "LON";

/// A single row of the dataset. Fields other than the coordinates are carried as-is.
#[derive(Clone, Default, Debug, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Record {
    fields: Map<String, Value>,
}

impl Record {
    pub fn new(fields: Map<String, Value>) -> Self {
        Record { fields }
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// The record's position, or `None` when either coordinate is absent, null or not a finite number.
    pub fn point(&self) -> Option<GeoPoint> {
        let latitude = coordinate(self.get(LATITUDE_FIELD))?;
        let longitude = coordinate(self.get(LONGITUDE_FIELD))?;
        Some(GeoPoint::new(latitude, longitude))
    }
}

impl FromIterator<(String, Value)> for Record {
    fn from_iter<T: IntoIterator<Item = (String, Value)>>(iter: T) -> Self {
        Record::new(iter.into_iter().collect())
    }
}

fn coordinate(value: Option<&Value>) -> Option<f64> {
    value?.as_f64().filter(|v| v.is_finite())
}
