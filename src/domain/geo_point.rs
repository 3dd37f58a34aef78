use serde::Serialize;

/// A WGS84 position in decimal degrees.
#[derive(Clone, Copy, Default, Debug, PartialEq, Serialize)]
pub struct GeoPoint {
    #[serde(rename = "lat")]
    pub latitude: f64,
    #[serde(rename = "lng")]
    pub longitude: f64,
}

impl GeoPoint {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        GeoPoint { latitude, longitude }
    }

    /// Linear interpolation in degrees, `t` = 0 yields `self` and `t` = 1 yields `other`.
    pub fn lerp(&self, other: &GeoPoint, t: f64) -> GeoPoint {
        GeoPoint {
            latitude: self.latitude + t * (other.latitude - self.latitude),
            longitude: self.longitude + t * (other.longitude - self.longitude),
        }
    }
}
