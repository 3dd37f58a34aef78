use crate::domain::Radius;
use serde::de::Error;
use serde::{Deserialize, Deserializer};

impl<'de> Deserialize<'de> for Radius {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let meters = f64::deserialize(deserializer)?;
        Radius::new(meters).map_err(Error::custom)
    }
}
