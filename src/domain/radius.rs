use std::fmt::Display;
use std::str::FromStr;
use thiserror::Error;

/// A strictly positive proximity radius in meters.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Radius(f64);

impl Radius {
    pub const DEFAULT_METERS: f64 = 100.0;

    pub fn new(meters: f64) -> Result<Self, RadiusError> {
        if !meters.is_finite() || meters <= 0.0 {
            return Err(RadiusError::NotPositive(meters));
        }
        Ok(Radius(meters))
    }

    pub fn meters(&self) -> f64 {
        self.0
    }
}

impl Default for Radius {
    fn default() -> Self {
        Radius(Self::DEFAULT_METERS)
    }
}

impl FromStr for Radius {
    type Err = RadiusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let meters = s.trim().parse::<f64>().map_err(|_| RadiusError::Invalid(s.to_string()))?;
        Radius::new(meters)
    }
}

impl Display for Radius {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} m", self.0)
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum RadiusError {
    #[error("radius must be a positive number of meters, got {0}")]
    NotPositive(f64),
    #[error("invalid radius '{0}'")]
    Invalid(String),
}
