use crate::domain::Radius;
use config::{Config, ConfigError};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    data: Data,
    #[serde(default)]
    query: Query,
}

impl AppConfig {
    /// Layers `<name>.toml`, an optional `<name>_local.toml` and `ZONEWATCH__*` environment variables.
    pub fn load(name: &str) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(config::File::with_name(name).required(true))
            .add_source(config::File::with_name(&format!("{}_local", name)).required(false))
            .add_source(config::Environment::with_prefix("ZONEWATCH").prefix_separator("__").separator("__"))
            .build()?
            .try_deserialize()
    }

    pub fn data(&self) -> &Data {
        &self.data
    }

    pub fn query(&self) -> &Query {
        &self.query
    }
}

#[derive(Debug, Deserialize)]
pub struct Data {
    records_file: String,
    motions_file: String,
}

impl Data {
    pub fn records_file(&self) -> &Path {
        Path::new(&self.records_file)
    }

    pub fn motions_file(&self) -> &Path {
        Path::new(&self.motions_file)
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct Query {
    #[serde(default)]
    radius_m: Radius,
}

impl Query {
    pub fn radius(&self) -> Radius {
        self.radius_m
    }
}

#[cfg(test)]
pub struct AppConfigBuilder {
    config: AppConfig,
}

#[cfg(test)]
impl AppConfigBuilder {
    pub fn new() -> Self {
        AppConfigBuilder {
            config: AppConfig {
                data: Data {
                    records_file: "records.csv".to_string(),
                    motions_file: "motions.csv".to_string(),
                },
                query: Query::default(),
            },
        }
    }

    pub fn records_file(mut self, path: &Path) -> Self {
        self.config.data.records_file = path.to_string_lossy().into_owned();
        self
    }

    pub fn motions_file(mut self, path: &Path) -> Self {
        self.config.data.motions_file = path.to_string_lossy().into_owned();
        self
    }

    pub fn radius(mut self, radius: Radius) -> Self {
        self.config.query.radius_m = radius;
        self
    }

    pub fn build(self) -> AppConfig {
        self.config
    }
}
