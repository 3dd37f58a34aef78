use crate::app_config::AppConfig;
use crate::cli::Command;
use crate::domain::{Radius, member};
use crate::loader::{LoaderError, load_motions, load_records};
use crate::proximity::filter;
use crate::report::{ReportError, member_report};
use crate::request::{GeometryRequestError, parse_geometry_request};
use config::ConfigError;
use serde_json::{Value, json};
use thiserror::Error;
use tracing::{info, instrument};

/// Runs `command` and returns its result as a JSON document.
#[instrument(skip(config))]
pub async fn run(command: Command, config: &AppConfig) -> Result<Value, CommandError> {
    match command {
        Command::Arrests { geo, radius } => arrests(geo.as_deref(), radius.unwrap_or(config.query().radius()), config).await,
        Command::People { name } => people(&name, config).await,
        Command::Members => Ok(serde_json::to_value(member::roster())?),
    }
}

async fn arrests(geo: Option<&str>, radius: Radius, config: &AppConfig) -> Result<Value, CommandError> {
    // Reject a bad request before touching the dataset
    let geometry = geo.map(parse_geometry_request).transpose()?;
    let records = load_records(config.data().records_file()).await?;

    let Some(geometry) = geometry else {
        info!("🔎 Returning all {} record(s)", records.len());
        return Ok(serde_json::to_value(&records)?);
    };

    let matches = filter(&records, &geometry, radius.meters());
    info!("🔎 {} of {} record(s) within {}", matches.len(), records.len(), radius);
    Ok(serde_json::to_value(&matches)?)
}

async fn people(name: &str, config: &AppConfig) -> Result<Value, CommandError> {
    if member::find(name).is_none() {
        return Err(ReportError::UnknownMember(name.to_string()).into());
    }

    let (records, motions) = tokio::try_join!(
        load_records(config.data().records_file()),
        load_motions(config.data().motions_file())
    )?;

    let report = member_report(name, &records, &motions)?;
    Ok(serde_json::to_value(&report)?)
}

#[derive(Error, Debug)]
pub enum CommandError {
    #[error("failed to load configuration: {0}")]
    Config(#[from] ConfigError),
    #[error(transparent)]
    GeometryRequest(#[from] GeometryRequestError),
    #[error(transparent)]
    Report(#[from] ReportError),
    #[error(transparent)]
    Loader(#[from] LoaderError),
    #[error("failed to serialize the result: {0}")]
    Output(#[from] serde_json::Error),
}

impl CommandError {
    /// Whether the caller asked for something invalid, as opposed to the service failing.
    pub fn is_client_error(&self) -> bool {
        matches!(self, CommandError::GeometryRequest(_) | CommandError::Report(_))
    }

    pub fn exit_code(&self) -> i32 {
        if self.is_client_error() { 2 } else { 1 }
    }

    /// The error as reported to the caller, e.g. `{"error": "..."}`.
    pub fn to_document(&self) -> Value {
        json!({ "error": self.to_string() })
    }
}
