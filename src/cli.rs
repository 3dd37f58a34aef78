use crate::domain::Radius;
use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "zonewatch", version)]
#[command(about = "Query arrest records near a point or path and report on council members", long_about = None)]
pub struct Cli {
    /// Base name of the configuration file, without extension
    #[arg(long, default_value = "config")]
    pub config: String,

    /// Log at debug level
    #[arg(short, long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print arrest records, optionally only those near a point or path
    Arrests {
        /// JSON list of {"lat": .., "lng": ..}; one point or an ordered path
        #[arg(long)]
        geo: Option<String>,

        /// Proximity radius in meters, overrides the configured radius
        #[arg(long)]
        radius: Option<Radius>,
    },
    /// Print the report for a council member
    People {
        /// Member name, case insensitive
        name: String,
    },
    /// Print the council member roster
    Members,
}
