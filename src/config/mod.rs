pub mod cli;
pub mod demo;
pub mod toml_config;

use crate::utils::error::Result;
use crate::utils::validation::Validate;

#[cfg(feature = "cli")]
use crate::report::ReportFormat;
#[cfg(feature = "cli")]
use crate::utils::validation::validate_path;
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

/// Detail report target when neither the command line nor the package file names one.
pub const DEFAULT_PASSENGER_NUMBER: u32 = 1;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "travel-booking")]
#[command(about = "Builds a travel package and prints its itinerary, roster and availability")]
pub struct CliConfig {
    /// TOML package file; the built-in demo package is used when omitted
    #[arg(short, long)]
    pub config: Option<String>,

    /// Passenger number for the detail report
    #[arg(short, long)]
    pub passenger: Option<u32>,

    #[arg(long, value_enum)]
    pub format: Option<ReportFormat>,

    /// Write one file per report here instead of printing to stdout
    #[arg(long)]
    pub output_path: Option<String>,

    /// Only charge passengers once the activity seat is secured
    #[arg(long)]
    pub capacity_first: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub log_json: bool,
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(config) = &self.config {
            validate_path("config", config)?;
        }
        if let Some(output_path) = &self.output_path {
            validate_path("output_path", output_path)?;
        }
        Ok(())
    }
}

/// Runs `validate` on anything implementing [`Validate`], logging the failure.
pub fn check<V: Validate>(label: &str, value: &V) -> Result<()> {
    value.validate().inspect_err(|e| {
        tracing::error!("❌ {} validation failed: {}", label, e);
    })
}
