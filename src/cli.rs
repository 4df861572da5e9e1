use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::config::Settings;
use crate::dataset::DatasetFormat;

pub mod commands;

#[derive(Parser)]
#[command(name = "dashboard")]
#[command(about = "Analytics dashboard dataset tooling", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Config file to read instead of the optional dashboard.{toml,yaml,json}
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check a dataset snapshot against the dashboard invariants
    Validate {
        /// Dataset file (.json, .yaml or .yml); the built-in demo data when omitted
        #[arg(short, long, env = "DASHBOARD_DATASET_PATH")]
        dataset: Option<PathBuf>,
    },
    /// Write the built-in demo dataset in the provider's wire format
    Export {
        #[arg(short, long, value_enum, default_value_t = DatasetFormat::Json)]
        format: DatasetFormat,

        /// Output file; stdout when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Print the overview page of a dataset as plain text
    Preview {
        /// Dataset file (.json, .yaml or .yml); the built-in demo data when omitted
        #[arg(short, long, env = "DASHBOARD_DATASET_PATH")]
        dataset: Option<PathBuf>,

        /// ISO 4217 code used for currency KPIs
        #[arg(long, env = "DASHBOARD_CURRENCY")]
        currency: Option<String>,
    },
}

impl Cli {
    pub fn run(self, settings: &Settings) -> Result<()> {
        match self.command {
            Commands::Validate { dataset } => {
                let dataset = dataset.or_else(|| settings.dataset_path.clone());
                commands::validate(dataset.as_deref())
            }
            Commands::Export { format, output } => commands::export(format, output.as_deref()),
            Commands::Preview { dataset, currency } => {
                let dataset = dataset.or_else(|| settings.dataset_path.clone());
                let currency = currency.unwrap_or_else(|| settings.currency.clone());
                commands::preview(dataset.as_deref(), &currency)
            }
        }
    }
}
