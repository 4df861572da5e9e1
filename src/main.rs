use anyhow::Result;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

mod cli;
mod config;
mod dataset;

use cli::Cli;

fn init_tracing(default_level: &str) {
    // RUST_LOG wins over the configured level.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "dashboard={0},model={0},compute={0},common={0}",
            default_level
        ))
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let settings = config::load_settings(cli.config.as_deref())?;
    init_tracing(&settings.log_level);
    debug!("Effective settings: {:?}", settings);

    cli.run(&settings)
}
