use anyhow::Result;
use clap::Parser;
use owidscraper::{config, pipeline};
use reqwest::blocking::Client;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Download OWID youth unemployment data (ages 15-24), keep France and the UK for 2000-2024, and save as CSV"
)]
struct Args {
    /// Output CSV path (defaults to data/youth_unemployment_15_24_FR_UK_2000_2024.csv)
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let mut cfg = config::youth_unemployment();
    if let Some(output) = args.output {
        cfg.output = output;
    }

    let client = Client::new();
    let path = pipeline::run(&client, &cfg)?;
    info!(path = %path.display(), "done");
    Ok(())
}
