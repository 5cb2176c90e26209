use anyhow::Result;
use clap::Parser;
use owidscraper::{config, pipeline, Error};
use reqwest::blocking::Client;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Download OWID minimum wage data, keep France and the UK for 2000-2024, and save as CSV"
)]
struct Args {
    /// Output CSV path (defaults to data/minimum_wage_FR_UK_2000_2024.csv)
    output: Option<PathBuf>,
}

fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let mut cfg = config::minimum_wage();
    if let Some(output) = args.output {
        cfg.output = output;
    }

    let client = Client::new();
    match pipeline::run(&client, &cfg) {
        Ok(path) => {
            info!(path = %path.display(), "done");
            Ok(ExitCode::SUCCESS)
        }
        Err(err @ Error::AllSourcesFailed { .. }) => {
            eprintln!("{err}");
            eprintln!();
            eprintln!("You may need to obtain minimum wage data manually.");
            eprintln!(
                "Alternative: create {} with columns:",
                cfg.output.display()
            );
            eprintln!("  Entity, Code, Year, {}", config::WAGE_COLUMN);
            eprintln!("or run `seed_minimum_wage` to write the built-in approximate table.");
            Ok(ExitCode::FAILURE)
        }
        Err(err) => Err(err.into()),
    }
}
