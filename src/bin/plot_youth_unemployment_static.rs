use anyhow::Result;
use clap::Parser;
use owidscraper::{
    config, plot,
    process::{pivot, Dataset},
};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Render the print-friendly youth unemployment chart (France vs UK) as PNG + SVG"
)]
struct Args {
    /// Input CSV path (defaults to data/youth_unemployment_15_24_FR_UK_2000_2024.csv)
    input: Option<PathBuf>,
    /// Output directory for the chart files
    #[arg(long, default_value = "outputs")]
    out_dir: PathBuf,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let input = args
        .input
        .unwrap_or_else(|| PathBuf::from("data/youth_unemployment_15_24_FR_UK_2000_2024.csv"));

    let dataset = Dataset::read_from(&input)?;
    let table = pivot(&dataset, config::UNEMPLOYMENT_COLUMN)?;

    let saved = plot::line::render(
        &table,
        &["France", "United Kingdom"],
        "Youth Unemployment Rate (Ages 15\u{2013}24), France vs United Kingdom, 2000\u{2013}2024",
        "Youth unemployment rate (15\u{2013}24), %",
        &args.out_dir,
        "fig_youth_unemployment_FR_UK",
    )?;
    for path in saved {
        println!("Saved: {}", path.display());
    }
    Ok(())
}
