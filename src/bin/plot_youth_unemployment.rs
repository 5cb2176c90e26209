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
    about = "Render the interactive youth unemployment chart (France vs UK) as HTML"
)]
struct Args {
    /// Input CSV path (defaults to data/youth_unemployment_15_24_FR_UK_2000_2024.csv)
    input: Option<PathBuf>,
    /// Output HTML path
    #[arg(long, default_value = "outputs/youth_unemployment_plot.html")]
    output: PathBuf,
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
    let path = plot::interactive::youth_unemployment(&table, &args.output)?;

    println!(
        "Open {} in your web browser to view the interactive graph.",
        path.display()
    );
    Ok(())
}
