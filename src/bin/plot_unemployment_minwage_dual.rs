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
    about = "Render per-country dual-axis charts: youth unemployment level vs minimum wage annual % change"
)]
struct Args {
    /// Youth unemployment CSV path
    #[arg(long, default_value = "data/youth_unemployment_15_24_FR_UK_2000_2024.csv")]
    unemployment: PathBuf,
    /// Minimum wage CSV path
    #[arg(long, default_value = "data/minimum_wage_FR_UK_2000_2024.csv")]
    minimum_wage: PathBuf,
    /// Name of the wage metric column in the minimum wage CSV
    #[arg(long, default_value = config::WAGE_COLUMN)]
    wage_column: String,
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

    let unemployment = Dataset::read_from(&args.unemployment)?;
    let minimum_wage = Dataset::read_from(&args.minimum_wage)?;

    let unemployment = pivot(&unemployment, config::UNEMPLOYMENT_COLUMN)?;
    let wage_change = pivot(&minimum_wage, &args.wage_column)?.pct_change();

    for (entity, code) in [("France", "FR"), ("United Kingdom", "UK")] {
        let saved = plot::dual::render(
            &unemployment,
            &wage_change,
            entity,
            &args.out_dir,
            &format!("fig_unemployment_minwage_{code}"),
        )?;
        for path in saved {
            println!("Saved: {}", path.display());
        }
    }
    Ok(())
}
