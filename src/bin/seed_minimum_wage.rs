//! Writes the built-in approximate minimum wage table (USD, PPP-adjusted
//! provenance) for France and the United Kingdom, 2000-2024. An escape hatch
//! for when every remote candidate source fails; verify against official
//! sources before publishing anything derived from it.

use anyhow::Result;
use clap::Parser;
use owidscraper::{config, process::Dataset};
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

const START_YEAR: i32 = 2000;

#[rustfmt::skip]
const FRANCE_USD: [f64; 25] = [
    6.41, 6.67, 6.83, 7.19, 7.61,
    7.95, 8.27, 8.44, 8.71, 9.00,
    9.22, 9.40, 9.43, 9.53, 9.61,
    9.67, 9.76, 9.88, 10.03, 10.15,
    10.25, 10.48, 10.57, 11.27, 11.65,
];

#[rustfmt::skip]
const UK_USD: [f64; 25] = [
    4.70, 4.85, 4.85, 4.85, 5.05,
    5.35, 5.52, 5.73, 5.73, 5.80,
    5.93, 6.08, 6.19, 6.31, 6.50,
    6.70, 7.20, 7.50, 7.83, 8.21,
    8.72, 8.91, 9.50, 10.42, 11.44,
];

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Write the built-in approximate FR/UK minimum wage table as CSV"
)]
struct Args {
    /// Output CSV path (defaults to data/minimum_wage_FR_UK_2000_2024.csv)
    output: Option<PathBuf>,
}

fn seed_dataset() -> Dataset {
    let columns = vec![
        "Entity".to_string(),
        "Code".to_string(),
        "Year".to_string(),
        config::WAGE_COLUMN.to_string(),
    ];

    let mut rows = Vec::with_capacity(FRANCE_USD.len() + UK_USD.len());
    for (entity, code, values) in [
        ("France", "FRA", &FRANCE_USD),
        ("United Kingdom", "GBR", &UK_USD),
    ] {
        for (offset, value) in values.iter().enumerate() {
            rows.push(vec![
                entity.to_string(),
                code.to_string(),
                (START_YEAR + offset as i32).to_string(),
                format!("{value:.2}"),
            ]);
        }
    }
    Dataset::new(columns, rows)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let output = args
        .output
        .unwrap_or_else(|| PathBuf::from("data/minimum_wage_FR_UK_2000_2024.csv"));

    seed_dataset().write_to(&output)?;
    info!(path = %output.display(), "wrote seed minimum wage table");
    warn!("these are approximate values; verify against official sources");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_table_covers_both_countries_for_every_year() {
        let ds = seed_dataset();
        assert_eq!(ds.len(), 50);
        assert_eq!(
            ds.columns(),
            &["Entity", "Code", "Year", "Minimum wage (USD)"]
        );

        let france: Vec<_> = ds.rows().iter().filter(|r| r[0] == "France").collect();
        assert_eq!(france.len(), 25);
        assert_eq!(france[0][2], "2000");
        assert_eq!(france[24][2], "2024");
        assert_eq!(france[24][3], "11.65");

        let uk: Vec<_> = ds
            .rows()
            .iter()
            .filter(|r| r[0] == "United Kingdom")
            .collect();
        assert_eq!(uk[0][3], "4.70");
        assert_eq!(uk[24][3], "11.44");
    }
}
