//! Explicit configuration for the two shipped data sources. The binaries
//! build one of these, apply CLI overrides, and hand it to `pipeline::run`;
//! tests inject their own values instead of touching live endpoints.

use std::ops::RangeInclusive;
use std::path::PathBuf;

/// OWID's file host returns 403 to requests without a browser-like
/// User-Agent, so every fetch sends one explicitly.
pub const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) \
     AppleWebKit/537.36 (KHTML, like Gecko) \
     Chrome/122.0.0.0 Safari/537.36";

/// Metric column of the youth unemployment grapher export.
pub const UNEMPLOYMENT_COLUMN: &str = "Unemployment rate, ages 15-24";

/// Metric column written by `seed_minimum_wage`; the dual-axis plotter uses
/// it as the default for `--wage-column`.
pub const WAGE_COLUMN: &str = "Minimum wage (USD)";

/// One download-filter-persist run: where to fetch from, what to keep, and
/// where to write.
#[derive(Debug, Clone)]
pub struct SourceConfig {
    /// Candidate URLs, tried in order until one succeeds.
    pub urls: Vec<String>,
    pub user_agent: String,
    /// Entity names the row filter keeps.
    pub entities: Vec<String>,
    /// Inclusive year range the row filter keeps.
    pub years: RangeInclusive<i32>,
    pub output: PathBuf,
}

pub fn youth_unemployment() -> SourceConfig {
    SourceConfig {
        urls: vec![
            "https://ourworldindata.org/grapher/unemployment-rate-for-young-people.csv".to_string(),
        ],
        user_agent: BROWSER_USER_AGENT.to_string(),
        entities: vec!["France".to_string(), "United Kingdom".to_string()],
        years: 2000..=2024,
        output: PathBuf::from("data/youth_unemployment_15_24_FR_UK_2000_2024.csv"),
    }
}

pub fn minimum_wage() -> SourceConfig {
    SourceConfig {
        // The grapher slug for minimum wage data has moved around, so we
        // keep a few candidates and take the first that answers.
        urls: vec![
            "https://ourworldindata.org/grapher/minimum-wage-levels.csv".to_string(),
            "https://ourworldindata.org/grapher/minimum-wage.csv".to_string(),
            "https://ourworldindata.org/grapher/statutory-minimum-wage.csv".to_string(),
        ],
        user_agent: BROWSER_USER_AGENT.to_string(),
        entities: vec!["France".to_string(), "United Kingdom".to_string()],
        years: 2000..=2024,
        output: PathBuf::from("data/minimum_wage_FR_UK_2000_2024.csv"),
    }
}
