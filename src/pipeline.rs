//! The download-filter-and-persist pipeline shared by the data-fetch
//! binaries: try the configured candidate URLs in order, keep allow-listed
//! entities inside the year range, and overwrite the output CSV.

use std::path::PathBuf;

use reqwest::blocking::Client;
use tracing::info;
use url::Url;

use crate::config::SourceConfig;
use crate::error::Result;
use crate::fetch;
use crate::process::{Dataset, RowFilter};

/// Run one configured source end to end. Filtering happens before the write,
/// so on `NoMatchingRows` the output path is left untouched.
pub fn run(client: &Client, config: &SourceConfig) -> Result<PathBuf> {
    let (url, body) = fetch::text_from_any(client, &config.urls, &config.user_agent)?;
    info!(
        source = %source_name(&url),
        bytes = body.len(),
        "downloaded payload"
    );
    filter_and_write(&body, config)
}

/// The non-network tail of the pipeline: parse, filter, persist.
pub fn filter_and_write(body: &str, config: &SourceConfig) -> Result<PathBuf> {
    let dataset = Dataset::parse(body)?;
    let filter = RowFilter::new(config.entities.iter().cloned(), config.years.clone());
    let filtered = filter.apply(&dataset)?;
    info!(rows = filtered.len(), "rows kept after filtering");

    filtered.write_to(&config.output)?;
    info!(path = %config.output.display(), "wrote dataset");
    Ok(config.output.clone())
}

/// Short display name for a source URL, e.g. the grapher slug.
fn source_name(url: &str) -> String {
    match Url::parse(url) {
        Ok(parsed) => parsed
            .path_segments()
            .and_then(|mut segments| segments.next_back())
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| url.to_string()),
        Err(_) => url.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::fs;
    use tempfile::tempdir;

    const PAYLOAD: &str = "\
Entity,Code,Year,\"Unemployment rate, ages 15-24\"
France,FRA,1999,25.0
France,FRA,2000,18.6
Germany,DEU,2000,8.4
United Kingdom,GBR,2024,12.9
United Kingdom,GBR,2025,11.0
";

    fn config(output: PathBuf) -> SourceConfig {
        SourceConfig {
            urls: vec!["https://ourworldindata.org/grapher/test.csv".into()],
            user_agent: "test-agent".into(),
            entities: vec!["France".into(), "United Kingdom".into()],
            years: 2000..=2024,
            output,
        }
    }

    #[test]
    fn filter_and_write_persists_only_matching_rows() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("data").join("out.csv");
        let written = filter_and_write(PAYLOAD, &config(out.clone())).unwrap();
        assert_eq!(written, out);

        let back = Dataset::read_from(&out).unwrap();
        assert_eq!(back.len(), 2);
        assert_eq!(back.rows()[0][2], "2000");
        assert_eq!(back.rows()[1][2], "2024");
        assert_eq!(
            back.columns(),
            &["Entity", "Code", "Year", "Unemployment rate, ages 15-24"]
        );
    }

    #[test]
    fn no_matching_rows_leaves_no_file_behind() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("out.csv");
        let mut cfg = config(out.clone());
        cfg.entities = vec!["Spain".into()];

        assert!(matches!(
            filter_and_write(PAYLOAD, &cfg),
            Err(Error::NoMatchingRows)
        ));
        assert!(!out.exists());
    }

    #[test]
    fn no_matching_rows_does_not_clobber_an_existing_file() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("out.csv");
        fs::write(&out, "Entity,Code,Year\nkept,KPT,2001\n").unwrap();

        let mut cfg = config(out.clone());
        cfg.years = 1800..=1850;
        assert!(filter_and_write(PAYLOAD, &cfg).is_err());

        let untouched = fs::read_to_string(&out).unwrap();
        assert!(untouched.contains("kept"));
    }

    #[test]
    fn source_name_is_the_grapher_slug() {
        assert_eq!(
            source_name("https://ourworldindata.org/grapher/minimum-wage.csv"),
            "minimum-wage.csv"
        );
        assert_eq!(source_name("not a url"), "not a url");
    }
}
