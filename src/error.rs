use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

/// Everything the download-filter-persist pipelines and the chart loaders
/// can fail with. Binaries print these and exit non-zero; nothing is caught
/// and suppressed apart from the per-row unparseable-year skip in the
/// filter.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Transport failure (DNS, timeout, non-2xx status) for a single URL.
    #[error("failed to fetch {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Every candidate URL was tried and failed. Carries each cause so the
    /// operator can see all of them at once.
    #[error("all candidate sources failed:{}", format_causes(.causes))]
    AllSourcesFailed { causes: Vec<Error> },

    #[error("could not parse tabular data: {0}")]
    Parse(#[from] csv::Error),

    /// The fetch worked but the entity/year filters matched nothing.
    #[error("no rows matched the entity and year filters")]
    NoMatchingRows,

    #[error("input file not found: {}", .path.display())]
    MissingInput { path: PathBuf },

    /// An expected entity or metric column is absent from the loaded table.
    #[error("column {column:?} is not present in the table")]
    SchemaMismatch { column: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

fn format_causes(causes: &[Error]) -> String {
    causes.iter().map(|c| format!("\n  - {c}")).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_sources_failed_lists_every_cause() {
        let err = Error::AllSourcesFailed {
            causes: vec![
                Error::Fetch {
                    url: "https://example.com/a.csv".into(),
                    source: "connection refused".into(),
                },
                Error::Fetch {
                    url: "https://example.com/b.csv".into(),
                    source: "404 Not Found".into(),
                },
            ],
        };
        let msg = err.to_string();
        assert!(msg.contains("https://example.com/a.csv"));
        assert!(msg.contains("https://example.com/b.csv"));
        assert!(msg.contains("404 Not Found"));
    }
}
