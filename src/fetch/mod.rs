// src/fetch/mod.rs

use reqwest::blocking::Client;
use reqwest::header::USER_AGENT;
use tracing::{info, warn};

use crate::error::{Error, Result};

fn fetch_err(url: &str, source: reqwest::Error) -> Error {
    Error::Fetch {
        url: url.to_string(),
        source: source.into(),
    }
}

/// Blocking GET returning the decoded text body. A non-2xx status is a
/// failure. No retry and no fallback here; candidate fallback lives in
/// `first_success`.
pub fn text(client: &Client, url: &str, user_agent: &str) -> Result<String> {
    info!(%url, "downloading");
    let resp = client
        .get(url)
        .header(USER_AGENT, user_agent)
        .send()
        .map_err(|e| fetch_err(url, e))?
        .error_for_status()
        .map_err(|e| fetch_err(url, e))?;
    resp.text().map_err(|e| fetch_err(url, e))
}

/// Ordered-fallback combinator: run `attempt` over `sources` in order and
/// return the first success. If every attempt fails, every cause is
/// aggregated into `AllSourcesFailed`.
pub fn first_success<S, T, F>(sources: impl IntoIterator<Item = S>, mut attempt: F) -> Result<T>
where
    F: FnMut(S) -> Result<T>,
{
    let mut causes = Vec::new();
    for source in sources {
        match attempt(source) {
            Ok(value) => return Ok(value),
            Err(err) => {
                warn!(%err, "source failed, trying next candidate");
                causes.push(err);
            }
        }
    }
    Err(Error::AllSourcesFailed { causes })
}

/// Download from the first candidate URL that answers. Returns the winning
/// URL together with its payload.
pub fn text_from_any(
    client: &Client,
    urls: &[String],
    user_agent: &str,
) -> Result<(String, String)> {
    first_success(urls, |url| {
        let body = text(client, url, user_agent)?;
        Ok((url.clone(), body))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_success_stops_at_the_first_working_source() {
        let mut attempts = Vec::new();
        let result = first_success(["one", "two", "three", "four"], |source| {
            attempts.push(source);
            if source == "three" {
                Ok(format!("payload from {source}"))
            } else {
                Err(Error::Fetch {
                    url: source.to_string(),
                    source: "simulated timeout".into(),
                })
            }
        });

        assert_eq!(result.unwrap(), "payload from three");
        // the fourth candidate is never tried
        assert_eq!(attempts, vec!["one", "two", "three"]);
    }

    #[test]
    fn exhausted_sources_aggregate_every_cause() {
        let result: Result<String> = first_success(["a", "b"], |source| {
            Err(Error::Fetch {
                url: format!("https://example.com/{source}.csv"),
                source: "connection refused".into(),
            })
        });

        match result {
            Err(Error::AllSourcesFailed { causes }) => {
                assert_eq!(causes.len(), 2);
                let msg = Error::AllSourcesFailed { causes }.to_string();
                assert!(msg.contains("https://example.com/a.csv"));
                assert!(msg.contains("https://example.com/b.csv"));
            }
            other => panic!("expected AllSourcesFailed, got {other:?}"),
        }
    }

    #[test]
    fn no_sources_at_all_still_fails_cleanly() {
        let result: Result<String> =
            first_success(Vec::<String>::new(), |_| unreachable!("no sources to try"));
        assert!(matches!(
            result,
            Err(Error::AllSourcesFailed { causes }) if causes.is_empty()
        ));
    }
}
