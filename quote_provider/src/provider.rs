//! Quote acquisition: fetch, decode, validate, select, fall back.
//!
//! Both source kinds funnel into the same selection and cleaning step
//! ([`fetch_from_dataset`]), so the bundled and remote paths cannot drift
//! apart. The remote fetch is a single request with a fixed timeout; retry
//! policy, if any, belongs to the caller.
use std::path::PathBuf;
use std::time::Duration;

use log::{debug, warn};
use rand::Rng;
use reqwest::Url;
use reqwest::blocking::Client;

use crate::dataset::DatasetParser;
use crate::error::FetchError;
use crate::quote::{Quote, QuoteRecord};
use crate::result::Result;

/// Timeout applied to the single remote request.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Where to obtain quote records from.
#[derive(Debug, Clone)]
pub enum QuoteSource {
    /// JSON dataset bundled with the application.
    Bundled(PathBuf),
    /// Remote HTTP endpoint returning a JSON array of records.
    Remote(String),
}

/// Picks one record uniformly at random and cleans it.
///
/// Never fails: an empty dataset degrades to the fixed fallback quote rather
/// than an error, so the caller always has something to display.
pub fn fetch_from_dataset(records: &[QuoteRecord]) -> Quote {
    if records.is_empty() {
        debug!("Dataset is empty, using the fallback quote");
        return Quote::fallback();
    }
    let mut rng = rand::rng();
    let index = rng.random_range(0..records.len());
    Quote::from_record(&records[index])
}

/// Issues a single GET to `endpoint` and derives a quote from the response.
///
/// Blocks until the request completes or times out. Every failure mode comes
/// back as a typed [`FetchError`]; the caller decides whether to substitute
/// the fallback quote. A well-formed empty response array is not a failure
/// and yields the same fallback as an empty bundled dataset.
pub fn fetch_from_remote(endpoint: &str) -> Result<Quote> {
    let url = Url::parse(endpoint).map_err(|e| FetchError::InvalidUrl(e.to_string()))?;
    let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
    let response = client.get(url).send()?;
    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status(status.as_u16()));
    }
    let body = response.text()?;
    let records: Vec<QuoteRecord> =
        serde_json::from_str(&body).map_err(|e| FetchError::Decode(e.to_string()))?;
    debug!("Remote endpoint returned {} records", records.len());
    Ok(fetch_from_dataset(&records))
}

/// Resolves a new quote from `source`.
///
/// The bundled path never fails: read or decode problems are logged and
/// absorbed into the fallback quote so the display stays populated. The
/// remote path surfaces its `FetchError` and leaves the substitution to the
/// caller.
pub fn fetch_quote(source: &QuoteSource) -> Result<Quote> {
    match source {
        QuoteSource::Bundled(path) => match QuoteRecord::parse_from_path(path) {
            Ok(records) => Ok(fetch_from_dataset(&records)),
            Err(e) => {
                warn!("Could not read bundled dataset {}: {}", path.display(), e);
                Ok(Quote::fallback())
            }
        },
        QuoteSource::Remote(endpoint) => fetch_from_remote(endpoint),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quote::{FALLBACK_TEXT, UNKNOWN_AUTHOR};

    fn record(text: &str, author: Option<&str>) -> QuoteRecord {
        QuoteRecord {
            text: text.to_string(),
            author: author.map(str::to_string),
        }
    }

    #[test]
    fn empty_dataset_returns_the_exact_fallback() {
        assert_eq!(fetch_from_dataset(&[]), Quote::fallback());
    }

    #[test]
    fn selection_is_drawn_from_the_input_set() {
        let records = vec![
            record("One", Some("A")),
            record("Two", Some("B")),
            record("Three", Some("C")),
        ];
        for _ in 0..100 {
            let quote = fetch_from_dataset(&records);
            assert!(
                records
                    .iter()
                    .any(|r| r.text == quote.text
                        && r.author.as_deref() == Some(quote.author.as_str()))
            );
        }
    }

    #[test]
    fn single_record_is_trimmed() {
        let quote = fetch_from_dataset(&[record(" Hello ", Some(" Bob "))]);
        assert_eq!(quote.text, "Hello");
        assert_eq!(quote.author, "Bob");
    }

    #[test]
    fn blank_text_falls_back_but_author_survives() {
        let quote = fetch_from_dataset(&[record("", Some("Bob"))]);
        assert_eq!(quote.text, FALLBACK_TEXT);
        assert_eq!(quote.author, "Bob");
    }

    #[test]
    fn missing_author_becomes_unknown() {
        let quote = fetch_from_dataset(&[record("Hi", None)]);
        assert_eq!(quote.text, "Hi");
        assert_eq!(quote.author, UNKNOWN_AUTHOR);
    }

    #[test]
    fn unreadable_bundled_dataset_resolves_to_fallback() {
        let source = QuoteSource::Bundled(PathBuf::from("/no/such/quotes.json"));
        let quote = fetch_quote(&source).unwrap();
        assert_eq!(quote, Quote::fallback());
    }

    #[test]
    fn malformed_endpoint_is_an_invalid_url_error() {
        let err = fetch_from_remote("not a url").unwrap_err();
        assert!(matches!(err, FetchError::InvalidUrl(_)));
    }
}
