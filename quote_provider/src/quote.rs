//! Quote data model and cleaning rules.
//!
//! `QuoteRecord` is the raw shape found in the bundled dataset and in remote
//! response bodies; `Quote` is the cleaned, display-ready pair derived from
//! it. A `Quote` is only ever built through the cleaning rules or as one of
//! the two fixed quotes (welcome and fallback), so its fields are never empty.
use serde::{Deserialize, Serialize};

/// Text shown when no valid quote data is available.
pub const FALLBACK_TEXT: &str = "Every moment is a fresh beginning.";
/// Author of the fixed fallback quote.
pub const FALLBACK_AUTHOR: &str = "T.S. Eliot";
/// Author substituted when a record carries no usable author.
pub const UNKNOWN_AUTHOR: &str = "Unknown";

/// Raw quote record as found in a dataset or a remote response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteRecord {
    /// Quote body. Required by the wire shape, but may still be blank.
    pub text: String,
    /// Optional author; absent or `null` in many datasets.
    #[serde(default)]
    pub author: Option<String>,
}

/// Cleaned, display-ready quote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quote {
    /// Quote body, trimmed, never empty.
    pub text: String,
    /// Author name, trimmed, never empty (`Unknown` when the record had none).
    pub author: String,
}

impl Quote {
    /// Builds a `Quote` from a raw record, applying the cleaning rules.
    ///
    /// Leading and trailing whitespace is trimmed from both fields. A blank
    /// text is replaced by [`FALLBACK_TEXT`]; a missing or blank author by
    /// [`UNKNOWN_AUTHOR`]. The two substitutions are independent, so a record
    /// with a blank text keeps its author.
    pub fn from_record(record: &QuoteRecord) -> Self {
        let text = record.text.trim();
        let author = record.author.as_deref().unwrap_or("").trim();
        Quote {
            text: if text.is_empty() {
                String::from(FALLBACK_TEXT)
            } else {
                String::from(text)
            },
            author: if author.is_empty() {
                String::from(UNKNOWN_AUTHOR)
            } else {
                String::from(author)
            },
        }
    }

    /// The fixed fallback quote shown when no valid data is available.
    pub fn fallback() -> Self {
        Quote {
            text: String::from(FALLBACK_TEXT),
            author: String::from(FALLBACK_AUTHOR),
        }
    }

    /// The quote displayed before the first fetch completes.
    pub fn welcome() -> Self {
        Quote {
            text: String::from("Welcome to Daily Quotes!"),
            author: String::from("Get inspired daily"),
        }
    }
}
