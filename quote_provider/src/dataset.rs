//! Bundled dataset parsing.
//!
//! A dataset is a JSON array of `QuoteRecord` values shipped with the
//! application. It is read once per local fetch and treated as read-only.
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::error::FetchError;
use crate::quote::QuoteRecord;

/// Trait providing dataset parsing for quote records.
pub trait DatasetParser: Sized {
    /// Parses a JSON array of records from a reader.
    ///
    /// Returns a `FetchError::Decode` when the content is not a JSON array of
    /// the expected record shape.
    fn parse_from_reader<R: Read>(reader: R) -> Result<Vec<Self>, FetchError>;

    /// Opens `path` and parses its content as a JSON array of records.
    fn parse_from_path(path: &Path) -> Result<Vec<Self>, FetchError>;
}

impl DatasetParser for QuoteRecord {
    fn parse_from_reader<R: Read>(reader: R) -> Result<Vec<Self>, FetchError> {
        serde_json::from_reader(reader).map_err(|e| FetchError::Decode(e.to_string()))
    }

    fn parse_from_path(path: &Path) -> Result<Vec<Self>, FetchError> {
        let file = File::open(path)?;
        Self::parse_from_reader(BufReader::new(file))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_record_array() {
        let json = r#"[{"text":"One","author":"A"},{"text":"Two"}]"#;
        let records = QuoteRecord::parse_from_reader(json.as_bytes()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].text, "One");
        assert_eq!(records[1].author, None);
    }

    #[test]
    fn empty_array_is_valid() {
        let records = QuoteRecord::parse_from_reader("[]".as_bytes()).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn malformed_body_is_a_decode_error() {
        let err = QuoteRecord::parse_from_reader("{\"not\":\"an array\"}".as_bytes())
            .unwrap_err();
        assert!(matches!(err, FetchError::Decode(_)));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = QuoteRecord::parse_from_path(Path::new("/no/such/quotes.json"))
            .unwrap_err();
        assert!(matches!(err, FetchError::Io(_)));
    }
}
