//! Error types for quote acquisition.
//!
//! The `FetchError` enum unifies the failure modes of the remote fetch path
//! (bad URL, transport failure, unexpected status, undecodable body) plus the
//! I/O and decode cases the bundled path can hit while reading a dataset.
//! An empty dataset is deliberately not an error: it degrades to the fixed
//! fallback quote on every path.
use std::io;

use thiserror::Error;

/// Typed failure of a quote fetch.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The endpoint string could not be parsed as a URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Transport-level failure while talking to the remote endpoint.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The remote endpoint answered with a non-success status code.
    #[error("Unexpected HTTP status: {0}")]
    Status(u16),

    /// The response body or dataset did not match the expected record shape.
    #[error("Decode error: {0}")]
    Decode(String),

    /// I/O error while reading a bundled dataset.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}
