//!
//! Core quote-acquisition library for the Daily Quotes workspace.
//!
//! This crate aggregates:
//! - `quote` — cleaned `Quote` values and raw `QuoteRecord`s.
//! - `dataset` — parsing of bundled JSON datasets.
//! - `provider` — fetch/decode/validate/select/fallback logic for both sources.
//! - `board` — the observable current-quote state shared with the UI.
//! - `error` — typed fetch failures.
//! - `result` — handy `Result<T, FetchError>` alias.
#![warn(missing_docs)]
pub mod board;
pub mod dataset;
pub mod error;
pub mod provider;
pub mod quote;
pub mod result;

pub use board::{BoardSnapshot, QuoteBoard};
pub use error::FetchError;
pub use provider::{QuoteSource, fetch_from_dataset, fetch_from_remote, fetch_quote};
pub use quote::{Quote, QuoteRecord};
pub use result::Result;
