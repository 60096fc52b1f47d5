//! Command-line arguments for the terminal client.
use std::path::PathBuf;

use clap::Parser;

/// Default remote endpoint, as bundled in the original application.
pub const DEFAULT_URL: &str = "https://type.fit/api/quotes";

/// Daily Quotes — terminal client.
#[derive(Debug, Parser)]
#[command(version, about)]
pub struct Args {
    /// Path to the bundled JSON dataset.
    #[arg(long, default_value = "quotes.json")]
    pub dataset: PathBuf,

    /// Remote endpoint returning a JSON array of quote records.
    #[arg(long, default_value = DEFAULT_URL)]
    pub url: String,

    /// Fetch the first quote from the remote endpoint instead of the dataset.
    #[arg(long)]
    pub remote: bool,

    /// Print a single quote and exit.
    #[arg(long)]
    pub once: bool,
}
