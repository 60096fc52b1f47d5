//! Daily Quotes development server.
//!
//! Loads the bundled JSON dataset and serves it over HTTP so the client's
//! remote path has a first-party endpoint for demos and tests.
//!
//! Usage example (CLI):
//! ```bash
//! quote_server --port 8080 --dataset ./quotes.json
//! ```
#![warn(missing_docs)]
use std::path::PathBuf;

use clap::Parser;
use log::info;
use quote_provider::QuoteRecord;
use quote_provider::dataset::DatasetParser;
use quote_server::app_router;

/// Development server for the Daily Quotes workspace.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Port to listen on.
    #[arg(long, default_value_t = 8080)]
    port: u16,

    /// Path to the JSON dataset to serve.
    #[arg(long, default_value = "quotes.json")]
    dataset: PathBuf,
}

#[tokio::main]
async fn main() -> quote_provider::Result<()> {
    init_logger();
    let args = Args::parse();

    let records = QuoteRecord::parse_from_path(&args.dataset)?;
    info!(
        "Serving {} quote records from {}",
        records.len(),
        args.dataset.display()
    );

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", args.port)).await?;
    info!("Listening on {}", listener.local_addr()?);
    axum::serve(listener, app_router(records)).await?;
    Ok(())
}

fn init_logger() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();
}
