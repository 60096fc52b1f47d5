//! Background fetch workers.
//!
//! Each user-triggered fetch runs on its own thread and reports back over a
//! channel. The main loop applies results in completion order, so the last
//! fetch to complete wins and nothing is cancelled.
use std::thread;

use crossbeam_channel::Sender;
use log::debug;
use quote_provider::{FetchError, Quote, QuoteSource, fetch_quote};

/// Spawns a thread that resolves one quote from `source` and sends the
/// outcome to `results_tx`.
///
/// The send only fails when the main loop has already shut down; the result
/// is then discarded, matching the no-cancellation policy.
pub fn spawn_fetch(source: QuoteSource, results_tx: Sender<Result<Quote, FetchError>>) {
    thread::spawn(move || {
        debug!("Fetching a quote from {:?}", source);
        let outcome = fetch_quote(&source);
        if results_tx.send(outcome).is_err() {
            debug!("Fetch finished after shutdown, result discarded");
        }
    });
}
