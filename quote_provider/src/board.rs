//! Observable current-quote state shared with the presentation layer.
//!
//! The board is the single owner of the "current quote" and "is loading"
//! pair. The fetch path is its only writer; the presentation layer observes
//! it through snapshot channels. Every mutation publishes a complete
//! [`BoardSnapshot`], so an observer never sees a partially updated quote.
use crossbeam_channel::{Receiver, Sender, unbounded};
use log::warn;

use crate::error::FetchError;
use crate::quote::Quote;

/// Full-value view of the board published to subscribers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardSnapshot {
    /// Quote currently on display.
    pub quote: Quote,
    /// Whether a fetch is in flight.
    pub is_loading: bool,
}

/// Holds the single current quote and the loading flag.
///
/// Completed fetches are applied in completion order: the last writer wins
/// and nothing is cancelled. A fetch that completes after a newer one was
/// triggered is still applied, then overwritten when the newer one lands.
#[derive(Debug)]
pub struct QuoteBoard {
    current: Quote,
    is_loading: bool,
    subscribers: Vec<Sender<BoardSnapshot>>,
}

impl QuoteBoard {
    /// Creates a board showing the welcome quote, not loading.
    pub fn new() -> Self {
        QuoteBoard {
            current: Quote::welcome(),
            is_loading: false,
            subscribers: Vec::new(),
        }
    }

    /// Registers a subscriber and returns its snapshot channel.
    pub fn subscribe(&mut self) -> Receiver<BoardSnapshot> {
        let (tx, rx) = unbounded();
        self.subscribers.push(tx);
        rx
    }

    /// Marks a fetch as started and publishes the loading state.
    pub fn begin_fetch(&mut self) {
        self.is_loading = true;
        self.publish();
    }

    /// Applies a completed fetch.
    ///
    /// A failure is logged and replaced by the fixed fallback quote, so the
    /// displayed state is never empty and never an error message.
    pub fn finish(&mut self, outcome: Result<Quote, FetchError>) {
        self.current = match outcome {
            Ok(quote) => quote,
            Err(e) => {
                warn!("Quote fetch failed: {}", e);
                Quote::fallback()
            }
        };
        self.is_loading = false;
        self.publish();
    }

    /// Current state as a full-value snapshot.
    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot {
            quote: self.current.clone(),
            is_loading: self.is_loading,
        }
    }

    fn publish(&mut self) {
        let snapshot = self.snapshot();
        // Drop subscribers whose receiving end has gone away.
        self.subscribers.retain(|tx| tx.send(snapshot.clone()).is_ok());
    }
}

impl Default for QuoteBoard {
    fn default() -> Self {
        Self::new()
    }
}
