//! Daily Quotes — terminal client.
//!
//! Shows an inspirational quote and lets the user request a new one from the
//! bundled dataset or the remote endpoint, and share or copy the current one.
//! A stdin-reader thread and one worker thread per triggered fetch feed a
//! crossbeam `select!` loop that owns the `QuoteBoard`; fetch results are
//! applied in completion order (last writer wins, no cancellation).
//!
//! Usage example (CLI):
//! ```bash
//! quote_app --dataset ./quotes.json --url https://type.fit/api/quotes
//! ```
//!
//! Commands: `new`/`n`, `remote`/`r`, `share`/`s`, `copy`/`c`, `quit`/`q`.
#![warn(missing_docs)]
mod args;
mod model;
mod share;
mod worker;

use std::io::{self, BufRead};
use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};
use std::thread;
use std::time::Duration;

use clap::Parser;
use crossbeam_channel::{Sender, select, unbounded};
use log::{info, warn};
use quote_provider::{BoardSnapshot, QuoteBoard, QuoteSource};

use crate::args::Args;
use crate::model::command::AppCommand;

/// How often the main loop wakes up to check the shutdown flag.
const TICK: Duration = Duration::from_millis(250);

fn main() {
    init_logger();
    let args = Args::parse();

    let bundled = QuoteSource::Bundled(args.dataset.clone());
    let remote = QuoteSource::Remote(args.url.clone());
    let initial = if args.remote {
        remote.clone()
    } else {
        bundled.clone()
    };

    let mut board = QuoteBoard::new();
    let (results_tx, results_rx) = unbounded();

    if args.once {
        board.begin_fetch();
        worker::spawn_fetch(initial, results_tx);
        board.finish(results_rx.recv().expect("fetch worker disappeared"));
        render(&board.snapshot());
        return;
    }

    let shutdown = Arc::new(AtomicBool::new(false));
    {
        let shutdown = shutdown.clone();
        ctrlc::set_handler(move || {
            info!("Ctrl+C received. Shutting down...");
            shutdown.store(true, Ordering::SeqCst);
        })
        .expect("Error setting Ctrl+C handler");
    }

    let (cmd_tx, cmd_rx) = unbounded();
    thread::spawn(move || read_commands(cmd_tx));

    board.begin_fetch();
    render(&board.snapshot());
    worker::spawn_fetch(initial, results_tx.clone());

    while !shutdown.load(Ordering::SeqCst) {
        select! {
            recv(cmd_rx) -> msg => match msg {
                Ok(AppCommand::New) => {
                    board.begin_fetch();
                    render(&board.snapshot());
                    worker::spawn_fetch(bundled.clone(), results_tx.clone());
                }
                Ok(AppCommand::Remote) => {
                    board.begin_fetch();
                    render(&board.snapshot());
                    worker::spawn_fetch(remote.clone(), results_tx.clone());
                }
                Ok(AppCommand::Share) => {
                    println!("{}", share::share_text(&board.snapshot().quote));
                }
                Ok(AppCommand::Copy) => {
                    share::copy_to_clipboard(&board.snapshot().quote);
                }
                Ok(AppCommand::Quit) | Err(_) => break,
            },
            recv(results_rx) -> outcome => {
                // The sender side never closes: main holds a clone.
                if let Ok(outcome) = outcome {
                    board.finish(outcome);
                    render(&board.snapshot());
                }
            },
            default(TICK) => {}
        }
    }
    info!("Bye!");
}

/// Reads stdin lines, parses them into commands, and forwards them to the
/// main loop. Stops on EOF, on `quit`, or when the main loop has gone away.
fn read_commands(cmd_tx: Sender<AppCommand>) {
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let Ok(line) = line else { break };
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        match trimmed.parse::<AppCommand>() {
            Ok(command) => {
                let quit = command == AppCommand::Quit;
                if cmd_tx.send(command).is_err() || quit {
                    break;
                }
            }
            Err(_) => {
                warn!(
                    "Unknown command: {} (try new, remote, share, copy, quit)",
                    trimmed
                );
            }
        }
    }
}

/// Prints the current board state as a small quote card.
fn render(snapshot: &BoardSnapshot) {
    if snapshot.is_loading {
        println!("\nLoading inspiring quote...");
        return;
    }
    println!("\n\"{}\"", snapshot.quote.text);
    println!("    - {}", snapshot.quote.author);
    println!("\n[n]ew  [r]emote  [s]hare  [c]opy  [q]uit");
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}
