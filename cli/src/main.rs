//! task - Taskboard command-line interface
//!
//! Adds, lists, searches, moves, and deletes tasks in the same JSON file the
//! web board uses.

mod cli;
mod output;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::cli::Cli;

#[tokio::main]
async fn main() {
    // Tracing is opt-in via RUST_LOG and goes to stderr.
    let filter = std::env::var("RUST_LOG")
        .ok()
        .and_then(|raw| EnvFilter::try_new(raw.trim()).ok())
        .unwrap_or_else(|| EnvFilter::new("off"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let cli = Cli::parse();
    if let Err(err) = cli.run().await {
        eprintln!("{}", output::failure(&err));
        std::process::exit(1);
    }
}
