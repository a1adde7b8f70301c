//! Pairing - runs the pairing walkthrough on standard output.
//!
//! Diagnostics go to stderr, filtered by `RUST_LOG` (default `warn`).

use std::io;

use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let stdout = io::stdout();
    if let Err(e) = pairing_repl::run_narrative(&mut stdout.lock()) {
        eprintln!("Error writing output: {}", e);
        std::process::exit(1);
    }
}
