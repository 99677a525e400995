//! # Bistro Terminal Entry Point
//!
//! Console binary for the Bistro food-ordering simulator.
//!
//! ## Startup Sequence
//! 1. Initialize tracing (stderr, env-filtered via `RUST_LOG`)
//! 2. Run one ordering session over locked stdin/stdout
//! 3. Journal the receipt as a JSON line on success
//! 4. Exit nonzero if the session terminated early
//!
//! Logs go to stderr so the session protocol on stdout stays clean for
//! the user (and for transcript-based tests).

mod error;
mod session;

use std::io;
use std::process::ExitCode;

use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use crate::error::SessionError;
use crate::session::Session;

fn main() -> ExitCode {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    info!("Starting Bistro order terminal");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(stdin.lock(), stdout.lock());

    match session.run() {
        Ok(receipt) => {
            // Journal the completed order for audit
            match serde_json::to_string(&receipt) {
                Ok(json) => info!(receipt = %json, "receipt journaled"),
                Err(err) => warn!(%err, "failed to serialize receipt"),
            }
            ExitCode::SUCCESS
        }
        Err(SessionError::Order(err)) => {
            warn!(%err, "session ended without an order");
            ExitCode::FAILURE
        }
        Err(SessionError::Io(err)) => {
            error!(%err, "console I/O failure");
            ExitCode::FAILURE
        }
    }
}
