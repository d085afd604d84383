//! unitconv MCP Server
//!
//! Line-delimited JSON-RPC over stdio.
//!
//! Tools:
//! - convert: Convert a value between two units of a category
//! - convert_query: Convert using free text ("10 km to mi")
//! - list_categories: List conversion categories
//! - list_units: List units of a category
//! - to_base: Convert a value to its category's base unit
//! - history: Show recent conversions of this session

mod protocol;
mod server;

use std::env;
use std::io::{self, BufRead, IsTerminal, Write};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use unitconv::{Session, SessionConfig};

fn init_logging() {
    // stdout carries protocol frames only
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .init();
}

fn main() {
    init_logging();

    let config = SessionConfig::from_env();
    info!(
        version = server::SERVER_VERSION,
        protocol = server::PROTOCOL_VERSION,
        precision = config.precision,
        history_display = config.history_display,
        "unitconv MCP server started"
    );
    if env::var("RUST_LOG").is_err() {
        info!("RUST_LOG not set, logging at info");
    }

    let mut session = Session::new(config);

    // Use BufReader for stdin (line-based protocol)
    let stdin = io::stdin();
    let mut reader = io::BufReader::new(stdin.lock());

    loop {
        let mut line = String::new();
        match reader.read_line(&mut line) {
            Ok(0) => {
                info!("client disconnected (EOF)");
                break;
            }
            Ok(_) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }

                let Some(response) = server::handle_line(&mut session, line) else {
                    continue;
                };

                let mut stdout = io::stdout().lock();
                if let Err(e) = writeln!(stdout, "{}", response) {
                    error!(error = %e, "error writing response");
                    break;
                }
                if let Err(e) = stdout.flush() {
                    error!(error = %e, "error flushing stdout");
                    break;
                }
            }
            Err(e) => {
                error!(error = %e, "error reading input");
                break;
            }
        }
    }

    info!(conversions = session.history().len(), "server shutting down");
}
