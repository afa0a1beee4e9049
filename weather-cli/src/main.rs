//! Binary crate for the `weather` command-line tool.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - Interactive API key configuration
//! - Printing the report, or `Error: <message>`, to stdout
//!
//! The process exits with status 0 whatever happens.

use clap::{Parser, error::ErrorKind};
use tracing_subscriber::EnvFilter;

mod cli;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    init_tracing();

    if cli::wants_help(std::env::args_os().skip(1)) {
        print!("{}", cli::USAGE);
        return;
    }

    let cmd = match cli::Cli::try_parse() {
        Ok(cmd) => cmd,
        Err(err) if err.kind() == ErrorKind::DisplayVersion => {
            print!("{err}");
            return;
        }
        Err(err) => {
            println!("Error: {}", cli::parse_failure(&err));
            println!("Run `weather --help` for usage.");
            return;
        }
    };

    if let Err(err) = cmd.run().await {
        println!("Error: {err:#}");
    }
}

/// Logs go to stderr so stdout only carries the report. Defaults to `warn`.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}
