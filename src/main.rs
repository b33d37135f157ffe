//! Bank Account Engine CLI
//!
//! Command-line interface for running operation scripts against validated accounts.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- run script.csv > accounts.csv
//! cargo run -- run --store shared script.csv > accounts.csv
//! cargo run -- demo
//! RUST_LOG=debug cargo run -- run script.csv
//! ```
//!
//! Account summaries and demo narration go to stdout; logs go to stderr and are filtered
//! with `RUST_LOG` (default `warn`).
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (missing arguments, file not found, file not readable, etc.)

use bank_account_engine::cli::{self, demo, Command, StoreType};
use bank_account_engine::core::{run_script, Ledger, SharedLedger};
use std::process;
use tracing::error;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = cli::parse_args();
    let mut output = std::io::stdout();

    match args.command {
        Command::Run { input_file, store } => {
            let result = match store {
                StoreType::Sync => run_script::<Ledger>(&input_file, &mut output),
                StoreType::Shared => run_script::<SharedLedger>(&input_file, &mut output),
            };
            if let Err(e) = result {
                error!("{}", e);
                process::exit(1);
            }
        }
        Command::Demo => {
            if let Err(e) = demo::run_demo(&mut output) {
                error!("Failed to write demo output: {}", e);
                process::exit(1);
            }
        }
    }
}
