//! Claude Context Switcher - Main entry point

use clap::Parser;
use log::info;

use ccctx::{run_command, CcctxError, Cli};

fn main() {
    let cli = Cli::parse();

    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&cli.log_level))
        .init();

    info!("Starting ccctx v{}", env!("CARGO_PKG_VERSION"));

    match run_command(&cli) {
        Ok(code) => std::process::exit(code),
        Err(CcctxError::Cancelled) => {
            // User-initiated, informational rather than a failure.
            println!("Operation cancelled.");
            std::process::exit(0);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
