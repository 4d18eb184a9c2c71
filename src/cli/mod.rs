//! CLI argument parsing

use clap::{Parser, Subcommand};

use crate::config::defaults;

/// Claude Context Switcher CLI
#[derive(Parser, Debug)]
#[command(name = "ccctx")]
#[command(version)]
#[command(about = "Manage and switch between Claude API contexts", long_about = None)]
pub struct Cli {
    /// Log level (error, warn, info, debug, trace)
    #[arg(
        short,
        long,
        global = true,
        env = "CCCTX_LOG_LEVEL",
        default_value = defaults::LOG_LEVEL
    )]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// List available contexts
    List,

    /// Print shell export statements for a context
    #[command(after_help = "EXAMPLES:\n  \
        ccctx switch prod\n  \
        eval \"$(ccctx switch prod)\"\n  \
        ccctx switch          # interactive selection")]
    Switch {
        /// Context name (interactive selection if omitted)
        name: Option<String>,
    },

    /// Run claude-code with a context's credentials injected
    #[command(after_help = "EXAMPLES:\n  \
        ccctx run prod\n  \
        ccctx run prod -- --help\n  \
        ccctx run             # interactive selection")]
    Run {
        /// Context name (interactive selection if omitted)
        name: Option<String>,

        /// Extra arguments forwarded to claude-code verbatim
        #[arg(last = true)]
        args: Vec<String>,
    },
}
