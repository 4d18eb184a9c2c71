//! ccctx - Claude Context Switcher
//!
//! A CLI tool to manage and switch between Claude API connection contexts
//! stored in `~/.ccctx/config.toml`.
//!
//! # Features
//!
//! - Named contexts bundling an API base URL and auth token
//! - `env:NAME` indirection for tokens kept outside the config file
//! - Interactive terminal selector when no context name is given
//! - Shell `export` output or direct claude-code launch with injected
//!   credentials
//!
//! # Example
//!
//! ```bash
//! # List configured contexts
//! ccctx list
//!
//! # Apply a context to the current shell
//! eval "$(ccctx switch prod)"
//!
//! # Launch claude-code with a context's credentials
//! ccctx run prod
//!
//! # Forward extra arguments to claude-code
//! ccctx run prod -- --help
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod context;
pub mod error;
pub mod exec;
pub mod ui;

pub use cli::{Cli, Command};
pub use commands::run_command;
pub use context::{resolve_env_indirection, Context, ContextConfig, ContextStore};
pub use error::{CcctxError, Result};
pub use exec::{find_executable, inject_credentials, injected_process_env, run_with_context};
pub use ui::{run_selector, Selection};
