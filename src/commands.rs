//! Subcommand handlers and dispatch

use log::debug;

use crate::cli::{Cli, Command};
use crate::config::claude;
use crate::context::{Context, ContextStore};
use crate::error::{CcctxError, Result};
use crate::exec::run_with_context;
use crate::ui::{run_selector, Selection};

/// Dispatch the parsed CLI to a subcommand handler.
///
/// Returns the process exit code: 0 for list/switch success, the child's
/// own code for run.
pub fn run_command(cli: &Cli) -> Result<i32> {
    let store = ContextStore::new();
    debug!("Using config file {}", store.config_path().display());

    match &cli.command {
        Command::List => run_list(&store),
        Command::Switch { name } => run_switch(&store, name.as_deref()),
        Command::Run { name, args } => run_run(&store, name.as_deref(), args),
    }
}

/// Print each configured context name on its own line
fn run_list(store: &ContextStore) -> Result<i32> {
    let names = store.list_contexts()?;

    if names.is_empty() {
        println!("No contexts found.");
        return Ok(0);
    }

    for name in names {
        println!("{}", name);
    }
    Ok(0)
}

/// Print export statements for the resolved context
fn run_switch(store: &ContextStore, name: Option<&str>) -> Result<i32> {
    let context = resolve_context(store, name)?;

    println!("export {}={}", claude::BASE_URL_VAR, context.base_url);
    println!("export {}={}", claude::AUTH_TOKEN_VAR, context.auth_token);
    Ok(0)
}

/// Launch claude-code with the resolved context, mirroring its exit code
fn run_run(store: &ContextStore, name: Option<&str>, extra_args: &[String]) -> Result<i32> {
    let context = resolve_context(store, name)?;
    run_with_context(&context, extra_args)
}

/// Resolve a context from an explicit name, or interactively when none was
/// given. An empty context list short-circuits before the selector opens.
fn resolve_context(store: &ContextStore, name: Option<&str>) -> Result<Context> {
    let name = match name {
        Some(name) => name.to_string(),
        None => {
            let names = store.list_contexts()?;
            match run_selector(&names)? {
                Selection::Chosen(name) => name,
                Selection::Cancelled => return Err(CcctxError::Cancelled),
            }
        }
    };

    store.get_context(&name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn store_with(dir: &TempDir, content: &str) -> ContextStore {
        let path = dir.path().join("config.toml");
        fs::write(&path, content).unwrap();
        ContextStore::with_path(path)
    }

    #[test]
    fn test_resolve_context_with_explicit_name() {
        let dir = TempDir::new().unwrap();
        let store = store_with(
            &dir,
            "[context.prod]\nbase_url = \"https://x\"\nauth_token = \"t1\"\n",
        );

        let ctx = resolve_context(&store, Some("prod")).unwrap();
        assert_eq!(ctx.base_url, "https://x");
    }

    #[test]
    fn test_resolve_context_unknown_name_skips_selector() {
        let dir = TempDir::new().unwrap();
        let store = store_with(&dir, "");

        // An explicit name never opens the selector, even with no contexts.
        let err = resolve_context(&store, Some("staging")).unwrap_err();
        assert!(matches!(err, CcctxError::NotFound(_)));
    }

    #[test]
    fn test_resolve_context_empty_list_errors_before_selector() {
        let dir = TempDir::new().unwrap();
        let store = store_with(&dir, "");

        let err = resolve_context(&store, None).unwrap_err();
        assert!(matches!(err, CcctxError::NoContexts));
    }

    #[test]
    fn test_run_list_empty_is_success() {
        let dir = TempDir::new().unwrap();
        let store = store_with(&dir, "");
        assert_eq!(run_list(&store).unwrap(), 0);
    }

    #[test]
    fn test_run_switch_explicit_name() {
        let dir = TempDir::new().unwrap();
        let store = store_with(
            &dir,
            "[context.prod]\nbase_url = \"https://x\"\nauth_token = \"t1\"\n",
        );
        assert_eq!(run_switch(&store, Some("prod")).unwrap(), 0);
    }
}
