//! Locating and launching the claude-code executable

use std::path::PathBuf;
use std::process::Command;

use log::{debug, info};

use crate::config::claude;
use crate::context::Context;
use crate::error::{CcctxError, Result};

use super::env::injected_process_env;

/// Search PATH for an executable with the given name
pub fn find_executable(name: &str) -> Option<PathBuf> {
    let path = std::env::var_os("PATH")?;
    std::env::split_paths(&path)
        .map(|dir| dir.join(name))
        .find(|candidate| is_executable(candidate))
}

#[cfg(unix)]
fn is_executable(path: &std::path::Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.is_file() && m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &std::path::Path) -> bool {
    path.is_file()
}

/// Launch claude-code with the context's credentials injected, forwarding
/// stdio and any extra arguments, and wait for it to finish.
///
/// Returns the child's exit code; the caller exits with it so the child's
/// status passes through transparently. A child killed by a signal has no
/// exit code and is reported as a `ChildExecution` error instead.
pub fn run_with_context(context: &Context, extra_args: &[String]) -> Result<i32> {
    let binary = find_executable(claude::BIN_NAME)
        .ok_or_else(|| CcctxError::ExecutableNotFound(claude::BIN_NAME.to_string()))?;

    debug!(
        "Launching {} with {} extra arg(s)",
        binary.display(),
        extra_args.len()
    );

    let status = Command::new(&binary)
        .args(extra_args)
        .env_clear()
        .envs(injected_process_env(context))
        .status()
        .map_err(|e| {
            CcctxError::ChildExecution(format!("failed to execute {}: {}", claude::BIN_NAME, e))
        })?;

    match status.code() {
        Some(code) => {
            info!("{} exited with code {}", claude::BIN_NAME, code);
            Ok(code)
        }
        None => Err(CcctxError::ChildExecution(format!(
            "{} terminated by a signal",
            claude::BIN_NAME
        ))),
    }
}
