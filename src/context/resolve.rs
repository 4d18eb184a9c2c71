//! `env:` indirection for config values

use log::debug;

use crate::error::{CcctxError, Result};

/// Prefix marking a value as an environment variable reference
const ENV_PREFIX: &str = "env:";

/// Resolve an `env:NAME` indirection against the current environment.
///
/// A value starting with `env:` is replaced by the named variable's current
/// value; an unset or empty variable is an error (empty counts as unset).
/// Any other value — including ones that merely contain `env:` somewhere in
/// the middle — passes through literally unchanged.
pub fn resolve_env_indirection(value: &str) -> Result<String> {
    let Some(var) = value.strip_prefix(ENV_PREFIX) else {
        return Ok(value.to_string());
    };

    if var.is_empty() {
        return Err(CcctxError::EnvResolution(
            "environment variable name cannot be empty".to_string(),
        ));
    }

    match std::env::var(var) {
        Ok(v) if !v.is_empty() => {
            debug!("Resolved env indirection for variable '{}'", var);
            Ok(v)
        }
        _ => Err(CcctxError::EnvResolution(format!(
            "environment variable '{}' is not set or empty",
            var
        ))),
    }
}
