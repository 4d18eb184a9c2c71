//! Context configuration file I/O

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use crate::config::config_file;
use crate::error::{CcctxError, Result};

use super::models::{Context, ContextConfig};
use super::resolve::resolve_env_indirection;

/// Handles reading the context configuration file
pub struct ContextStore {
    config_path: PathBuf,
}

impl Default for ContextStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ContextStore {
    /// Create a new store using the resolved config path
    /// (CCCTX_CONFIG_PATH override, else ~/.ccctx/config.toml)
    pub fn new() -> Self {
        Self {
            config_path: Self::resolve_config_path(),
        }
    }

    /// Create a store with a custom config path (for testing)
    pub fn with_path(path: PathBuf) -> Self {
        Self { config_path: path }
    }

    /// Path this store reads from
    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Resolve the config file path. An env var override wins if set and
    /// non-empty, otherwise the file lives under the home directory.
    fn resolve_config_path() -> PathBuf {
        if let Ok(path) = std::env::var(config_file::ENV_VAR) {
            if !path.is_empty() {
                debug!("Using config path from {}: {}", config_file::ENV_VAR, path);
                return PathBuf::from(path);
            }
        }

        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(config_file::DIR_NAME)
            .join(config_file::FILE_NAME)
    }

    /// Load the context configuration from disk.
    ///
    /// A missing file (and any missing parent directories) is bootstrapped
    /// with a commented example entry before reading; a malformed existing
    /// file is a hard error, never auto-repaired.
    pub fn load(&self) -> Result<ContextConfig> {
        self.bootstrap()?;

        let content = fs::read_to_string(&self.config_path).map_err(|e| {
            CcctxError::Config(format!(
                "Failed to read config file {}: {}",
                self.config_path.display(),
                e
            ))
        })?;

        toml::from_str(&content).map_err(|e| {
            CcctxError::Config(format!(
                "Failed to parse config file {}: {}",
                self.config_path.display(),
                e
            ))
        })
    }

    /// Write the default config file if none exists yet
    fn bootstrap(&self) -> Result<()> {
        if self.config_path.exists() {
            return Ok(());
        }

        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                CcctxError::Config(format!(
                    "Failed to create config directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        debug!(
            "Config file missing, writing default to {}",
            self.config_path.display()
        );
        fs::write(&self.config_path, config_file::DEFAULT_CONTENT).map_err(|e| {
            CcctxError::Config(format!(
                "Failed to write default config file {}: {}",
                self.config_path.display(),
                e
            ))
        })
    }

    /// List all configured context names, sorted
    pub fn list_contexts(&self) -> Result<Vec<String>> {
        let config = self.load()?;
        Ok(config.contexts.keys().cloned().collect())
    }

    /// Look up a context by exact name and resolve its auth token.
    ///
    /// The returned context is ready for injection: an `env:NAME` auth token
    /// has already been replaced with the variable's value.
    pub fn get_context(&self, name: &str) -> Result<Context> {
        let config = self.load()?;

        let context = config
            .contexts
            .get(name)
            .ok_or_else(|| CcctxError::NotFound(name.to_string()))?;

        let auth_token = resolve_env_indirection(&context.auth_token).map_err(|e| match e {
            CcctxError::EnvResolution(msg) => CcctxError::EnvResolution(format!(
                "failed to resolve auth token for context '{}': {}",
                name, msg
            )),
            other => other,
        })?;

        Ok(Context {
            auth_token,
            ..context.clone()
        })
    }
}
