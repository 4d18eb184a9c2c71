use std::fmt;

/// Custom error type for context operations
#[derive(Debug)]
pub enum CcctxError {
    /// Failed to read, create, or parse the config file
    Config(String),
    /// Requested context name does not exist in the config file
    NotFound(String),
    /// An `env:` indirected value points at an unset or empty variable
    EnvResolution(String),
    /// The config file defines no contexts to select from
    NoContexts,
    /// User cancelled interactive selection (clean exit, not a failure)
    Cancelled,
    /// The target executable is missing from PATH
    ExecutableNotFound(String),
    /// The child process could not be spawned or died without an exit code
    ChildExecution(String),
    /// Terminal or other I/O failure
    Io(std::io::Error),
}

impl fmt::Display for CcctxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CcctxError::Config(msg) => write!(f, "{}", msg),
            CcctxError::NotFound(name) => write!(f, "context '{}' not found", name),
            CcctxError::EnvResolution(msg) => write!(f, "{}", msg),
            CcctxError::NoContexts => write!(f, "no contexts found"),
            CcctxError::Cancelled => write!(f, "operation cancelled"),
            CcctxError::ExecutableNotFound(bin) => write!(f, "{} not found in PATH", bin),
            CcctxError::ChildExecution(msg) => write!(f, "{}", msg),
            CcctxError::Io(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for CcctxError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CcctxError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for CcctxError {
    fn from(err: std::io::Error) -> Self {
        CcctxError::Io(err)
    }
}

impl From<toml::de::Error> for CcctxError {
    fn from(err: toml::de::Error) -> Self {
        CcctxError::Config(err.to_string())
    }
}

/// Result type alias for context operations
pub type Result<T> = std::result::Result<T, CcctxError>;
