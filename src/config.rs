/// Configuration constants for the context config file
pub mod config_file {
    /// Environment variable overriding the config file location
    pub const ENV_VAR: &str = "CCCTX_CONFIG_PATH";

    /// Config directory name (relative to HOME)
    pub const DIR_NAME: &str = ".ccctx";

    /// Config file name
    pub const FILE_NAME: &str = "config.toml";

    /// Contents written on first run when no config file exists
    pub const DEFAULT_CONTENT: &str = r#"# Claude-Code Context Configuration
[context.example]
base_url = "https://api.anthropic.com"
auth_token = "your-auth-token-here"
# Optional: specify model explicitly
# model = "claude-3-5-sonnet-20241022"
# small_fast_model = "claude-3-5-haiku-20241022"
"#;
}

/// Constants for the launched claude-code process
pub mod claude {
    /// Executable name looked up on PATH by the run command
    pub const BIN_NAME: &str = "claude-code";

    /// Environment variable carrying the API base URL
    pub const BASE_URL_VAR: &str = "ANTHROPIC_BASE_URL";

    /// Environment variable carrying the API auth token
    pub const AUTH_TOKEN_VAR: &str = "ANTHROPIC_AUTH_TOKEN";
}

/// Default values for CLI
pub mod defaults {
    /// Default log level
    pub const LOG_LEVEL: &str = "warn";
}
