//! Context configuration data models

use serde::Deserialize;
use std::collections::BTreeMap;

/// Top-level context configuration, parsed from the TOML config file
#[derive(Debug, Deserialize, Default)]
pub struct ContextConfig {
    /// Map of context name to context configuration (`[context.<name>]` tables)
    #[serde(default, rename = "context")]
    pub contexts: BTreeMap<String, Context>,
}

/// A named set of Claude API connection credentials
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Context {
    /// API base URL
    pub base_url: String,
    /// API auth token, either a literal secret or an `env:NAME` indirection
    pub auth_token: String,
    /// Optional explicit model
    #[serde(default)]
    pub model: Option<String>,
    /// Optional explicit small/fast model
    #[serde(default)]
    pub small_fast_model: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let raw = r#"
            [context.prod]
            base_url = "https://api.anthropic.com"
            auth_token = "secret"
            model = "claude-3-5-sonnet-20241022"
            small_fast_model = "claude-3-5-haiku-20241022"

            [context.dev]
            base_url = "https://dev.example.com"
            auth_token = "env:DEV_TOKEN"
        "#;
        let config: ContextConfig = toml::from_str(raw).unwrap();

        assert_eq!(config.contexts.len(), 2);
        assert_eq!(config.contexts["prod"].base_url, "https://api.anthropic.com");
        assert_eq!(config.contexts["prod"].auth_token, "secret");
        assert_eq!(
            config.contexts["prod"].model.as_deref(),
            Some("claude-3-5-sonnet-20241022")
        );
        assert_eq!(
            config.contexts["prod"].small_fast_model.as_deref(),
            Some("claude-3-5-haiku-20241022")
        );
        assert_eq!(config.contexts["dev"].auth_token, "env:DEV_TOKEN");
        assert!(config.contexts["dev"].model.is_none());
        assert!(config.contexts["dev"].small_fast_model.is_none());
    }

    #[test]
    fn test_parse_empty_config() {
        let config: ContextConfig = toml::from_str("").unwrap();
        assert!(config.contexts.is_empty());
    }

    #[test]
    fn test_parse_missing_required_field_errors() {
        let raw = r#"
            [context.broken]
            base_url = "https://x"
        "#;
        assert!(toml::from_str::<ContextConfig>(raw).is_err());
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let raw = r#"
            [context.prod]
            base_url = "https://x"
            auth_token = "t"
            comment = "extra key from a hand-edited file"
        "#;
        let config: ContextConfig = toml::from_str(raw).unwrap();
        assert_eq!(config.contexts["prod"].auth_token, "t");
    }

    #[test]
    fn test_btreemap_ordering() {
        let raw = r#"
            [context.zebra]
            base_url = "https://z"
            auth_token = "z"

            [context.alpha]
            base_url = "https://a"
            auth_token = "a"
        "#;
        let config: ContextConfig = toml::from_str(raw).unwrap();
        let keys: Vec<&String> = config.contexts.keys().collect();
        assert_eq!(keys, vec!["alpha", "zebra"]);
    }
}
