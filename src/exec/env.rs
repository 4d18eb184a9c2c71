//! Injected-environment construction

use crate::config::claude;
use crate::context::Context;

/// Build the child environment from a base environment and a resolved
/// context.
///
/// Any pre-existing entries for the two credential variables are removed
/// (exact key match) and the context's values appended, so each credential
/// variable appears exactly once.
pub fn inject_credentials(
    base: Vec<(String, String)>,
    context: &Context,
) -> Vec<(String, String)> {
    let mut env: Vec<(String, String)> = base
        .into_iter()
        .filter(|(key, _)| key != claude::BASE_URL_VAR && key != claude::AUTH_TOKEN_VAR)
        .collect();

    env.push((claude::BASE_URL_VAR.to_string(), context.base_url.clone()));
    env.push((claude::AUTH_TOKEN_VAR.to_string(), context.auth_token.clone()));
    env
}

/// The current process environment with the context's credentials injected
pub fn injected_process_env(context: &Context) -> Vec<(String, String)> {
    inject_credentials(std::env::vars().collect(), context)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context() -> Context {
        Context {
            base_url: "https://new.example.com".to_string(),
            auth_token: "new-token".to_string(),
            model: None,
            small_fast_model: None,
        }
    }

    fn count_key(env: &[(String, String)], key: &str) -> usize {
        env.iter().filter(|(k, _)| k == key).count()
    }

    #[test]
    fn test_inject_into_clean_environment() {
        let base = vec![("HOME".to_string(), "/home/me".to_string())];
        let env = inject_credentials(base, &context());

        assert_eq!(env.len(), 3);
        assert!(env.contains(&("HOME".to_string(), "/home/me".to_string())));
        assert!(env.contains(&(
            "ANTHROPIC_BASE_URL".to_string(),
            "https://new.example.com".to_string()
        )));
        assert!(env.contains(&("ANTHROPIC_AUTH_TOKEN".to_string(), "new-token".to_string())));
    }

    #[test]
    fn test_inject_replaces_existing_credentials() {
        let base = vec![
            ("ANTHROPIC_BASE_URL".to_string(), "https://old".to_string()),
            ("ANTHROPIC_AUTH_TOKEN".to_string(), "old-token".to_string()),
            ("PATH".to_string(), "/usr/bin".to_string()),
        ];
        let env = inject_credentials(base, &context());

        assert_eq!(count_key(&env, "ANTHROPIC_BASE_URL"), 1);
        assert_eq!(count_key(&env, "ANTHROPIC_AUTH_TOKEN"), 1);
        let url = env
            .iter()
            .find(|(k, _)| k == "ANTHROPIC_BASE_URL")
            .map(|(_, v)| v.as_str());
        assert_eq!(url, Some("https://new.example.com"));
    }

    #[test]
    fn test_inject_key_match_is_exact() {
        // Similar but distinct keys must survive untouched.
        let base = vec![
            ("ANTHROPIC_BASE_URL_BACKUP".to_string(), "keep".to_string()),
            ("MY_ANTHROPIC_AUTH_TOKEN".to_string(), "keep".to_string()),
        ];
        let env = inject_credentials(base, &context());

        assert!(env.contains(&("ANTHROPIC_BASE_URL_BACKUP".to_string(), "keep".to_string())));
        assert!(env.contains(&("MY_ANTHROPIC_AUTH_TOKEN".to_string(), "keep".to_string())));
        assert_eq!(env.len(), 4);
    }

    #[test]
    fn test_injected_process_env_contains_credentials() {
        let env = injected_process_env(&context());
        assert_eq!(count_key(&env, "ANTHROPIC_BASE_URL"), 1);
        assert_eq!(count_key(&env, "ANTHROPIC_AUTH_TOKEN"), 1);
    }
}
