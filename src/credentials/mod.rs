pub mod prompt;

/// Environment variables checked for a GitHub token, in order
pub const ENV_TOKEN_VARS: [&str; 2] = ["GH_STRENGTH_TOKEN", "GITHUB_TOKEN"];

pub use prompt::prompt_for_token;

/// Trimmed value, or None when empty
fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Check the token environment variables.
/// Returns the first one that is set and non-empty.
pub fn get_token_from_env() -> Option<String> {
    ENV_TOKEN_VARS
        .iter()
        .find_map(|var| std::env::var(var).ok().and_then(|v| non_empty(&v)))
}

/// Where the token came from, for verbose logging
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenSource {
    Flag,
    Environment,
    Prompt,
}

/// Pick the token to use: an explicit flag wins, then the environment, then
/// (only when `ask` is set) an interactive hidden prompt. No token at all is
/// fine; requests are made anonymously.
pub fn resolve_token(flag: Option<&str>, ask: bool) -> anyhow::Result<Option<(String, TokenSource)>> {
    resolve_with(flag, get_token_from_env(), ask, prompt_for_token)
}

fn resolve_with<F>(
    flag: Option<&str>,
    env: Option<String>,
    ask: bool,
    prompt: F,
) -> anyhow::Result<Option<(String, TokenSource)>>
where
    F: FnOnce() -> anyhow::Result<Option<String>>,
{
    if let Some(token) = flag.and_then(non_empty) {
        return Ok(Some((token, TokenSource::Flag)));
    }
    if let Some(token) = env {
        return Ok(Some((token, TokenSource::Environment)));
    }
    if ask {
        return Ok(prompt()?.map(|token| (token, TokenSource::Prompt)));
    }
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_prompt() -> anyhow::Result<Option<String>> {
        panic!("prompt should not be called")
    }

    #[test]
    fn test_flag_wins() {
        let resolved = resolve_with(Some("flag-token"), Some("env-token".into()), true, no_prompt).unwrap();
        assert_eq!(resolved, Some(("flag-token".to_string(), TokenSource::Flag)));
    }

    #[test]
    fn test_blank_flag_ignored() {
        let resolved = resolve_with(Some("   "), Some("env-token".into()), false, no_prompt).unwrap();
        assert_eq!(resolved, Some(("env-token".to_string(), TokenSource::Environment)));
    }

    #[test]
    fn test_prompt_only_when_asked() {
        assert_eq!(resolve_with(None, None, false, no_prompt).unwrap(), None);

        let resolved = resolve_with(None, None, true, || Ok(Some("typed".to_string()))).unwrap();
        assert_eq!(resolved, Some(("typed".to_string(), TokenSource::Prompt)));
    }

    #[test]
    fn test_prompt_skipped() {
        let resolved = resolve_with(None, None, true, || Ok(None)).unwrap();
        assert_eq!(resolved, None);
    }

    #[test]
    fn test_non_empty() {
        assert_eq!(non_empty("  abc "), Some("abc".to_string()));
        assert_eq!(non_empty(""), None);
    }
}
