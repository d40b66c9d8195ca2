use anyhow::Result;

use crate::prompt::prompt_hidden;

/// Prompts user for an optional GitHub personal access token.
/// Returns None when the user just presses Enter.
pub fn prompt_for_token() -> Result<Option<String>> {
    println!("A GitHub token raises the API rate limit (optional).");
    println!("Create one at: https://github.com/settings/tokens (no scopes needed)");
    println!();

    let token = prompt_hidden("Enter token (press Enter to skip): ")?;

    if token.is_empty() {
        Ok(None)
    } else {
        Ok(Some(token))
    }
}
