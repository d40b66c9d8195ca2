use anyhow::{Context, Result};
use octocrab::Octocrab;

/// Create a GitHub client, authenticated when a personal access token is given.
///
/// Anonymous clients work for public data but share the 60 requests/hour limit.
pub fn create_client(token: Option<&str>) -> Result<Octocrab> {
    let builder = Octocrab::builder();
    let builder = match token {
        Some(token) => builder.personal_token(token.to_string()),
        None => builder,
    };
    builder.build().context("Failed to create GitHub client")
}
