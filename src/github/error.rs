use thiserror::Error;

/// Why account data could not be fetched
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("GitHub user '{0}' not found")]
    NotFound(String),

    #[error("GitHub API rate limit exceeded. Wait a few minutes or provide a token.")]
    RateLimited,

    #[error("Authentication failed. Your GitHub token may be invalid or expired.")]
    Unauthorized,

    #[error("Network error talking to GitHub: {0}")]
    Network(String),
}

impl FetchError {
    /// Map an HTTP status and GitHub error message onto the fetch taxonomy.
    ///
    /// GitHub reports exhausted rate limits as 403 with a "rate limit" message,
    /// and secondary limits as 429.
    pub fn from_status(status: u16, message: &str, username: &str) -> Self {
        let rate_limit_message = message.to_ascii_lowercase().contains("rate limit");
        match status {
            404 => FetchError::NotFound(username.to_string()),
            429 => FetchError::RateLimited,
            403 if rate_limit_message => FetchError::RateLimited,
            401 | 403 => FetchError::Unauthorized,
            _ => FetchError::Network(format!("HTTP {}: {}", status, message)),
        }
    }

    /// Classify an octocrab error for the given user lookup
    pub fn from_octocrab(err: octocrab::Error, username: &str) -> Self {
        match &err {
            octocrab::Error::GitHub { source, .. } => {
                FetchError::from_status(source.status_code.as_u16(), &source.message, username)
            }
            _ => FetchError::Network(err.to_string()),
        }
    }

    /// Only transport failures are worth another attempt
    pub fn is_transient(&self) -> bool {
        matches!(self, FetchError::Network(_))
    }
}
