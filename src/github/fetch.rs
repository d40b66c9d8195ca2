use octocrab::Octocrab;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;
use tokio_retry::{strategy::ExponentialBackoff, RetryIf};
use tracing::debug;

use crate::github::error::FetchError;
use crate::github::types::{
    AccountData, AccountProfile, ActivityEvent, RawEvent, RawRepository, RawUser, RepositorySummary,
};

/// GitHub's largest page size
const PER_PAGE: u8 = 100;

/// Upper bound on repository pages (1000 repositories)
const MAX_REPO_PAGES: u32 = 10;

/// Retries after the first request, so 3 attempts in total
const MAX_RETRIES: usize = 2;

#[derive(Serialize)]
struct PageParams {
    per_page: u8,
    page: u32,
}

#[derive(Serialize)]
struct RepoParams {
    #[serde(rename = "type")]
    kind: &'static str,
    sort: &'static str,
    per_page: u8,
    page: u32,
}

/// GitHub login rules: 1-39 ASCII alphanumerics or single hyphens,
/// not starting or ending with a hyphen
pub fn is_valid_username(username: &str) -> bool {
    !username.is_empty()
        && username.len() <= 39
        && username.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
        && !username.starts_with('-')
        && !username.ends_with('-')
        && !username.contains("--")
}

fn retry_strategy() -> impl Iterator<Item = Duration> {
    ExponentialBackoff::from_millis(100)
        .max_delay(Duration::from_secs(5))
        .take(MAX_RETRIES)
}

/// A short page is the last one; otherwise stop at the page cap
fn has_next_page(batch_len: usize, page: u32) -> bool {
    batch_len >= PER_PAGE as usize && page < MAX_REPO_PAGES
}

/// GET a route, retrying transient failures with exponential backoff
async fn get_json<R, P>(
    client: &Octocrab,
    route: &str,
    params: Option<&P>,
    username: &str,
) -> Result<R, FetchError>
where
    R: DeserializeOwned,
    P: Serialize + ?Sized,
{
    RetryIf::spawn(
        retry_strategy(),
        || async move {
            debug!(route, "GET");
            client
                .get::<R, _, P>(route, params)
                .await
                .map_err(|e| FetchError::from_octocrab(e, username))
        },
        FetchError::is_transient,
    )
    .await
}

pub async fn fetch_profile(client: &Octocrab, username: &str) -> Result<AccountProfile, FetchError> {
    let route = format!("/users/{}", username);
    let raw: RawUser = get_json::<_, ()>(client, &route, None, username).await?;
    Ok(raw.into())
}

/// Fetch the repositories the user owns, most recently pushed first
pub async fn fetch_repositories(client: &Octocrab, username: &str) -> Result<Vec<RepositorySummary>, FetchError> {
    let route = format!("/users/{}/repos", username);
    let mut repos = Vec::new();

    for page in 1..=MAX_REPO_PAGES {
        let params = RepoParams {
            kind: "owner",
            sort: "pushed",
            per_page: PER_PAGE,
            page,
        };
        let batch: Vec<RawRepository> = get_json(client, &route, Some(&params), username).await?;
        let more = has_next_page(batch.len(), page);
        repos.extend(batch.into_iter().map(RepositorySummary::from));
        if !more {
            break;
        }
    }

    debug!(count = repos.len(), "fetched repositories");
    Ok(repos)
}

/// Fetch one page of the public event feed (most recent first)
pub async fn fetch_events(client: &Octocrab, username: &str) -> Result<Vec<ActivityEvent>, FetchError> {
    let route = format!("/users/{}/events", username);
    let params = PageParams {
        per_page: PER_PAGE,
        page: 1,
    };
    let raw: Vec<RawEvent> = get_json(client, &route, Some(&params), username).await?;
    debug!(count = raw.len(), "fetched events");
    Ok(raw.into_iter().map(ActivityEvent::from).collect())
}

/// Fetch everything needed to score an account.
///
/// The profile is fetched first so an unknown user fails fast; repositories
/// and events are then requested together.
pub async fn fetch_account(client: &Octocrab, username: &str) -> Result<AccountData, FetchError> {
    let profile = fetch_profile(client, username).await?;
    let login = profile.login.clone();

    let (repositories, events) = tokio::try_join!(
        fetch_repositories(client, &login),
        fetch_events(client, &login)
    )?;

    Ok(AccountData {
        profile,
        repositories,
        events,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_usernames() {
        assert!(is_valid_username("octocat"));
        assert!(is_valid_username("a"));
        assert!(is_valid_username("some-user-42"));
        assert!(is_valid_username(&"x".repeat(39)));
    }

    #[test]
    fn test_invalid_usernames() {
        assert!(!is_valid_username(""));
        assert!(!is_valid_username("-leading"));
        assert!(!is_valid_username("trailing-"));
        assert!(!is_valid_username("double--hyphen"));
        assert!(!is_valid_username("has space"));
        assert!(!is_valid_username("../etc"));
        assert!(!is_valid_username(&"x".repeat(40)));
    }

    #[test]
    fn test_retry_strategy_is_bounded() {
        let delays: Vec<Duration> = retry_strategy().collect();
        assert_eq!(delays.len(), MAX_RETRIES);
        assert!(delays.iter().all(|d| *d <= Duration::from_secs(5)));
    }

    #[test]
    fn test_short_page_is_last() {
        assert!(!has_next_page(0, 1));
        assert!(!has_next_page(99, 1));
        assert!(has_next_page(100, 1));
    }

    #[test]
    fn test_page_cap_stops_paging() {
        assert!(has_next_page(100, MAX_REPO_PAGES - 1));
        assert!(!has_next_page(100, MAX_REPO_PAGES));
    }

    #[test]
    fn test_repo_params_serialize() {
        let params = RepoParams {
            kind: "owner",
            sort: "pushed",
            per_page: 100,
            page: 2,
        };
        let json = serde_json::to_value(&params).unwrap();
        assert_eq!(json["type"], "owner");
        assert_eq!(json["page"], 2);
    }
}
