use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Profile metadata for a GitHub account, normalized at the fetch boundary.
///
/// Optional strings are trimmed and empty values are stored as `None`, so
/// "present" always means "has visible content".
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AccountProfile {
    pub login: String,
    pub name: Option<String>,
    pub bio: Option<String>,
    pub location: Option<String>,
    pub company: Option<String>,
    pub email: Option<String>,
    pub blog: Option<String>,
    pub twitter: Option<String>,
    pub followers: u64,
    pub public_repos: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RepositorySummary {
    pub name: String,
    pub description: Option<String>,
    pub language: Option<String>,
    pub stars: u64,
    pub forks: u64,
    pub pushed_at: Option<DateTime<Utc>>, // null for never-pushed repos
}

impl RepositorySummary {
    pub fn is_described(&self) -> bool {
        self.description.is_some()
    }

    /// Whether the repository saw a push at or after `since`
    pub fn pushed_since(&self, since: DateTime<Utc>) -> bool {
        self.pushed_at.is_some_and(|pushed| pushed >= since)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActivityEvent {
    pub kind: String, // e.g. "PushEvent"
    pub created_at: DateTime<Utc>,
}

/// Everything the scorer needs about one account
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AccountData {
    pub profile: AccountProfile,
    pub repositories: Vec<RepositorySummary>,
    pub events: Vec<ActivityEvent>, // most recent first
}

/// `/users/{username}` response, only the fields we score
#[derive(Debug, Deserialize)]
pub struct RawUser {
    pub login: String,
    pub name: Option<String>,
    pub bio: Option<String>,
    pub location: Option<String>,
    pub company: Option<String>,
    pub email: Option<String>,
    pub blog: Option<String>,
    pub twitter_username: Option<String>,
    #[serde(default)]
    pub followers: u64,
    #[serde(default)]
    pub public_repos: u64,
}

/// One item of `/users/{username}/repos`
#[derive(Debug, Deserialize)]
pub struct RawRepository {
    pub name: String,
    pub description: Option<String>,
    pub language: Option<String>,
    #[serde(default)]
    pub stargazers_count: u64,
    #[serde(default)]
    pub forks_count: u64,
    pub pushed_at: Option<DateTime<Utc>>,
}

/// One item of `/users/{username}/events`
#[derive(Debug, Deserialize)]
pub struct RawEvent {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Trim a string and drop it if nothing is left
fn present(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl From<RawUser> for AccountProfile {
    fn from(raw: RawUser) -> Self {
        Self {
            login: raw.login,
            name: present(raw.name),
            bio: present(raw.bio),
            location: present(raw.location),
            company: present(raw.company),
            email: present(raw.email),
            blog: present(raw.blog),
            twitter: present(raw.twitter_username),
            followers: raw.followers,
            public_repos: raw.public_repos,
        }
    }
}

impl From<RawRepository> for RepositorySummary {
    fn from(raw: RawRepository) -> Self {
        Self {
            name: raw.name,
            description: present(raw.description),
            language: present(raw.language),
            stars: raw.stargazers_count,
            forks: raw.forks_count,
            pushed_at: raw.pushed_at,
        }
    }
}

impl From<RawEvent> for ActivityEvent {
    fn from(raw: RawEvent) -> Self {
        Self {
            kind: present(raw.kind).unwrap_or_default(),
            created_at: raw.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_user_normalizes_empty_strings() {
        let json = r#"{
            "login": "octocat",
            "name": "The Octocat",
            "bio": null,
            "location": "  ",
            "company": "@github",
            "email": null,
            "blog": "",
            "twitter_username": null,
            "followers": 42,
            "public_repos": 8
        }"#;
        let raw: RawUser = serde_json::from_str(json).unwrap();
        let profile = AccountProfile::from(raw);

        assert_eq!(profile.login, "octocat");
        assert_eq!(profile.name.as_deref(), Some("The Octocat"));
        assert!(profile.bio.is_none());
        assert!(profile.location.is_none()); // whitespace only
        assert_eq!(profile.company.as_deref(), Some("@github"));
        assert!(profile.blog.is_none()); // GitHub sends "" for no blog
        assert_eq!(profile.followers, 42);
        assert_eq!(profile.public_repos, 8);
    }

    #[test]
    fn test_user_missing_counts_default_to_zero() {
        let raw: RawUser = serde_json::from_str(r#"{"login": "ghost"}"#).unwrap();
        let profile = AccountProfile::from(raw);
        assert_eq!(profile.followers, 0);
        assert_eq!(profile.public_repos, 0);
        assert!(profile.name.is_none());
    }

    #[test]
    fn test_repository_from_raw() {
        let json = r#"{
            "name": "hello-world",
            "description": "My first repo",
            "language": "Rust",
            "stargazers_count": 10,
            "forks_count": 3,
            "pushed_at": "2026-09-01T12:00:00Z"
        }"#;
        let raw: RawRepository = serde_json::from_str(json).unwrap();
        let repo = RepositorySummary::from(raw);

        assert!(repo.is_described());
        assert_eq!(repo.language.as_deref(), Some("Rust"));
        assert_eq!(repo.stars, 10);
        assert_eq!(repo.forks, 3);
        assert_eq!(
            repo.pushed_at,
            Some(Utc.with_ymd_and_hms(2026, 9, 1, 12, 0, 0).unwrap())
        );
    }

    #[test]
    fn test_repository_never_pushed() {
        let json = r#"{"name": "empty", "description": "", "language": null, "pushed_at": null}"#;
        let raw: RawRepository = serde_json::from_str(json).unwrap();
        let repo = RepositorySummary::from(raw);

        assert!(!repo.is_described());
        assert!(!repo.pushed_since(Utc.with_ymd_and_hms(2000, 1, 1, 0, 0, 0).unwrap()));
    }

    #[test]
    fn test_pushed_since_is_inclusive() {
        let at = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
        let repo = RepositorySummary {
            name: "r".to_string(),
            description: None,
            language: None,
            stars: 0,
            forks: 0,
            pushed_at: Some(at),
        };
        assert!(repo.pushed_since(at));
        assert!(!repo.pushed_since(at + chrono::Duration::seconds(1)));
    }

    #[test]
    fn test_event_from_raw() {
        let json = r#"{"type": "PushEvent", "created_at": "2026-10-17T08:30:00Z", "id": "1"}"#;
        let raw: RawEvent = serde_json::from_str(json).unwrap();
        let event = ActivityEvent::from(raw);
        assert_eq!(event.kind, "PushEvent");
    }
}
