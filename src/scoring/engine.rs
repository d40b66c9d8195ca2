use chrono::{DateTime, Utc};
use std::collections::HashSet;

use super::config::{self as defaults, ScoringConfig};
use super::curve::{recency, saturate, RecencyStep, Threshold};
use super::report::{Category, CategoryScore, MetricScore, ScoreReport};
use crate::github::types::{AccountData, AccountProfile, ActivityEvent, RepositorySummary};

const BASIC_FIELD_POINTS: f64 = 10.0;
const CONTACT_FIELD_POINTS: f64 = 15.0;
const TWITTER_POINTS: f64 = 15.0;
const FOLLOWERS_MAX: f64 = 15.0;

const BASIC_MAX: f64 = 40.0;
const CONTACT_MAX: f64 = 30.0;
const SOCIAL_MAX: f64 = 30.0;

const REPO_COUNT_MAX: f64 = 20.0;
const DOCUMENTATION_MAX: f64 = 25.0;
const LANGUAGES_MAX: f64 = 20.0;
const COMMUNITY_MAX: f64 = 20.0;
const MAINTENANCE_MAX: f64 = 15.0;

const EVENTS_MAX: f64 = 50.0;
const EVENT_TYPES_MAX: f64 = 30.0;
const RECENCY_MAX: f64 = 20.0;

const SECS_PER_DAY: u64 = 86_400;

/// Score an account.
///
/// Pure: the same data, config and `now` always produce the same report.
/// Curves missing from `config` use the built-in defaults.
pub fn calculate_report(data: &AccountData, config: &ScoringConfig, now: DateTime<Utc>) -> ScoreReport {
    ScoreReport::new(
        score_profile(&data.profile, config),
        score_repositories(&data.repositories, config, now),
        score_activity(&data.events, config, now),
    )
}

fn curve_or(curve: &Option<Vec<Threshold>>, fallback: fn() -> Vec<Threshold>) -> Vec<Threshold> {
    curve.clone().unwrap_or_else(fallback)
}

/// Names of the fields in `fields` that are set, and of those that are not
fn split_present<'a>(fields: &[(&'a str, &Option<String>)]) -> (Vec<&'a str>, Vec<&'a str>) {
    let (present, missing): (Vec<(&'a str, &Option<String>)>, Vec<_>) =
        fields.iter().partition(|(_, value)| value.is_some());
    (
        present.into_iter().map(|(name, _)| name).collect(),
        missing.into_iter().map(|(name, _)| name).collect(),
    )
}

fn presence_detail(present: &[&str], missing: &[&str]) -> String {
    match (present.is_empty(), missing.is_empty()) {
        (false, true) => format!("{} provided", present.join(", ")),
        (true, false) => format!("{} missing", missing.join(", ")),
        (false, false) => format!("{} provided; {} missing", present.join(", "), missing.join(", ")),
        (true, true) => String::new(),
    }
}

pub fn score_profile(profile: &AccountProfile, config: &ScoringConfig) -> CategoryScore {
    let (present, missing) = split_present(&[
        ("name", &profile.name),
        ("bio", &profile.bio),
        ("location", &profile.location),
        ("company", &profile.company),
    ]);
    let basic = MetricScore::new(
        "basic_info",
        present.len() as f64 * BASIC_FIELD_POINTS,
        BASIC_MAX,
        presence_detail(&present, &missing),
    );

    let (present, missing) = split_present(&[("email", &profile.email), ("website", &profile.blog)]);
    let contact = MetricScore::new(
        "contact",
        present.len() as f64 * CONTACT_FIELD_POINTS,
        CONTACT_MAX,
        presence_detail(&present, &missing),
    );

    let twitter = if profile.twitter.is_some() { TWITTER_POINTS } else { 0.0 };
    let followers = saturate(
        profile.followers,
        &curve_or(&config.followers, defaults::default_followers),
        FOLLOWERS_MAX,
    );
    let social = MetricScore::new(
        "social",
        twitter + followers,
        SOCIAL_MAX,
        format!(
            "twitter {}, {} followers",
            if profile.twitter.is_some() { "linked" } else { "not linked" },
            profile.followers
        ),
    );

    CategoryScore::new(Category::Profile, vec![basic, contact, social])
}

pub fn score_repositories(
    repos: &[RepositorySummary],
    config: &ScoringConfig,
    now: DateTime<Utc>,
) -> CategoryScore {
    let total = repos.len();

    let count = MetricScore::new(
        "repository_count",
        saturate(total as u64, &curve_or(&config.repositories, defaults::default_repositories), REPO_COUNT_MAX),
        REPO_COUNT_MAX,
        format!("{} repositories", total),
    );

    let described = repos.iter().filter(|r| r.is_described()).count();
    let documentation = if total == 0 {
        MetricScore::new("documentation", 0.0, DOCUMENTATION_MAX, "no repositories")
    } else {
        let fraction = described as f64 / total as f64;
        MetricScore::new(
            "documentation",
            DOCUMENTATION_MAX * fraction,
            DOCUMENTATION_MAX,
            format!("{} of {} described ({:.1}%)", described, total, fraction * 100.0),
        )
    };

    let languages: HashSet<&str> = repos.iter().filter_map(|r| r.language.as_deref()).collect();
    let language_diversity = MetricScore::new(
        "language_diversity",
        saturate(languages.len() as u64, &curve_or(&config.languages, defaults::default_languages), LANGUAGES_MAX),
        LANGUAGES_MAX,
        format!("{} languages", languages.len()),
    );

    let stars: u64 = repos.iter().map(|r| r.stars).sum();
    let forks: u64 = repos.iter().map(|r| r.forks).sum();
    let community = MetricScore::new(
        "community",
        saturate(
            stars.saturating_add(forks),
            &curve_or(&config.community, defaults::default_community),
            COMMUNITY_MAX,
        ),
        COMMUNITY_MAX,
        format!("{} stars, {} forks", stars, forks),
    );

    let window = maintenance_window(config);
    let recent = match maintenance_cutoff(window, now) {
        Some(since) => repos.iter().filter(|r| r.pushed_since(since)).count(),
        None => repos.iter().filter(|r| r.pushed_at.is_some()).count(),
    };
    let maintenance = MetricScore::new(
        "maintenance",
        saturate(recent as u64, &curve_or(&config.maintenance, defaults::default_maintenance), MAINTENANCE_MAX),
        MAINTENANCE_MAX,
        format!("{} pushed in the last {} days", recent, window.as_secs() / SECS_PER_DAY),
    );

    CategoryScore::new(
        Category::Repositories,
        vec![count, documentation, language_diversity, community, maintenance],
    )
}

fn maintenance_window(config: &ScoringConfig) -> std::time::Duration {
    config
        .maintenance_window
        .as_deref()
        .unwrap_or(defaults::DEFAULT_MAINTENANCE_WINDOW)
        .trim()
        .parse::<humantime::Duration>()
        .map(Into::into)
        .unwrap_or(std::time::Duration::from_secs(180 * SECS_PER_DAY))
}

/// Oldest push that still counts as maintained. `None` when the window
/// reaches past the earliest representable date, so every push counts.
fn maintenance_cutoff(window: std::time::Duration, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
    chrono::Duration::from_std(window)
        .ok()
        .and_then(|window| now.checked_sub_signed(window))
}

pub fn score_activity(events: &[ActivityEvent], config: &ScoringConfig, now: DateTime<Utc>) -> CategoryScore {
    let recent_activity = MetricScore::new(
        "recent_activity",
        saturate(events.len() as u64, &curve_or(&config.events, defaults::default_events), EVENTS_MAX),
        EVENTS_MAX,
        format!("{} recent events", events.len()),
    );

    let kinds: HashSet<&str> = events.iter().map(|e| e.kind.as_str()).collect();
    let event_diversity = MetricScore::new(
        "event_diversity",
        saturate(kinds.len() as u64, &curve_or(&config.event_types, defaults::default_event_types), EVENT_TYPES_MAX),
        EVENT_TYPES_MAX,
        format!("{} event types", kinds.len()),
    );

    // Don't trust upstream ordering; take the newest timestamp
    let consistency = match events.iter().map(|e| e.created_at).max() {
        Some(latest) => {
            let age = (now - latest).max(chrono::Duration::zero());
            let steps: Vec<RecencyStep> = config.recency.clone().unwrap_or_else(defaults::default_recency);
            MetricScore::new(
                "consistency",
                recency(age.to_std().unwrap_or_default(), &steps, RECENCY_MAX),
                RECENCY_MAX,
                format!("last activity {} days ago", age.num_days()),
            )
        }
        None => MetricScore::new("consistency", 0.0, RECENCY_MAX, "no recent activity"),
    };

    CategoryScore::new(Category::Activity, vec![recent_activity, event_diversity, consistency])
}
