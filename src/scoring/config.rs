use serde::{Deserialize, Serialize};

use super::curve::{RecencyStep, Threshold};

/// Tunable scoring curves.
///
/// Bucket maximums and the fixed per-field profile points are not
/// configurable; only the shape of each saturating curve is. Any curve left
/// out falls back to the built-in default.
///
/// Example YAML:
/// ```yaml
/// scoring:
///   followers:
///     - { at_least: 1, points: 5 }
///     - { at_least: 100, points: 15 }
///   maintenance_window: "90d"
///   recency:
///     - { within: "7d", points: 20 }
///     - { within: "30d", points: 10 }
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ScoringConfig {
    /// Follower count curve (part of the social bucket, at most 15 points)
    #[serde(default)]
    pub followers: Option<Vec<Threshold>>,

    /// Repository count curve (at most 20 points)
    #[serde(default)]
    pub repositories: Option<Vec<Threshold>>,

    /// Distinct primary language curve (at most 20 points)
    #[serde(default)]
    pub languages: Option<Vec<Threshold>>,

    /// Total stars + forks curve (at most 20 points)
    #[serde(default)]
    pub community: Option<Vec<Threshold>>,

    /// Recently pushed repository curve (at most 15 points)
    #[serde(default)]
    pub maintenance: Option<Vec<Threshold>>,

    /// How far back a push still counts as maintenance, e.g. "180d"
    #[serde(default)]
    pub maintenance_window: Option<String>,

    /// Event count curve (at most 50 points)
    #[serde(default)]
    pub events: Option<Vec<Threshold>>,

    /// Distinct event type curve (at most 30 points)
    #[serde(default)]
    pub event_types: Option<Vec<Threshold>>,

    /// Latest event age curve (at most 20 points)
    #[serde(default)]
    pub recency: Option<Vec<RecencyStep>>,
}

pub const DEFAULT_MAINTENANCE_WINDOW: &str = "180d";

pub fn default_followers() -> Vec<Threshold> {
    vec![
        Threshold::new(1, 5.0),
        Threshold::new(10, 10.0),
        Threshold::new(50, 15.0),
    ]
}

pub fn default_repositories() -> Vec<Threshold> {
    vec![
        Threshold::new(1, 10.0),
        Threshold::new(5, 15.0),
        Threshold::new(10, 20.0),
    ]
}

pub fn default_languages() -> Vec<Threshold> {
    vec![
        Threshold::new(1, 10.0),
        Threshold::new(3, 15.0),
        Threshold::new(5, 20.0),
    ]
}

pub fn default_community() -> Vec<Threshold> {
    vec![
        Threshold::new(1, 5.0),
        Threshold::new(10, 10.0),
        Threshold::new(50, 15.0),
        Threshold::new(100, 20.0),
    ]
}

pub fn default_maintenance() -> Vec<Threshold> {
    vec![
        Threshold::new(1, 5.0),
        Threshold::new(3, 10.0),
        Threshold::new(5, 15.0),
    ]
}

pub fn default_events() -> Vec<Threshold> {
    vec![
        Threshold::new(1, 15.0),
        Threshold::new(10, 25.0),
        Threshold::new(20, 40.0),
        Threshold::new(30, 50.0),
    ]
}

pub fn default_event_types() -> Vec<Threshold> {
    vec![
        Threshold::new(1, 10.0),
        Threshold::new(3, 20.0),
        Threshold::new(5, 30.0),
    ]
}

pub fn default_recency() -> Vec<RecencyStep> {
    vec![
        RecencyStep::new("7d", 20.0),
        RecencyStep::new("30d", 15.0),
        RecencyStep::new("90d", 5.0),
    ]
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            followers: Some(default_followers()),
            repositories: Some(default_repositories()),
            languages: Some(default_languages()),
            community: Some(default_community()),
            maintenance: Some(default_maintenance()),
            maintenance_window: Some(DEFAULT_MAINTENANCE_WINDOW.to_string()),
            events: Some(default_events()),
            event_types: Some(default_event_types()),
            recency: Some(default_recency()),
        }
    }
}
