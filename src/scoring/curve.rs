use serde::{Deserialize, Serialize};
use std::time::Duration;

/// One step of a saturating curve: reaching `at_least` earns `points`.
///
/// Example YAML:
/// ```yaml
/// - { at_least: 5, points: 15 }
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Threshold {
    pub at_least: u64,
    pub points: f64,
}

impl Threshold {
    pub fn new(at_least: u64, points: f64) -> Self {
        Self { at_least, points }
    }
}

/// One step of a recency curve: an event no older than `within` earns `points`.
///
/// `within` is a humantime duration such as "7d" or "2weeks".
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct RecencyStep {
    pub within: String,
    pub points: f64,
}

impl RecencyStep {
    pub fn new(within: &str, points: f64) -> Self {
        Self {
            within: within.to_string(),
            points,
        }
    }
}

/// Evaluate a threshold table against `value`.
///
/// The result is the best reward among the steps already reached, clamped to
/// `[0, cap]`. Taking the maximum (rather than the first match) keeps the
/// curve non-decreasing even if the table is unsorted.
pub fn saturate(value: u64, steps: &[Threshold], cap: f64) -> f64 {
    steps
        .iter()
        .filter(|step| value >= step.at_least)
        .map(|step| step.points)
        .fold(0.0, f64::max)
        .clamp(0.0, cap)
}

/// Evaluate a recency table against the age of the latest event.
///
/// Steps whose `within` fails to parse are skipped; validation reports them.
pub fn recency(age: Duration, steps: &[RecencyStep], cap: f64) -> f64 {
    steps
        .iter()
        .filter_map(|step| {
            humantime::parse_duration(step.within.trim())
                .ok()
                .map(|within| (within, step.points))
        })
        .filter(|(within, _)| age <= *within)
        .map(|(_, points)| points)
        .fold(0.0, f64::max)
        .clamp(0.0, cap)
}
