use super::config::ScoringConfig;
use super::curve::{RecencyStep, Threshold};

fn check_points(field: &str, index: usize, points: f64, cap: f64, errors: &mut Vec<String>) {
    if !points.is_finite() || points < 0.0 {
        errors.push(format!("{}[{}].points: must be a non-negative number", field, index));
    } else if points > cap {
        errors.push(format!(
            "{}[{}].points: {} exceeds the bucket maximum of {}",
            field, index, points, cap
        ));
    }
}

fn check_thresholds(field: &str, steps: &Option<Vec<Threshold>>, cap: f64, errors: &mut Vec<String>) {
    let Some(steps) = steps else { return };
    for (i, step) in steps.iter().enumerate() {
        check_points(field, i, step.points, cap, errors);
        if steps[..i].iter().any(|earlier| earlier.at_least == step.at_least) {
            errors.push(format!("{}[{}].at_least: duplicate threshold {}", field, i, step.at_least));
        }
    }
}

fn check_recency(field: &str, steps: &Option<Vec<RecencyStep>>, cap: f64, errors: &mut Vec<String>) {
    let Some(steps) = steps else { return };
    for (i, step) in steps.iter().enumerate() {
        check_points(field, i, step.points, cap, errors);
        if let Err(e) = humantime::parse_duration(step.within.trim()) {
            errors.push(format!("{}[{}].within: invalid duration '{}' - {}", field, i, step.within, e));
        }
    }
}

/// Validate scoring configuration at startup.
/// Returns all validation errors at once (not just the first).
pub fn validate_scoring(config: &ScoringConfig) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    check_thresholds("scoring.followers", &config.followers, 15.0, &mut errors);
    check_thresholds("scoring.repositories", &config.repositories, 20.0, &mut errors);
    check_thresholds("scoring.languages", &config.languages, 20.0, &mut errors);
    check_thresholds("scoring.community", &config.community, 20.0, &mut errors);
    check_thresholds("scoring.maintenance", &config.maintenance, 15.0, &mut errors);
    check_thresholds("scoring.events", &config.events, 50.0, &mut errors);
    check_thresholds("scoring.event_types", &config.event_types, 30.0, &mut errors);
    check_recency("scoring.recency", &config.recency, 20.0, &mut errors);

    if let Some(ref window) = config.maintenance_window {
        match humantime::parse_duration(window.trim()) {
            Ok(d) if d.is_zero() => {
                errors.push("scoring.maintenance_window: must be longer than zero".to_string());
            }
            Ok(_) => {}
            Err(e) => errors.push(format!(
                "scoring.maintenance_window: invalid duration '{}' - {}",
                window, e
            )),
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty() -> ScoringConfig {
        ScoringConfig {
            followers: None,
            repositories: None,
            languages: None,
            community: None,
            maintenance: None,
            maintenance_window: None,
            events: None,
            event_types: None,
            recency: None,
        }
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_scoring(&ScoringConfig::default()).is_ok());
    }

    #[test]
    fn test_empty_config() {
        assert!(validate_scoring(&empty()).is_ok());
    }

    #[test]
    fn test_points_above_cap() {
        let config = ScoringConfig {
            followers: Some(vec![Threshold::new(1, 20.0)]),
            ..empty()
        };
        let errors = validate_scoring(&config).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("scoring.followers[0].points"));
        assert!(errors[0].contains("15"));
    }

    #[test]
    fn test_negative_points() {
        let config = ScoringConfig {
            events: Some(vec![Threshold::new(1, -1.0)]),
            ..empty()
        };
        let errors = validate_scoring(&config).unwrap_err();
        assert!(errors[0].contains("non-negative"));
    }

    #[test]
    fn test_duplicate_threshold() {
        let config = ScoringConfig {
            languages: Some(vec![Threshold::new(3, 10.0), Threshold::new(3, 15.0)]),
            ..empty()
        };
        let errors = validate_scoring(&config).unwrap_err();
        assert!(errors[0].contains("scoring.languages[1].at_least"));
    }

    #[test]
    fn test_invalid_maintenance_window() {
        let config = ScoringConfig {
            maintenance_window: Some("half a year".to_string()),
            ..empty()
        };
        let errors = validate_scoring(&config).unwrap_err();
        assert!(errors[0].contains("scoring.maintenance_window"));
    }

    #[test]
    fn test_zero_maintenance_window() {
        let config = ScoringConfig {
            maintenance_window: Some("0s".to_string()),
            ..empty()
        };
        assert!(validate_scoring(&config).is_err());
    }

    #[test]
    fn test_invalid_recency_duration() {
        let config = ScoringConfig {
            recency: Some(vec![RecencyStep::new("yesterday", 10.0)]),
            ..empty()
        };
        let errors = validate_scoring(&config).unwrap_err();
        assert!(errors[0].contains("scoring.recency[0].within"));
    }

    #[test]
    fn test_collects_all_errors() {
        let config = ScoringConfig {
            followers: Some(vec![Threshold::new(1, 99.0)]), // Error 1
            maintenance_window: Some("bad".to_string()),     // Error 2
            recency: Some(vec![RecencyStep::new("7d", 21.0)]), // Error 3
            ..empty()
        };
        let errors = validate_scoring(&config).unwrap_err();
        assert_eq!(errors.len(), 3);
    }
}
