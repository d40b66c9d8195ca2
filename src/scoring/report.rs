use serde::Serialize;
use std::fmt;

/// Highest possible grand total (three categories of 100)
pub const MAX_TOTAL: f64 = 300.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Profile,
    Repositories,
    Activity,
}

impl Category {
    pub fn title(&self) -> &'static str {
        match self {
            Category::Profile => "PROFILE COMPLETENESS",
            Category::Repositories => "REPOSITORY QUALITY",
            Category::Activity => "ACTIVITY CONSISTENCY",
        }
    }

    pub fn max(&self) -> f64 {
        100.0
    }
}

/// Points earned for one sub-metric
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricScore {
    pub name: &'static str, // e.g. "documentation"
    pub points: f64,
    pub max: f64,
    pub detail: String, // e.g. "8 of 10 repositories described (80.0%)"
}

impl MetricScore {
    /// Build a metric, keeping points inside `[0, max]`
    pub fn new(name: &'static str, points: f64, max: f64, detail: impl Into<String>) -> Self {
        Self {
            name,
            points: points.clamp(0.0, max),
            max,
            detail: detail.into(),
        }
    }

    pub fn ratio(&self) -> f64 {
        if self.max > 0.0 {
            self.points / self.max
        } else {
            0.0
        }
    }
}

/// Sub-metric scores of one category, in display order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryScore {
    pub category: Category,
    pub metrics: Vec<MetricScore>,
    pub subtotal: f64,
}

impl CategoryScore {
    pub fn new(category: Category, metrics: Vec<MetricScore>) -> Self {
        let subtotal = metrics.iter().map(|m| m.points).sum();
        Self {
            category,
            metrics,
            subtotal,
        }
    }

    /// Points earned for the named sub-metric
    pub fn points(&self, name: &str) -> Option<f64> {
        self.metrics.iter().find(|m| m.name == name).map(|m| m.points)
    }

    pub fn max(&self) -> f64 {
        self.category.max()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Tier {
    Excellent,
    Good,
    Developing,
    #[serde(rename = "Needs Work")]
    NeedsWork,
}

impl Tier {
    /// Inclusive lower bounds: 240, 180, 120
    pub fn from_total(total: f64) -> Self {
        if total >= 240.0 {
            Tier::Excellent
        } else if total >= 180.0 {
            Tier::Good
        } else if total >= 120.0 {
            Tier::Developing
        } else {
            Tier::NeedsWork
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Tier::Excellent => "Excellent",
            Tier::Good => "Good",
            Tier::Developing => "Developing",
            Tier::NeedsWork => "Needs Work",
        }
    }

    /// One-line verdict shown under the recommendations
    pub fn verdict(&self) -> &'static str {
        match self {
            Tier::Excellent => "Excellent GitHub presence! Keep up the great work!",
            Tier::Good => "Good GitHub presence with room for improvement",
            Tier::Developing => "A developing presence; keep building on it",
            Tier::NeedsWork => "Focus on building a stronger GitHub presence",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreReport {
    pub profile: CategoryScore,
    pub repositories: CategoryScore,
    pub activity: CategoryScore,
    pub total: f64,
    pub tier: Tier,
}

impl ScoreReport {
    pub fn new(profile: CategoryScore, repositories: CategoryScore, activity: CategoryScore) -> Self {
        let total = (profile.subtotal + repositories.subtotal + activity.subtotal).clamp(0.0, MAX_TOTAL);
        Self {
            profile,
            repositories,
            activity,
            total,
            tier: Tier::from_total(total),
        }
    }

    pub fn categories(&self) -> [&CategoryScore; 3] {
        [&self.profile, &self.repositories, &self.activity]
    }

    /// Improvement hints for categories below 80 points
    pub fn recommendations(&self) -> Vec<&'static str> {
        const THRESHOLD: f64 = 80.0;
        let mut hints = Vec::new();

        if self.profile.subtotal < THRESHOLD {
            hints.push("Complete your profile with missing information");
        }
        if self.repositories.subtotal < THRESHOLD {
            hints.push("Add descriptions to your repositories");
            hints.push("Diversify your programming languages");
        }
        if self.activity.subtotal < THRESHOLD {
            hints.push("Increase your GitHub activity and consistency");
        }
        hints
    }
}
