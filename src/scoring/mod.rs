pub mod config;
pub mod curve;
pub mod engine;
pub mod report;
pub mod validation;

pub use config::ScoringConfig;
pub use curve::{RecencyStep, Threshold};
pub use engine::calculate_report;
pub use report::{Category, CategoryScore, MetricScore, ScoreReport, Tier, MAX_TOTAL};
pub use validation::validate_scoring;
