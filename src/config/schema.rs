use serde::{Deserialize, Serialize};

use crate::password::PasswordConfig;
use crate::scoring::ScoringConfig;

#[derive(Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub scoring: Option<ScoringConfig>,
    #[serde(default)]
    pub password: Option<PasswordConfig>,
}
