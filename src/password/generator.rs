use rand::Rng;
use serde::{Deserialize, Serialize};

pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const DIGITS: &str = "0123456789";
pub const SYMBOLS: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";

pub const MIN_LENGTH: usize = 8;
pub const MAX_LENGTH: usize = 128;
pub const DEFAULT_LENGTH: usize = 16;
pub const MAX_COUNT: usize = 10;

/// Which character sets a generated password draws from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordOptions {
    pub length: usize,
    pub lowercase: bool,
    pub uppercase: bool,
    pub digits: bool,
    pub symbols: bool,
}

impl Default for PasswordOptions {
    fn default() -> Self {
        Self {
            length: DEFAULT_LENGTH,
            lowercase: true,
            uppercase: true,
            digits: true,
            symbols: true,
        }
    }
}

impl PasswordOptions {
    /// Characters to draw from. Falls back to letters and digits when every
    /// set is disabled.
    pub fn pool(&self) -> Vec<char> {
        let mut pool = String::new();
        if self.lowercase {
            pool.push_str(LOWERCASE);
        }
        if self.uppercase {
            pool.push_str(UPPERCASE);
        }
        if self.digits {
            pool.push_str(DIGITS);
        }
        if self.symbols {
            pool.push_str(SYMBOLS);
        }
        if pool.is_empty() {
            tracing::warn!("no character sets enabled, using letters and digits");
            pool = format!("{}{}{}", LOWERCASE, UPPERCASE, DIGITS);
        }
        pool.chars().collect()
    }
}

/// Defaults for the `password` subcommand, read from the config file.
///
/// Example YAML:
/// ```yaml
/// password:
///   length: 24
///   count: 3
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct PasswordConfig {
    #[serde(default)]
    pub length: Option<usize>,
    #[serde(default)]
    pub count: Option<usize>,
}

/// Generate a password with each character drawn uniformly from the pool
pub fn generate<R: Rng>(options: &PasswordOptions, rng: &mut R) -> String {
    let pool = options.pool();
    (0..options.length)
        .map(|_| pool[rng.random_range(0..pool.len())])
        .collect()
}

/// Check length and count bounds, collecting every problem
pub fn validate_password_options(length: usize, count: usize) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();
    if !(MIN_LENGTH..=MAX_LENGTH).contains(&length) {
        errors.push(format!(
            "password.length: must be between {} and {}, got {}",
            MIN_LENGTH, MAX_LENGTH, length
        ));
    }
    if !(1..=MAX_COUNT).contains(&count) {
        errors.push(format!("password.count: must be between 1 and {}, got {}", MAX_COUNT, count));
    }
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
