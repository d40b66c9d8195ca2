pub mod generator;
pub mod strength;

pub use generator::{
    generate, validate_password_options, PasswordConfig, PasswordOptions, DEFAULT_LENGTH,
    MAX_COUNT, MAX_LENGTH, MIN_LENGTH,
};
pub use strength::{analyze_strength, StrengthReport};
