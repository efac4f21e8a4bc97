// src/lib.rs
//! Cryptographically random password generation and heuristic strength
//! scoring.

pub mod core;
pub mod generators;
pub mod models;
pub mod utils;

pub use crate::generators::{GeneratorError, PasswordGenerator};
pub use crate::models::{
    Alphabet, CharacterClass, PasswordGenerationOptions, StrengthLabel, StrengthReport,
};

/// Generate one password for `options`.
pub fn generate_password(options: &PasswordGenerationOptions) -> generators::Result<String> {
    generators::password::generate(options)
}

/// Generate `count` independent passwords for `options`.
pub fn generate_multiple_passwords(
    count: usize,
    options: &PasswordGenerationOptions,
) -> generators::Result<Vec<String>> {
    generators::password::generate_many(count, options)
}

/// Score a password. Accepts any string.
pub fn estimate_password_strength(password: &str) -> StrengthReport {
    generators::strength::estimate(password)
}
