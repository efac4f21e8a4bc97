// src/generators/password.rs
use rand::rngs::OsRng;
use rand::seq::SliceRandom;
use rand_core::{CryptoRng, RngCore};

use crate::models::{Alphabet, CharacterClass, PasswordGenerationOptions, StrengthReport};
use super::charset::{build_alphabet, build_class_alphabets};
use super::{GeneratorError, Result};

pub const MIN_PASSWORD_LENGTH: usize = 8;
pub const MAX_PASSWORD_LENGTH: usize = 128;

/// Upper bound on whole-password redraws when every class is required.
pub const MAX_REQUIREMENT_ATTEMPTS: usize = 1000;

pub struct PasswordGenerator;

impl PasswordGenerator {
    pub fn new() -> Self {
        PasswordGenerator
    }

    pub fn generate_password(&self, options: &PasswordGenerationOptions) -> Result<String> {
        generate(options)
    }

    pub fn generate_multiple_passwords(
        &self,
        count: usize,
        options: &PasswordGenerationOptions,
    ) -> Result<Vec<String>> {
        generate_many(count, options)
    }

    pub fn analyze_password_strength(&self, password: &str) -> StrengthReport {
        super::strength::estimate(password)
    }
}

impl Default for PasswordGenerator {
    fn default() -> Self {
        Self::new()
    }
}

fn validate_length(length: usize) -> Result<()> {
    if length < MIN_PASSWORD_LENGTH {
        return Err(GeneratorError::InvalidConfiguration(format!(
            "Password length must be at least {} characters (got {})",
            MIN_PASSWORD_LENGTH, length
        )));
    }

    if length > MAX_PASSWORD_LENGTH {
        return Err(GeneratorError::InvalidConfiguration(format!(
            "Password length cannot exceed {} characters (got {})",
            MAX_PASSWORD_LENGTH, length
        )));
    }

    Ok(())
}

/// Generate one password using the operating system's CSPRNG.
pub fn generate(options: &PasswordGenerationOptions) -> Result<String> {
    generate_with_rng(options, &mut OsRng)
}

/// Generate one password from `rng`. The `CryptoRng` bound keeps
/// statistical generators out.
pub fn generate_with_rng<R>(options: &PasswordGenerationOptions, rng: &mut R) -> Result<String>
where
    R: RngCore + CryptoRng,
{
    validate_length(options.length)?;
    let alphabet = build_alphabet(options)?;

    if !options.require_all_classes {
        return draw(&alphabet, options.length, rng);
    }

    let required = build_class_alphabets(options);
    if required.len() > options.length {
        return Err(GeneratorError::InvalidConfiguration(format!(
            "Password length {} is too short to contain all {} character classes",
            options.length,
            required.len()
        )));
    }

    for _ in 0..MAX_REQUIREMENT_ATTEMPTS {
        let password = draw(&alphabet, options.length, rng)?;
        if covers_all(&password, &required) {
            return Ok(password);
        }
    }

    log::warn!(
        "Gave up after {} attempts to include every character class",
        MAX_REQUIREMENT_ATTEMPTS
    );
    Err(GeneratorError::InvalidConfiguration(format!(
        "Could not include every character class within {} attempts",
        MAX_REQUIREMENT_ATTEMPTS
    )))
}

/// Generate `count` independent passwords with the same options.
pub fn generate_many(count: usize, options: &PasswordGenerationOptions) -> Result<Vec<String>> {
    if count < 1 {
        return Err(GeneratorError::InvalidConfiguration(
            "Password count must be at least 1".to_string(),
        ));
    }

    log::debug!("Generating {} passwords of length {}", count, options.length);
    (0..count).map(|_| generate(options)).collect()
}

// Each position is an independent uniform pick; `choose` samples its index
// without modulo bias.
fn draw<R>(alphabet: &Alphabet, length: usize, rng: &mut R) -> Result<String>
where
    R: RngCore + CryptoRng,
{
    let chars = alphabet.as_slice();
    (0..length)
        .map(|_| {
            chars.choose(&mut *rng).copied().ok_or_else(|| {
                GeneratorError::InvalidConfiguration("Alphabet is empty".to_string())
            })
        })
        .collect()
}

fn covers_all(password: &str, required: &[(CharacterClass, Alphabet)]) -> bool {
    required
        .iter()
        .all(|(_, alphabet)| password.chars().any(|c| alphabet.contains(c)))
}
