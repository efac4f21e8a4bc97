// src/generators/mod.rs
use thiserror::Error;

pub mod charset;
pub mod password;
pub mod strength;

pub use charset::{build_alphabet, build_class_alphabets, SIMILAR_CHARACTERS};
pub use password::{PasswordGenerator, MAX_PASSWORD_LENGTH, MIN_PASSWORD_LENGTH};
pub use strength::estimate;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GeneratorError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
}

pub type Result<T> = std::result::Result<T, GeneratorError>;
