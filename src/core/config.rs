// src/core/config.rs
use log::LevelFilter;

use crate::models::PasswordGenerationOptions;

// Fixed defaults for the command-line tool. Nothing here is read from the
// environment; overrides come from command-line flags only.
#[derive(Debug, Clone)]
pub struct Config {
    // Password Generation
    pub default_password_length: usize,
    pub default_password_exclude_similar: bool,
    pub default_batch_count: usize,

    // Logging
    pub log_level: LevelFilter,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            // Password Generation
            default_password_length: 16,
            default_password_exclude_similar: true,
            default_batch_count: 3,

            // Logging
            log_level: LevelFilter::Warn,
        }
    }
}

impl Config {
    // Options used when the tool runs without explicit flags
    pub fn generation_options(&self) -> PasswordGenerationOptions {
        PasswordGenerationOptions::default()
            .with_length(self.default_password_length)
            .with_exclude_similar(self.default_password_exclude_similar)
    }
}

pub fn parse_log_level(level: &str) -> Option<LevelFilter> {
    match level.to_lowercase().as_str() {
        "off" => Some(LevelFilter::Off),
        "error" => Some(LevelFilter::Error),
        "warn" => Some(LevelFilter::Warn),
        "info" => Some(LevelFilter::Info),
        "debug" => Some(LevelFilter::Debug),
        "trace" => Some(LevelFilter::Trace),
        _ => None,
    }
}
