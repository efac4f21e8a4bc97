// src/cli/commands.rs
use clap::Subcommand;

use rust_passgen::PasswordGenerationOptions;

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Generate one or more passwords
    Generate(GenerateArgs),

    /// Estimate the strength of a password
    Check {
        /// Password to score
        #[arg(required = true)]
        password: String,
    },
}

#[derive(clap::Args, Debug)]
pub struct GenerateArgs {
    /// Password length (8-128)
    #[arg(long, short)]
    pub length: Option<usize>,

    /// Number of passwords to generate
    #[arg(long, short, default_value_t = 1)]
    pub count: usize,

    /// Leave out lowercase letters
    #[arg(long)]
    pub no_lowercase: bool,

    /// Leave out uppercase letters
    #[arg(long)]
    pub no_uppercase: bool,

    /// Leave out digits
    #[arg(long)]
    pub no_numbers: bool,

    /// Leave out symbols
    #[arg(long)]
    pub no_symbols: bool,

    /// Keep look-alike characters such as l, 1, I, O and 0
    #[arg(long)]
    pub allow_similar: bool,

    /// Make sure every selected character class appears
    #[arg(long)]
    pub require_all: bool,
}

impl GenerateArgs {
    // Apply the flags on top of the configured defaults
    pub fn generation_options(&self, defaults: PasswordGenerationOptions) -> PasswordGenerationOptions {
        let mut options = defaults
            .with_lowercase(!self.no_lowercase)
            .with_uppercase(!self.no_uppercase)
            .with_numbers(!self.no_numbers)
            .with_symbols(!self.no_symbols)
            .with_require_all_classes(self.require_all);
        if let Some(length) = self.length {
            options = options.with_length(length);
        }
        if self.allow_similar {
            options = options.with_exclude_similar(false);
        }
        options
    }
}
