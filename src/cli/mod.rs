// src/cli/mod.rs
use clap::Parser;
use log::LevelFilter;

use rust_passgen::core::config::parse_log_level;

pub mod commands;
pub mod handlers;

pub use commands::CliCommand;

fn log_level_arg(value: &str) -> Result<LevelFilter, String> {
    parse_log_level(value).ok_or_else(|| {
        format!("unknown log level '{}' (expected off, error, warn, info, debug or trace)", value)
    })
}

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, global = true, value_parser = log_level_arg)]
    pub log_level: Option<LevelFilter>,

    /// Command to execute; prints a sample password and batch when omitted
    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn args_definition_is_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn no_arguments_means_default_run() {
        let args = Args::try_parse_from(["rust_passgen"]).unwrap();
        assert!(args.command.is_none());
        assert!(!args.json);
        assert!(args.log_level.is_none());
    }

    #[test]
    fn check_takes_a_password() {
        let args = Args::try_parse_from(["rust_passgen", "--json", "check", "hunter2"]).unwrap();
        assert!(args.json);
        match args.command {
            Some(CliCommand::Check { password }) => assert_eq!(password, "hunter2"),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn log_level_is_parsed() {
        let args = Args::try_parse_from(["rust_passgen", "--log-level", "DEBUG", "check", "x"]).unwrap();
        assert_eq!(args.log_level, Some(LevelFilter::Debug));
    }

    #[test]
    fn unknown_log_level_is_rejected() {
        let err = Args::try_parse_from(["rust_passgen", "--log-level", "loud", "check", "aaaaaaaa"])
            .unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
    }
}
