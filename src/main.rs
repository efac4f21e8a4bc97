use clap::Parser;
use std::process::ExitCode;

mod cli;

use crate::cli::{Args, CliCommand};
use rust_passgen::core::config::Config;
use rust_passgen::PasswordGenerator;

fn main() -> ExitCode {
    let args = Args::parse();
    let config = Config::default();
    let log_level = args.log_level.unwrap_or(config.log_level);

    env_logger::Builder::new()
        .filter_level(log_level)
        .format_timestamp_secs()
        .format_module_path(true)
        .init();

    log::debug!("Command line args: {:?}", args);
    log::debug!("Using config: {:?}", config);

    let generator = PasswordGenerator::new();
    let defaults = config.generation_options();

    let result = match &args.command {
        None => cli::handlers::handle_default(
            &generator,
            &defaults,
            config.default_batch_count,
            args.json,
        ),
        Some(CliCommand::Generate(generate)) => {
            let options = generate.generation_options(defaults);
            cli::handlers::handle_generate(&generator, &options, generate.count, args.json)
        }
        Some(CliCommand::Check { password }) => {
            cli::handlers::handle_check(&generator, password, args.json)
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("❌ {}", e);
            ExitCode::FAILURE
        }
    }
}
