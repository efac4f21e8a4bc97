// src/cli/handlers.rs
use std::error::Error;

use serde_json::json;

use rust_passgen::utils::{format_strength_report, format_strength_summary, to_json, GeneratedPassword};
use rust_passgen::{PasswordGenerationOptions, PasswordGenerator};

// Handlers for CLI commands

// No arguments: one password with its report, then a small batch
pub fn handle_default(
    generator: &PasswordGenerator,
    options: &PasswordGenerationOptions,
    batch_count: usize,
    json_output: bool,
) -> Result<(), Box<dyn Error>> {
    let password = generator.generate_password(options)?;
    let report = generator.analyze_password_strength(&password);
    let batch = generator.generate_multiple_passwords(batch_count, options)?;

    if json_output {
        let batch: Vec<_> = batch
            .iter()
            .map(|p| json!({ "password": p, "strength": generator.analyze_password_strength(p) }))
            .collect();
        let value = json!({ "password": password, "strength": report, "additional": batch });
        println!("{}", to_json(&value)?);
        return Ok(());
    }

    println!("Generated Password: {}", password);
    println!("\n{}", format_strength_report(&report));

    println!("\nMultiple passwords:");
    for (i, p) in batch.iter().enumerate() {
        println!("{}. {}", i + 1, p);
    }

    Ok(())
}

pub fn handle_generate(
    generator: &PasswordGenerator,
    options: &PasswordGenerationOptions,
    count: usize,
    json_output: bool,
) -> Result<(), Box<dyn Error>> {
    let passwords = generator.generate_multiple_passwords(count, options)?;
    let reports: Vec<_> = passwords
        .iter()
        .map(|p| generator.analyze_password_strength(p))
        .collect();

    if json_output {
        let entries: Vec<GeneratedPassword> = passwords
            .iter()
            .zip(&reports)
            .map(|(password, strength)| GeneratedPassword { password, strength })
            .collect();
        println!("{}", to_json(&entries)?);
        return Ok(());
    }

    if let [password] = passwords.as_slice() {
        println!("Generated Password: {}", password);
        println!("\n{}", format_strength_report(&reports[0]));
        return Ok(());
    }

    for (i, (password, report)) in passwords.iter().zip(&reports).enumerate() {
        println!("{}. {}  [{}]", i + 1, password, format_strength_summary(report));
    }

    Ok(())
}

pub fn handle_check(
    generator: &PasswordGenerator,
    password: &str,
    json_output: bool,
) -> Result<(), Box<dyn Error>> {
    let report = generator.analyze_password_strength(password);

    if json_output {
        println!("{}", to_json(&report)?);
    } else {
        println!("{}", format_strength_report(&report));
    }

    Ok(())
}
