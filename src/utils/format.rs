// src/utils/format.rs
use serde::Serialize;

use crate::models::StrengthReport;

fn yes_no(flag: bool) -> &'static str {
    if flag { "yes" } else { "no" }
}

// Multi-line, human-readable strength report
pub fn format_strength_report(report: &StrengthReport) -> String {
    format!(
        "Password Strength: {} ({}/100)\n\
         Length: {} characters\n\
         Lowercase: {}  Uppercase: {}  Digits: {}  Symbols: {}",
        report.label,
        report.score,
        report.length,
        yes_no(report.has_lowercase),
        yes_no(report.has_uppercase),
        yes_no(report.has_digits),
        yes_no(report.has_symbols),
    )
}

// One-line summary used in batch listings
pub fn format_strength_summary(report: &StrengthReport) -> String {
    format!("{} ({}/100)", report.label, report.score)
}

#[derive(Debug, Serialize)]
pub struct GeneratedPassword<'a> {
    pub password: &'a str,
    pub strength: &'a StrengthReport,
}

pub fn to_json<T: Serialize>(value: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(value)
}
