// src/generators/strength.rs
//
// Heuristic scoring. The score is a sum of non-negative terms, each
// non-decreasing in length or in class presence, so appending a character
// never lowers it:
//
//   score = min(chars, LENGTH_CAP) * LENGTH_POINTS_PER_CHAR
//         + CLASS_BONUS * classes_present
//
// which tops out at 40 + 60 = 100.
use crate::models::{CharacterClass, StrengthLabel, StrengthReport};

pub const LENGTH_POINTS_PER_CHAR: usize = 2;
/// Characters beyond this add nothing to the score.
pub const LENGTH_CAP: usize = 20;
pub const CLASS_BONUS: usize = 15;
pub const MAX_SCORE: u8 = 100;

/// Lower score bound of each label, weakest first.
pub const LABEL_THRESHOLDS: [(u8, StrengthLabel); 5] = [
    (0, StrengthLabel::VeryWeak),
    (20, StrengthLabel::Weak),
    (40, StrengthLabel::Moderate),
    (60, StrengthLabel::Strong),
    (80, StrengthLabel::VeryStrong),
];

pub fn label_for(score: u8) -> StrengthLabel {
    LABEL_THRESHOLDS
        .iter()
        .rev()
        .find(|(min, _)| score >= *min)
        .map(|(_, label)| *label)
        .unwrap_or(StrengthLabel::VeryWeak)
}

/// Score any string. Never fails; the empty string scores 0.
pub fn estimate(password: &str) -> StrengthReport {
    let mut length = 0;
    let mut has_lowercase = false;
    let mut has_uppercase = false;
    let mut has_digits = false;
    let mut has_symbols = false;

    for c in password.chars() {
        length += 1;
        match CharacterClass::classify(c) {
            CharacterClass::Lowercase => has_lowercase = true,
            CharacterClass::Uppercase => has_uppercase = true,
            CharacterClass::Digits => has_digits = true,
            CharacterClass::Symbols => has_symbols = true,
        }
    }

    let classes = [has_lowercase, has_uppercase, has_digits, has_symbols]
        .iter()
        .filter(|present| **present)
        .count();

    let raw = length.min(LENGTH_CAP) * LENGTH_POINTS_PER_CHAR + classes * CLASS_BONUS;
    let score = raw.min(MAX_SCORE as usize) as u8;

    StrengthReport {
        score,
        label: label_for(score),
        length,
        has_lowercase,
        has_uppercase,
        has_digits,
        has_symbols,
    }
}
