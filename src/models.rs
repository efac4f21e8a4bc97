// src/models.rs
use serde::Serialize;
use std::fmt;

// Password generation options
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PasswordGenerationOptions {
    pub length: usize,
    pub include_lowercase: bool,
    pub include_uppercase: bool,
    pub include_numbers: bool,
    pub include_symbols: bool,
    pub exclude_similar: bool,
    /// Redraw until every enabled class shows up at least once.
    pub require_all_classes: bool,
}

impl Default for PasswordGenerationOptions {
    fn default() -> Self {
        Self {
            length: 16,
            include_lowercase: true,
            include_uppercase: true,
            include_numbers: true,
            include_symbols: true,
            exclude_similar: true,
            require_all_classes: false,
        }
    }
}

impl PasswordGenerationOptions {
    pub fn with_length(mut self, length: usize) -> Self {
        self.length = length;
        self
    }

    pub fn with_lowercase(mut self, enabled: bool) -> Self {
        self.include_lowercase = enabled;
        self
    }

    pub fn with_uppercase(mut self, enabled: bool) -> Self {
        self.include_uppercase = enabled;
        self
    }

    pub fn with_numbers(mut self, enabled: bool) -> Self {
        self.include_numbers = enabled;
        self
    }

    pub fn with_symbols(mut self, enabled: bool) -> Self {
        self.include_symbols = enabled;
        self
    }

    pub fn with_exclude_similar(mut self, enabled: bool) -> Self {
        self.exclude_similar = enabled;
        self
    }

    pub fn with_require_all_classes(mut self, enabled: bool) -> Self {
        self.require_all_classes = enabled;
        self
    }

    /// Whether `class` is switched on by these options.
    pub fn includes(&self, class: CharacterClass) -> bool {
        match class {
            CharacterClass::Lowercase => self.include_lowercase,
            CharacterClass::Uppercase => self.include_uppercase,
            CharacterClass::Digits => self.include_numbers,
            CharacterClass::Symbols => self.include_symbols,
        }
    }

    /// Enabled classes in alphabet order.
    pub fn enabled_classes(&self) -> Vec<CharacterClass> {
        CharacterClass::ALL
            .into_iter()
            .filter(|class| self.includes(*class))
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum CharacterClass {
    Lowercase,
    Uppercase,
    Digits,
    Symbols,
}

impl CharacterClass {
    /// Every class, in the order alphabets are assembled.
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Lowercase,
        CharacterClass::Uppercase,
        CharacterClass::Digits,
        CharacterClass::Symbols,
    ];

    pub fn base_characters(&self) -> &'static str {
        match self {
            CharacterClass::Lowercase => "abcdefghijklmnopqrstuvwxyz",
            CharacterClass::Uppercase => "ABCDEFGHIJKLMNOPQRSTUVWXYZ",
            CharacterClass::Digits => "0123456789",
            CharacterClass::Symbols => "!@#$%^&*()-_=+[]{}|;:,.<>?",
        }
    }

    /// Anything outside ASCII letters and digits counts as a symbol,
    /// including whitespace, control and non-ASCII characters.
    pub fn classify(c: char) -> CharacterClass {
        if c.is_ascii_lowercase() {
            CharacterClass::Lowercase
        } else if c.is_ascii_uppercase() {
            CharacterClass::Uppercase
        } else if c.is_ascii_digit() {
            CharacterClass::Digits
        } else {
            CharacterClass::Symbols
        }
    }
}

impl fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CharacterClass::Lowercase => write!(f, "lowercase"),
            CharacterClass::Uppercase => write!(f, "uppercase"),
            CharacterClass::Digits => write!(f, "digits"),
            CharacterClass::Symbols => write!(f, "symbols"),
        }
    }
}

/// Ordered, duplicate-free set of characters a password is drawn from.
///
/// Only built through [`Alphabet::from_chars`], which rejects empty input,
/// so every `Alphabet` has at least one character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    chars: Vec<char>,
}

impl Alphabet {
    /// Keeps the first occurrence of each character. Returns `None` when
    /// nothing is left.
    pub fn from_chars<I: IntoIterator<Item = char>>(chars: I) -> Option<Self> {
        let mut unique: Vec<char> = Vec::new();
        for c in chars {
            if !unique.contains(&c) {
                unique.push(c);
            }
        }

        if unique.is_empty() {
            None
        } else {
            Some(Self { chars: unique })
        }
    }

    pub fn as_slice(&self) -> &[char] {
        &self.chars
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(&c)
    }

    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        self.chars.iter().copied()
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in &self.chars {
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum StrengthLabel {
    #[serde(rename = "Very Weak")]
    VeryWeak,
    Weak,
    Moderate,
    Strong,
    #[serde(rename = "Very Strong")]
    VeryStrong,
}

impl fmt::Display for StrengthLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StrengthLabel::VeryWeak => write!(f, "Very Weak"),
            StrengthLabel::Weak => write!(f, "Weak"),
            StrengthLabel::Moderate => write!(f, "Moderate"),
            StrengthLabel::Strong => write!(f, "Strong"),
            StrengthLabel::VeryStrong => write!(f, "Very Strong"),
        }
    }
}

// Result of scoring a single password
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StrengthReport {
    pub score: u8,
    pub label: StrengthLabel,
    pub length: usize,
    pub has_lowercase: bool,
    pub has_uppercase: bool,
    pub has_digits: bool,
    pub has_symbols: bool,
}

impl StrengthReport {
    pub fn class_count(&self) -> usize {
        [self.has_lowercase, self.has_uppercase, self.has_digits, self.has_symbols]
            .iter()
            .filter(|present| **present)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options_match_documented_defaults() {
        let options = PasswordGenerationOptions::default();
        assert_eq!(options.length, 16);
        assert!(options.include_lowercase);
        assert!(options.include_uppercase);
        assert!(options.include_numbers);
        assert!(options.include_symbols);
        assert!(options.exclude_similar);
        assert!(!options.require_all_classes);
    }

    #[test]
    fn setters_override_single_fields() {
        let options = PasswordGenerationOptions::default()
            .with_length(32)
            .with_symbols(false)
            .with_exclude_similar(false);

        assert_eq!(options.length, 32);
        assert!(!options.include_symbols);
        assert!(!options.exclude_similar);
        assert_eq!(
            options.enabled_classes(),
            vec![CharacterClass::Lowercase, CharacterClass::Uppercase, CharacterClass::Digits]
        );
    }

    #[test]
    fn classify_treats_non_alphanumerics_as_symbols() {
        assert_eq!(CharacterClass::classify('q'), CharacterClass::Lowercase);
        assert_eq!(CharacterClass::classify('Q'), CharacterClass::Uppercase);
        assert_eq!(CharacterClass::classify('7'), CharacterClass::Digits);
        assert_eq!(CharacterClass::classify('#'), CharacterClass::Symbols);
        assert_eq!(CharacterClass::classify(' '), CharacterClass::Symbols);
        assert_eq!(CharacterClass::classify('é'), CharacterClass::Symbols);
        assert_eq!(CharacterClass::classify('\u{0}'), CharacterClass::Symbols);
    }

    #[test]
    fn alphabet_drops_duplicates_and_keeps_order() {
        let alphabet = Alphabet::from_chars("abcabd".chars()).unwrap();
        assert_eq!(alphabet.as_slice(), &['a', 'b', 'c', 'd']);
        assert_eq!(alphabet.to_string(), "abcd");
    }

    #[test]
    fn alphabet_rejects_empty_input() {
        assert!(Alphabet::from_chars(std::iter::empty()).is_none());
    }

    #[test]
    fn labels_are_ordered_and_render_with_spaces() {
        assert!(StrengthLabel::VeryWeak < StrengthLabel::Weak);
        assert!(StrengthLabel::Strong < StrengthLabel::VeryStrong);
        assert_eq!(StrengthLabel::VeryStrong.to_string(), "Very Strong");
        assert_eq!(
            serde_json::to_string(&StrengthLabel::VeryWeak).unwrap(),
            "\"Very Weak\""
        );
    }
}
