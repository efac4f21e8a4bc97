// src/generators/charset.rs
use crate::models::{Alphabet, CharacterClass, PasswordGenerationOptions};
use super::{GeneratorError, Result};

/// Characters removed when `exclude_similar` is set, whichever classes are on.
pub const SIMILAR_CHARACTERS: [char; 6] = ['l', 'o', 'I', 'O', '0', '1'];

fn class_characters(class: CharacterClass, exclude_similar: bool) -> impl Iterator<Item = char> {
    class
        .base_characters()
        .chars()
        .filter(move |c| !(exclude_similar && SIMILAR_CHARACTERS.contains(c)))
}

/// Assemble the alphabet for `options`: enabled classes in class order,
/// minus the similar-looking characters when requested.
pub fn build_alphabet(options: &PasswordGenerationOptions) -> Result<Alphabet> {
    let classes = options.enabled_classes();
    if classes.is_empty() {
        return Err(GeneratorError::InvalidConfiguration(
            "At least one character set must be selected".to_string(),
        ));
    }

    let alphabet = Alphabet::from_chars(
        classes
            .iter()
            .flat_map(|class| class_characters(*class, options.exclude_similar)),
    )
    .ok_or_else(|| {
        GeneratorError::InvalidConfiguration(
            "No characters left after excluding similar characters".to_string(),
        )
    })?;

    log::debug!(
        "Built alphabet of {} characters from {} classes",
        alphabet.len(),
        classes.len()
    );
    Ok(alphabet)
}

/// Per-class subsets of the enabled classes after filtering. Classes that
/// filter down to nothing are left out.
pub fn build_class_alphabets(
    options: &PasswordGenerationOptions,
) -> Vec<(CharacterClass, Alphabet)> {
    options
        .enabled_classes()
        .into_iter()
        .filter_map(|class| {
            Alphabet::from_chars(class_characters(class, options.exclude_similar))
                .map(|alphabet| (class, alphabet))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn only(class: CharacterClass) -> PasswordGenerationOptions {
        PasswordGenerationOptions::default()
            .with_lowercase(class == CharacterClass::Lowercase)
            .with_uppercase(class == CharacterClass::Uppercase)
            .with_numbers(class == CharacterClass::Digits)
            .with_symbols(class == CharacterClass::Symbols)
    }

    #[test]
    fn full_alphabet_without_filtering() {
        let options = PasswordGenerationOptions::default().with_exclude_similar(false);
        let alphabet = build_alphabet(&options).unwrap();

        assert_eq!(
            alphabet.to_string(),
            "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789!@#$%^&*()-_=+[]{}|;:,.<>?"
        );
        assert_eq!(alphabet.len(), 26 + 26 + 10 + 26);
    }

    #[test]
    fn similar_characters_are_removed() {
        let alphabet = build_alphabet(&PasswordGenerationOptions::default()).unwrap();

        for c in SIMILAR_CHARACTERS {
            assert!(!alphabet.contains(c), "{} should be excluded", c);
        }
        assert_eq!(alphabet.len(), 26 + 26 + 10 + 26 - SIMILAR_CHARACTERS.len());
        assert!(alphabet.contains('L'));
        assert!(alphabet.contains('i'));
    }

    #[test]
    fn single_class_keeps_class_order() {
        let digits = build_alphabet(&only(CharacterClass::Digits)).unwrap();
        assert_eq!(digits.to_string(), "23456789");

        let upper = build_alphabet(&only(CharacterClass::Uppercase).with_exclude_similar(false)).unwrap();
        assert_eq!(upper.to_string(), "ABCDEFGHIJKLMNOPQRSTUVWXYZ");
    }

    #[test]
    fn symbols_are_untouched_by_filtering() {
        let symbols = build_alphabet(&only(CharacterClass::Symbols)).unwrap();
        assert_eq!(symbols.to_string(), CharacterClass::Symbols.base_characters());
    }

    #[test]
    fn no_classes_is_invalid() {
        let options = PasswordGenerationOptions::default()
            .with_lowercase(false)
            .with_uppercase(false)
            .with_numbers(false)
            .with_symbols(false);

        assert!(matches!(
            build_alphabet(&options),
            Err(GeneratorError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn class_alphabets_follow_enabled_classes() {
        let options = PasswordGenerationOptions::default().with_uppercase(false);
        let classes: Vec<CharacterClass> = build_class_alphabets(&options)
            .into_iter()
            .map(|(class, _)| class)
            .collect();

        assert_eq!(
            classes,
            vec![CharacterClass::Lowercase, CharacterClass::Digits, CharacterClass::Symbols]
        );
    }
}
