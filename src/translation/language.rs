//! The fixed set of languages the translation service accepts.

use thiserror::Error;

use crate::ui::Style;

/// A language the service can translate from or to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Language {
    /// Human-readable name, as typed at the prompt.
    pub name: &'static str,
    /// Code sent to the API.
    pub code: &'static str,
}

/// Supported languages, in the order they are offered to the user.
pub const LANGUAGES: &[Language] = &[
    Language { name: "English", code: "eng" },
    Language { name: "Luganda", code: "lug" },
    Language { name: "Runyankole", code: "nyn" },
    Language { name: "Ateso", code: "teo" },
    Language { name: "Lugbara", code: "lgg" },
    Language { name: "Acholi", code: "ach" },
];

/// A validated source/target combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguagePair {
    pub source: Language,
    pub target: Language,
}

/// Why a language selection was rejected.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectionError {
    #[error("Invalid language selection. Please choose valid languages.")]
    Invalid,
    #[error("Source and target languages must be different.")]
    SameLanguage,
}

/// Looks up a language by its display name.
///
/// Matching is case-sensitive; surrounding whitespace is ignored.
pub fn find_language(name: &str) -> Option<Language> {
    let name = name.trim();
    LANGUAGES.iter().copied().find(|lang| lang.name == name)
}

/// Returns the API code for a language name, if it is supported.
pub fn language_code(name: &str) -> Option<&'static str> {
    find_language(name).map(|lang| lang.code)
}

/// Validates a source/target selection.
///
/// Both names must be supported before they are compared, so an unknown
/// name typed twice reports [`SelectionError::Invalid`].
pub fn validate_pair(source: &str, target: &str) -> Result<LanguagePair, SelectionError> {
    let (Some(source), Some(target)) = (find_language(source), find_language(target)) else {
        return Err(SelectionError::Invalid);
    };

    if source == target {
        return Err(SelectionError::SameLanguage);
    }

    Ok(LanguagePair { source, target })
}

/// Formats the choice list used in prompts, e.g. `one of A, B or C`.
pub fn choices_hint() -> String {
    let names: Vec<&str> = LANGUAGES.iter().map(|lang| lang.name).collect();
    match names.split_last() {
        Some((last, rest)) if !rest.is_empty() => {
            format!("one of {} or {last}", rest.join(", "))
        }
        Some((last, _)) => format!("one of {last}"),
        None => String::new(),
    }
}

/// Prints the supported languages and their codes to stdout.
pub fn print_languages() {
    println!("{}", Style::header("Supported languages"));
    for lang in LANGUAGES {
        println!("  {:11} {}", lang.name, Style::code(lang.code));
    }
}
